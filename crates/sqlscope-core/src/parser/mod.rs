//! SQL Parser
//!
//! A hand-written recursive descent parser with panic-mode error recovery.
//! Parsing never fails: required-token mismatches insert placeholder
//! leaves and record diagnostics, and unrecognized statements are skipped
//! to the next synchronization point so one pass surfaces many
//! independent errors.

mod diagnostic;
mod parser;
mod tree;

pub use diagnostic::Diagnostic;
pub use parser::Parser;
pub use tree::ParseNode;
