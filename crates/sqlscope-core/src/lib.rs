//! # sqlscope-core
//!
//! An error-recovering front end for a restricted SQL dialect (SELECT,
//! INSERT, UPDATE, DELETE and CREATE TABLE with boolean WHERE
//! expressions), built for visualization: the parser keeps every consumed
//! token as a leaf, so the output is a full concrete syntax tree rather
//! than an abstracted AST.
//!
//! This crate provides:
//! - A hand-written single-pass scanner that encodes lexical faults as
//!   `ERROR` tokens instead of failing
//! - A recursive descent parser with panic-mode recovery that collects
//!   diagnostics while it keeps parsing, so one pass surfaces many
//!   independent errors
//!
//! Both stages are pure functions of their input: no state is retained
//! between calls, and neither ever returns an error to its caller. The
//! only caller-visible failure mode is a degenerate tree alongside a
//! non-empty diagnostics list.
//!
//! ```rust
//! use sqlscope_core::{parse, scan};
//!
//! let tokens = scan("SELECT name FROM users WHERE id = 42;");
//! let (tree, diagnostics) = parse(&tokens);
//!
//! assert!(diagnostics.is_empty());
//! assert_eq!(tree.name, "Program");
//! assert_eq!(tree.children[0].name, "SelectStmt");
//! ```
//!
//! ## Limits
//!
//! Parser recursion follows the nesting depth of parenthesized and `NOT`
//! expressions, so pathologically deep nesting can exhaust the call
//! stack. No depth bound is imposed.

pub mod lexer;
pub mod parser;

pub use lexer::{Position, Scanner, Token, TokenKind};
pub use parser::{Diagnostic, ParseNode, Parser};

/// Tokenizes SQL source text.
///
/// Never fails: lexical faults become [`TokenKind::Error`] tokens inline
/// in the output. The returned sequence carries no end-of-input sentinel.
#[must_use]
pub fn scan(input: &str) -> Vec<Token> {
    Scanner::new(input).tokenize()
}

/// Parses a scanned token sequence.
///
/// Always returns a `"Program"` root (possibly childless) together with
/// the diagnostics collected during recovery, in discovery order.
#[must_use]
pub fn parse(tokens: &[Token]) -> (ParseNode, Vec<Diagnostic>) {
    Parser::new(tokens).parse()
}
