//! Concrete parse tree nodes.

use core::fmt;

use serde::Serialize;

use crate::lexer::Token;

/// A node in the concrete parse tree.
///
/// Interior nodes carry a production label and an empty lexeme; leaves
/// mirror the token they were built from, labeled with its category
/// (`"Keyword"`, `"Identifier"`, `"Operator"`, ...). A parent exclusively
/// owns its children, so the tree is acyclic and unshared by construction.
///
/// Every consumed keyword, type, operator and delimiter becomes a leaf, so
/// the tree is a full concrete syntax tree rather than an abstracted AST.
/// The one exception is grouping parentheses, which are dissolved:
/// precedence is encoded purely by tree shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    /// The production or leaf-category label.
    pub name: &'static str,
    /// The literal token text; empty for interior nodes and for
    /// placeholder leaves inserted during recovery.
    pub lexeme: String,
    /// Ordered child nodes.
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Creates an interior node with no children yet.
    #[must_use]
    pub const fn branch(name: &'static str) -> Self {
        Self {
            name,
            lexeme: String::new(),
            children: Vec::new(),
        }
    }

    /// Creates a leaf mirroring `token`.
    #[must_use]
    pub fn leaf(token: &Token) -> Self {
        Self {
            name: token.kind.category(),
            lexeme: token.lexeme.clone(),
            children: Vec::new(),
        }
    }

    /// Creates the empty placeholder leaf that stands in for a token the
    /// parser expected but did not find.
    #[must_use]
    pub const fn placeholder(name: &'static str) -> Self {
        Self {
            name,
            lexeme: String::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child node.
    pub fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        if self.lexeme.is_empty() {
            writeln!(f, "{}", self.name)?;
        } else {
            writeln!(f, "{}: {}", self.name, self.lexeme)?;
        }
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// One node per line, two-space indent per depth level.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
