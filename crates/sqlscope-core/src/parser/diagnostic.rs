//! Syntax diagnostics collected during parsing.

use serde::{Deserialize, Serialize};

use crate::lexer::Token;

/// A recoverable syntax error tied to a source position.
///
/// Diagnostics are accumulated in discovery order while parsing continues;
/// none of them is fatal. The `Display` form is the single human-readable
/// string consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("Syntax Error: {message} at line {line}, column {column}, found '{found}'")]
pub struct Diagnostic {
    /// What the parser expected or could not recognize.
    pub message: String,
    /// 1-based line of the offending token.
    pub line: u32,
    /// 1-based column of the offending token.
    pub column: u32,
    /// The lexeme found instead; empty at end of input.
    pub found: String,
}

impl Diagnostic {
    /// Creates a diagnostic located at `token`.
    #[must_use]
    pub fn new(message: impl Into<String>, token: &Token) -> Self {
        Self {
            message: message.into(),
            line: token.position.line,
            column: token.position.column,
            found: token.lexeme.clone(),
        }
    }

    /// Returns true if `other` sits at the same source position.
    #[must_use]
    pub const fn same_position(&self, other: &Self) -> bool {
        self.line == other.line && self.column == other.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Position, TokenKind};

    #[test]
    fn test_display_format() {
        let token = Token::new(TokenKind::Identifier, "SELEC", Position::new(1, 1));
        let diagnostic = Diagnostic::new(
            "Expected statement (SELECT, INSERT, UPDATE, DELETE, CREATE)",
            &token,
        );
        assert_eq!(
            diagnostic.to_string(),
            "Syntax Error: Expected statement (SELECT, INSERT, UPDATE, DELETE, CREATE) \
             at line 1, column 1, found 'SELEC'"
        );
    }

    #[test]
    fn test_same_position() {
        let token = Token::new(TokenKind::Semicolon, ";", Position::new(3, 9));
        let a = Diagnostic::new("Expected value", &token);
        let b = Diagnostic::new("Expected ')' after value list", &token);
        assert!(a.same_position(&b));
    }

    #[test]
    fn test_serialized_fields() {
        let token = Token::new(TokenKind::Eof, "", Position::new(2, 5));
        let diagnostic = Diagnostic::new("Expected ';' at end of statement", &token);
        let value = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "Expected ';' at end of statement",
                "line": 2,
                "column": 5,
                "found": "",
            })
        );
    }
}
