//! Token types for the SQL scanner.

use serde::{Deserialize, Serialize};

use super::Position;

/// The kind of token.
///
/// A closed set, matched exhaustively by the parser. Serialized kind tags
/// use the SCREAMING_SNAKE_CASE spelling consumed by the rendering layer
/// (`NOT_EQUAL`, `LEFT_PAREN`, `SELECT`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Keywords
    /// SELECT
    Select,
    /// FROM
    From,
    /// WHERE
    Where,
    /// INSERT
    Insert,
    /// INTO
    Into,
    /// VALUES
    Values,
    /// UPDATE
    Update,
    /// SET
    Set,
    /// DELETE
    Delete,
    /// CREATE
    Create,
    /// TABLE
    Table,
    /// PRIMARY
    Primary,
    /// KEY
    Key,
    /// AND
    And,
    /// OR
    Or,
    /// NOT
    Not,
    /// NULL
    Null,
    /// ORDER
    Order,
    /// BY
    By,
    /// ASC
    Asc,
    /// DESC
    Desc,
    /// TRUE
    True,
    /// FALSE
    False,

    /// A column type name (INT, FLOAT, TEXT, VARCHAR, CHAR, DATE, DATETIME).
    Type,
    /// Identifier (e.g. column_name)
    Identifier,
    /// Numeric literal (kept as text, embedded dots and all)
    Number,
    /// String literal, quotes included
    String,

    // Operators
    /// =
    Equal,
    /// != or <>
    NotEqual,
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// <=
    LessEqual,
    /// >=
    GreaterEqual,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Multiply,
    /// /
    Divide,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// Generic delimiter (`.`)
    Delimiter,

    /// A lexical fault encoded as a token; the lexeme carries the message.
    Error,
    /// Synthetic end-of-input sentinel. Never produced by the scanner; the
    /// parser materializes it on demand past the end of the stream.
    Eof,
}

impl TokenKind {
    /// Classifies a scanned word against the keyword table.
    ///
    /// The comparison is exact: only the uppercase spelling matches, so a
    /// lowercase `select` classifies as an identifier.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "CREATE" => Some(Self::Create),
            "TABLE" => Some(Self::Table),
            "PRIMARY" => Some(Self::Primary),
            "KEY" => Some(Self::Key),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "NULL" => Some(Self::Null),
            "ORDER" => Some(Self::Order),
            "BY" => Some(Self::By),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            _ => None,
        }
    }

    /// Returns true if `word` names a column type. Exact spelling, like
    /// [`TokenKind::keyword`].
    #[must_use]
    pub fn is_type_name(word: &str) -> bool {
        matches!(
            word,
            "INT" | "FLOAT" | "TEXT" | "VARCHAR" | "CHAR" | "DATE" | "DATETIME"
        )
    }

    /// Returns true if this kind can begin a statement.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(
            self,
            Self::Select | Self::Insert | Self::Update | Self::Delete | Self::Create
        )
    }

    /// Returns true if this kind is a relational comparison operator.
    #[must_use]
    pub const fn is_relational(self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::LessThan
                | Self::GreaterThan
                | Self::LessEqual
                | Self::GreaterEqual
        )
    }

    /// The parse-tree leaf category label for this kind.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::String => "String",
            Self::Equal
            | Self::NotEqual
            | Self::LessThan
            | Self::GreaterThan
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Plus
            | Self::Minus
            | Self::Multiply
            | Self::Divide => "Operator",
            Self::LeftParen | Self::RightParen | Self::Comma | Self::Semicolon | Self::Delimiter => {
                "Delimiter"
            }
            Self::Error => "Error",
            Self::Eof => "Eof",
            _ => "Keyword",
        }
    }
}

/// A token with its lexeme and source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// The literal source text. For [`TokenKind::Error`] this holds the
    /// fault message instead.
    pub lexeme: String,
    /// The position of the token's first character.
    #[serde(flatten)]
    pub position: Position,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Returns true if this is the end-of-input sentinel.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_exact_casing_only() {
        assert_eq!(TokenKind::keyword("SELECT"), Some(TokenKind::Select));
        assert_eq!(TokenKind::keyword("select"), None);
        assert_eq!(TokenKind::keyword("SeLeCt"), None);
        assert_eq!(TokenKind::keyword("not_a_keyword"), None);
    }

    #[test]
    fn test_type_names() {
        assert!(TokenKind::is_type_name("INT"));
        assert!(TokenKind::is_type_name("DATETIME"));
        assert!(!TokenKind::is_type_name("int"));
        assert!(!TokenKind::is_type_name("BLOB"));
    }

    #[test]
    fn test_starts_statement() {
        assert!(TokenKind::Select.starts_statement());
        assert!(TokenKind::Create.starts_statement());
        assert!(!TokenKind::From.starts_statement());
        assert!(!TokenKind::Identifier.starts_statement());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(TokenKind::Select.category(), "Keyword");
        assert_eq!(TokenKind::Identifier.category(), "Identifier");
        assert_eq!(TokenKind::GreaterEqual.category(), "Operator");
        assert_eq!(TokenKind::Comma.category(), "Delimiter");
        assert_eq!(TokenKind::Delimiter.category(), "Delimiter");
    }

    #[test]
    fn test_kind_tags_serialize_screaming_snake() {
        let tag = serde_json::to_string(&TokenKind::NotEqual).unwrap();
        assert_eq!(tag, "\"NOT_EQUAL\"");
        let tag = serde_json::to_string(&TokenKind::LeftParen).unwrap();
        assert_eq!(tag, "\"LEFT_PAREN\"");
        let tag = serde_json::to_string(&TokenKind::Select).unwrap();
        assert_eq!(tag, "\"SELECT\"");
    }

    #[test]
    fn test_token_wire_shape() {
        let token = Token::new(TokenKind::Identifier, "age", Position::new(2, 14));
        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "IDENTIFIER",
                "lexeme": "age",
                "line": 2,
                "column": 14,
            })
        );
    }
}
