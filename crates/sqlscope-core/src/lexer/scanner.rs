//! SQL Scanner implementation.

use tracing::debug;

use super::{Position, Token, TokenKind};

/// A scanner that tokenizes SQL input in a single left-to-right pass.
///
/// The scanner never fails: invalid characters, unterminated strings and
/// unterminated block comments all become [`TokenKind::Error`] tokens in
/// the output stream. An unterminated string or block comment consumes the
/// remainder of the input, so its error token is the last token produced.
pub struct Scanner<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte offset.
    pos: usize,
    /// The position of the next unread character.
    position: Position,
    /// Set when a fault swallowed the rest of the input.
    halted: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            position: Position::new(1, 1),
            halted: false,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.position.advance(c);
        Some(c)
    }

    /// Skips whitespace and line comments (`-- ...`).
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            break;
        }
    }

    /// Scans the next token, or `None` at end of input.
    fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace_and_comments();
            let start = self.position;
            let c = self.peek()?;

            // Block comments can fault, so they are not folded into the
            // silent skip above.
            if c == '#' && self.peek_next() == Some('#') {
                match self.block_comment(start) {
                    Some(error) => return Some(error),
                    None => continue,
                }
            }

            return Some(self.scan_token(start, c));
        }
    }

    /// Scans one token starting at `start` with first character `c`.
    fn scan_token(&mut self, start: Position, c: char) -> Token {
        if c.is_alphabetic() {
            return self.word(start);
        }
        if c.is_ascii_digit() {
            return self.number(start);
        }
        if c == '\'' {
            return self.string(start);
        }

        let from = self.pos;
        self.advance();

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Delimiter,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '=' => TokenKind::Equal,
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::GreaterThan
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::LessEqual
                } else if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::NotEqual
                } else {
                    TokenKind::LessThan
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::NotEqual
                } else {
                    return Token::new(TokenKind::Error, "Invalid character '!'", start);
                }
            }
            _ => {
                return Token::new(
                    TokenKind::Error,
                    format!("Invalid character '{c}'"),
                    start,
                );
            }
        };

        Token::new(kind, &self.input[from..self.pos], start)
    }

    /// Scans a keyword, type name or identifier.
    fn word(&mut self, start: Position) -> Token {
        let from = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[from..self.pos];

        // Lookup is exact: lowercase keywords scan as identifiers.
        let kind = TokenKind::keyword(text).unwrap_or(if TokenKind::is_type_name(text) {
            TokenKind::Type
        } else {
            TokenKind::Identifier
        });
        Token::new(kind, text, start)
    }

    /// Scans a number: a digit run that accepts embedded dots without
    /// validating their count or placement (`1.2.3` is one lexeme).
    fn number(&mut self, start: Position) -> Token {
        let from = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        Token::new(TokenKind::Number, &self.input[from..self.pos], start)
    }

    /// Scans a string literal. The lexeme keeps the surrounding quotes and
    /// a doubled `''` escapes a quote. Strings may span newlines; reaching
    /// end of input without a closing quote halts the scan with an error
    /// token at the opening quote.
    fn string(&mut self, start: Position) -> Token {
        let from = self.pos;
        self.advance();

        loop {
            match self.peek() {
                Some('\'') => {
                    if self.peek_next() == Some('\'') {
                        self.advance();
                        self.advance();
                    } else {
                        self.advance();
                        break;
                    }
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    self.halted = true;
                    return Token::new(TokenKind::Error, "Unterminated string literal", start);
                }
            }
        }

        Token::new(TokenKind::String, &self.input[from..self.pos], start)
    }

    /// Consumes a `## ... ##` block comment (non-nesting). Returns `None`
    /// when the comment closes, or the error token that halts the scan when
    /// it never does.
    fn block_comment(&mut self, start: Position) -> Option<Token> {
        self.advance();
        self.advance();

        loop {
            match self.advance() {
                Some('#') if self.peek() == Some('#') => {
                    self.advance();
                    return None;
                }
                Some(_) => {}
                None => {
                    self.halted = true;
                    return Some(Token::new(
                        TokenKind::Error,
                        format!(
                            "Unterminated block comment starting at line {}, column {}",
                            start.line, start.column
                        ),
                        start,
                    ));
                }
            }
        }
    }

    /// Tokenizes the entire input. The output carries no end-of-input
    /// sentinel; the parser materializes one on demand.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
            if self.halted {
                break;
            }
        }
        debug!(tokens = tokens.len(), "scan complete");
        tokens
    }
}
