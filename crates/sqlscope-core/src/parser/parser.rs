//! SQL Parser implementation.

use tracing::{debug, trace};

use super::{Diagnostic, ParseNode};
use crate::lexer::{Position, Token, TokenKind};

/// A recursive descent parser over a scanned token slice.
///
/// One production method per grammar rule, one token of lookahead. The
/// parser is total: every call to [`Parser::parse`] returns a `Program`
/// root and a diagnostics list, never an error. Recovery happens at two
/// levels. Inside a production, a required-token mismatch records a
/// diagnostic and substitutes an empty placeholder leaf without consuming
/// the found token. At statement level, a token that cannot begin a
/// statement triggers synchronization to the next semicolon or statement
/// keyword and the malformed statement contributes no child.
///
/// Recursion depth follows the nesting depth of parenthesized and NOT
/// expressions in the input; no bound is imposed, so pathologically deep
/// nesting can exhaust the call stack.
pub struct Parser<'a> {
    tokens: &'a [Token],
    /// Index of the current (lookahead) token.
    index: usize,
    diagnostics: Vec<Diagnostic>,
    /// End-of-input sentinel, reused for every past-the-end look.
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given token slice.
    ///
    /// The end-of-input sentinel inherits the last real token's position,
    /// or line 1, column 0 when the slice is empty.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = Token::new(
            TokenKind::Eof,
            "",
            tokens.last().map_or_else(Position::default, |t| t.position),
        );
        Self {
            tokens,
            index: 0,
            diagnostics: Vec::new(),
            eof,
        }
    }

    /// Parses the whole token stream.
    ///
    /// Returns the `Program` root, whose children are the successfully
    /// recognized statements in source order, and the diagnostics in
    /// discovery order.
    #[must_use]
    pub fn parse(mut self) -> (ParseNode, Vec<Diagnostic>) {
        let mut program = ParseNode::branch("Program");

        while !self.is_at_end() {
            match self.current().kind {
                TokenKind::Select => {
                    let stmt = self.select_stmt();
                    program.push(stmt);
                }
                TokenKind::Insert => {
                    let stmt = self.insert_stmt();
                    program.push(stmt);
                }
                TokenKind::Update => {
                    let stmt = self.update_stmt();
                    program.push(stmt);
                }
                TokenKind::Delete => {
                    let stmt = self.delete_stmt();
                    program.push(stmt);
                }
                TokenKind::Create => {
                    let stmt = self.create_stmt();
                    program.push(stmt);
                }
                TokenKind::Error => {
                    // A lexical fault: surface its embedded message as a
                    // diagnostic, then resynchronize.
                    let message = self.current().lexeme.clone();
                    self.report(message);
                    self.synchronize();
                }
                _ => {
                    self.report("Expected statement (SELECT, INSERT, UPDATE, DELETE, CREATE)");
                    self.synchronize();
                }
            }
        }

        debug!(
            statements = program.children.len(),
            diagnostics = self.diagnostics.len(),
            "parse complete"
        );
        (program, self.diagnostics)
    }

    // --- Statement productions ---

    /// `SelectStmt ::= SELECT SelectList FROM Identifier WhereClause? OrderClause? ';'`
    fn select_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("SelectStmt");
        node.push(self.take_leaf());
        node.push(self.select_list());
        node.push(self.consume(TokenKind::From, "Expected 'FROM' after select list"));
        node.push(self.consume(TokenKind::Identifier, "Expected table name"));
        if self.check(TokenKind::Where) {
            node.push(self.where_clause());
        }
        if self.check(TokenKind::Order) {
            node.push(self.order_clause());
        }
        node.push(self.consume(TokenKind::Semicolon, "Expected ';' at end of statement"));
        node
    }

    /// `SelectList ::= '*' | Identifier (',' Identifier)*`
    fn select_list(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("SelectList");
        if self.check(TokenKind::Multiply) {
            node.push(self.take_leaf());
            return node;
        }

        node.push(self.consume(TokenKind::Identifier, "Expected column name"));
        while self.check(TokenKind::Comma) {
            node.push(self.take_leaf());
            node.push(self.consume(TokenKind::Identifier, "Expected column name after ','"));
        }
        node
    }

    /// `WhereClause ::= WHERE Condition`
    fn where_clause(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("WhereClause");
        node.push(self.take_leaf());
        node.push(self.condition());
        node
    }

    /// `OrderClause ::= ORDER BY Identifier (ASC | DESC)? (',' ...)*`
    fn order_clause(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("OrderClause");
        node.push(self.take_leaf());
        node.push(self.consume(TokenKind::By, "Expected 'BY' after ORDER"));
        self.order_key(&mut node);
        while self.check(TokenKind::Comma) {
            node.push(self.take_leaf());
            self.order_key(&mut node);
        }
        node
    }

    /// One ORDER BY key with its optional direction.
    fn order_key(&mut self, node: &mut ParseNode) {
        node.push(self.consume(TokenKind::Identifier, "Expected column name in ORDER BY"));
        if matches!(self.current().kind, TokenKind::Asc | TokenKind::Desc) {
            node.push(self.take_leaf());
        }
    }

    /// `InsertStmt ::= INSERT INTO Identifier VALUES '(' ValueList ')' ';'`
    fn insert_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("InsertStmt");
        node.push(self.take_leaf());
        node.push(self.consume(TokenKind::Into, "Expected 'INTO' after INSERT"));
        node.push(self.consume(TokenKind::Identifier, "Expected table name"));
        node.push(self.consume(TokenKind::Values, "Expected 'VALUES'"));
        node.push(self.consume(TokenKind::LeftParen, "Expected '(' after VALUES"));
        node.push(self.value_list());
        node.push(self.consume(TokenKind::RightParen, "Expected ')' after value list"));
        node.push(self.consume(TokenKind::Semicolon, "Expected ';' at end of statement"));
        node
    }

    /// `ValueList ::= Value (',' Value)*`
    fn value_list(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("ValueList");
        node.push(self.value());
        while self.check(TokenKind::Comma) {
            node.push(self.take_leaf());
            node.push(self.value());
        }
        node
    }

    /// `Value ::= NUMBER | STRING | NULL | TRUE | FALSE | Identifier`
    fn value(&mut self) -> ParseNode {
        match self.current().kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Null
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Identifier => self.take_leaf(),
            _ => {
                self.report("Expected value");
                ParseNode::placeholder("Value")
            }
        }
    }

    /// `UpdateStmt ::= UPDATE Identifier SET AssignList WhereClause? ';'`
    fn update_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("UpdateStmt");
        node.push(self.take_leaf());
        node.push(self.consume(TokenKind::Identifier, "Expected table name"));
        node.push(self.consume(TokenKind::Set, "Expected 'SET' after table name"));
        node.push(self.assign_list());
        if self.check(TokenKind::Where) {
            node.push(self.where_clause());
        }
        node.push(self.consume(TokenKind::Semicolon, "Expected ';' at end of statement"));
        node
    }

    /// `AssignList ::= Assignment (',' Assignment)*`
    fn assign_list(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("AssignList");
        node.push(self.assignment());
        while self.check(TokenKind::Comma) {
            node.push(self.take_leaf());
            node.push(self.assignment());
        }
        node
    }

    /// `Assignment ::= Identifier '=' Value`
    fn assignment(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("Assignment");
        node.push(self.consume(TokenKind::Identifier, "Expected column name"));
        node.push(self.consume(TokenKind::Equal, "Expected '=' in assignment"));
        node.push(self.value());
        node
    }

    /// `DeleteStmt ::= DELETE FROM Identifier WhereClause? ';'`
    fn delete_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("DeleteStmt");
        node.push(self.take_leaf());
        node.push(self.consume(TokenKind::From, "Expected 'FROM' after DELETE"));
        node.push(self.consume(TokenKind::Identifier, "Expected table name"));
        if self.check(TokenKind::Where) {
            node.push(self.where_clause());
        }
        node.push(self.consume(TokenKind::Semicolon, "Expected ';' at end of statement"));
        node
    }

    /// `CreateStmt ::= CREATE TABLE Identifier '(' FieldList ')' ';'`
    fn create_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("CreateStmt");
        node.push(self.take_leaf());
        node.push(self.consume(TokenKind::Table, "Expected 'TABLE' after CREATE"));
        node.push(self.consume(TokenKind::Identifier, "Expected table name"));
        node.push(self.consume(TokenKind::LeftParen, "Expected '(' before field list"));
        node.push(self.field_list());
        node.push(self.consume(TokenKind::RightParen, "Expected ')' after field list"));
        node.push(self.consume(TokenKind::Semicolon, "Expected ';' at end of statement"));
        node
    }

    /// `FieldList ::= FieldDef (',' FieldDef)*`
    fn field_list(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("FieldList");
        node.push(self.field_def());
        while self.check(TokenKind::Comma) {
            node.push(self.take_leaf());
            node.push(self.field_def());
        }
        node
    }

    /// `FieldDef ::= Identifier TYPE (PRIMARY KEY)?`
    fn field_def(&mut self) -> ParseNode {
        let mut node = ParseNode::branch("FieldDef");
        node.push(self.consume(TokenKind::Identifier, "Expected field name"));
        node.push(self.consume(TokenKind::Type, "Expected field type"));
        if self.check(TokenKind::Primary) {
            node.push(self.take_leaf());
            node.push(self.consume(TokenKind::Key, "Expected 'KEY' after PRIMARY"));
        }
        node
    }

    // --- Condition productions ---
    //
    // Precedence, low to high: OR, AND, NOT, relational, term. OR and AND
    // chains build left-deep binary nodes.

    /// `Condition ::= OrExpr`
    fn condition(&mut self) -> ParseNode {
        self.or_expr()
    }

    /// `OrExpr ::= AndExpr (OR AndExpr)*`
    fn or_expr(&mut self) -> ParseNode {
        let mut node = self.and_expr();
        while self.check(TokenKind::Or) {
            let mut parent = ParseNode::branch("Condition");
            parent.push(node);
            parent.push(self.take_leaf());
            parent.push(self.and_expr());
            node = parent;
        }
        node
    }

    /// `AndExpr ::= NotExpr (AND NotExpr)*`
    fn and_expr(&mut self) -> ParseNode {
        let mut node = self.not_expr();
        while self.check(TokenKind::And) {
            let mut parent = ParseNode::branch("Condition");
            parent.push(node);
            parent.push(self.take_leaf());
            parent.push(self.not_expr());
            node = parent;
        }
        node
    }

    /// `NotExpr ::= NOT NotExpr | RelExpr`
    fn not_expr(&mut self) -> ParseNode {
        if self.check(TokenKind::Not) {
            let mut node = ParseNode::branch("NotExpr");
            node.push(self.take_leaf());
            node.push(self.not_expr());
            node
        } else {
            self.rel_expr()
        }
    }

    /// `RelExpr ::= Term (RelOp Term)?` — non-chaining; without an
    /// operator the bare term node is returned directly.
    fn rel_expr(&mut self) -> ParseNode {
        let left = self.term();
        if self.current().kind.is_relational() {
            let mut node = ParseNode::branch("RelExpr");
            node.push(left);
            node.push(self.take_leaf());
            node.push(self.term());
            node
        } else {
            left
        }
    }

    /// `Term ::= Identifier | Number | String | NULL | TRUE | FALSE | '(' Condition ')'`
    ///
    /// Grouping parentheses are dissolved: the inner condition node is
    /// returned as-is, with no grouping marker.
    fn term(&mut self) -> ParseNode {
        match self.current().kind {
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Null
            | TokenKind::True
            | TokenKind::False => self.take_leaf(),
            TokenKind::LeftParen => {
                self.bump();
                let node = self.condition();
                self.consume(TokenKind::RightParen, "Expected ')' after condition");
                node
            }
            _ => {
                self.report("Expected expression term");
                ParseNode::placeholder("Term")
            }
        }
    }

    // --- Recovery ---

    /// Records a diagnostic at the current token, collapsing consecutive
    /// diagnostics that share a source position.
    fn report(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(message, self.current());
        if self
            .diagnostics
            .last()
            .is_some_and(|last| last.same_position(&diagnostic))
        {
            return;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Skips to the next statement boundary: consumes the offending token,
    /// then everything up to and including a semicolon, or up to (not
    /// including) the next statement-starting keyword.
    fn synchronize(&mut self) {
        trace!(
            line = self.current().position.line,
            column = self.current().position.column,
            "synchronizing"
        );
        self.bump();
        while !self.is_at_end() {
            if self.check(TokenKind::Semicolon) {
                self.bump();
                return;
            }
            if self.current().kind.starts_statement() {
                return;
            }
            self.bump();
        }
    }

    // --- Token cursor ---

    /// The current token, or the end-of-input sentinel past the end.
    fn current(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.eof)
    }

    fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Advances past the current token, saturating at end of input.
    fn bump(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Checks whether the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consumes the current token into a leaf node.
    fn take_leaf(&mut self) -> ParseNode {
        let leaf = ParseNode::leaf(self.current());
        self.bump();
        leaf
    }

    /// Requires a token of `kind` at the current position. On a match the
    /// token becomes a leaf; on a mismatch a diagnostic is recorded and an
    /// empty placeholder leaf stands in, without consuming the found
    /// token.
    fn consume(&mut self, kind: TokenKind, message: &str) -> ParseNode {
        if self.check(kind) {
            self.take_leaf()
        } else {
            self.report(message);
            ParseNode::placeholder(kind.category())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;

    fn parse(sql: &str) -> (ParseNode, Vec<Diagnostic>) {
        let tokens = Scanner::new(sql).tokenize();
        Parser::new(&tokens).parse()
    }

    #[test]
    fn test_select_with_condition() {
        let (tree, diagnostics) =
            parse("SELECT name, age FROM students WHERE age >= 18 AND status = 'active';");
        assert!(diagnostics.is_empty());
        assert_eq!(tree.name, "Program");
        assert_eq!(tree.children.len(), 1);

        let stmt = &tree.children[0];
        assert_eq!(stmt.name, "SelectStmt");

        let list = &stmt.children[1];
        assert_eq!(list.name, "SelectList");
        assert_eq!(list.children.len(), 3);
        assert_eq!(list.children[0].name, "Identifier");
        assert_eq!(list.children[0].lexeme, "name");
        assert_eq!(list.children[1].name, "Delimiter");
        assert_eq!(list.children[1].lexeme, ",");
        assert_eq!(list.children[2].lexeme, "age");

        let where_clause = &stmt.children[4];
        assert_eq!(where_clause.name, "WhereClause");
        let condition = &where_clause.children[1];
        assert_eq!(condition.name, "Condition");
        assert_eq!(condition.children[1].name, "Keyword");
        assert_eq!(condition.children[1].lexeme, "AND");

        let left = &condition.children[0];
        assert_eq!(left.name, "RelExpr");
        assert_eq!(left.children[1].lexeme, ">=");
        let right = &condition.children[2];
        assert_eq!(right.name, "RelExpr");
        assert_eq!(right.children[1].lexeme, "=");
        assert_eq!(right.children[2].lexeme, "'active'");
    }

    #[test]
    fn test_unrecognized_statement_synchronizes() {
        let (tree, diagnostics) = parse("SELEC * FROM t;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Expected statement (SELECT, INSERT, UPDATE, DELETE, CREATE)"
        );
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(diagnostics[0].column, 1);
        assert_eq!(diagnostics[0].found, "SELEC");
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_missing_semicolon_keeps_statement() {
        let (tree, diagnostics) = parse("CREATE TABLE t (id INT PRIMARY KEY, name TEXT)");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected ';' at end of statement");
        assert_eq!(diagnostics[0].found, "");

        assert_eq!(tree.children.len(), 1);
        let stmt = &tree.children[0];
        assert_eq!(stmt.name, "CreateStmt");

        let fields = &stmt.children[4];
        assert_eq!(fields.name, "FieldList");
        let defs: Vec<_> = fields
            .children
            .iter()
            .filter(|c| c.name == "FieldDef")
            .collect();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].children[0].lexeme, "id");
        assert_eq!(defs[0].children[1].lexeme, "INT");
        assert_eq!(defs[0].children[2].lexeme, "PRIMARY");
        assert_eq!(defs[0].children[3].lexeme, "KEY");
        assert_eq!(defs[1].children[1].lexeme, "TEXT");
    }

    #[test]
    fn test_missing_from_recovers_with_placeholder() {
        let (tree, diagnostics) = parse("SELECT a t;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected 'FROM' after select list");
        assert_eq!(diagnostics[0].found, "t");

        let stmt = &tree.children[0];
        assert_eq!(stmt.name, "SelectStmt");
        // The FROM slot holds an empty placeholder; the found token still
        // serves as the table name.
        assert_eq!(stmt.children[2].name, "Keyword");
        assert!(stmt.children[2].lexeme.is_empty());
        assert_eq!(stmt.children[3].lexeme, "t");
    }

    #[test]
    fn test_consecutive_diagnostics_deduplicated() {
        // The dangling ')' is reported once even though the term, the
        // semicolon consume and statement dispatch all look at it.
        let (_, diagnostics) = parse("SELECT a FROM t WHERE );");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected expression term");
        let positions: Vec<_> = diagnostics.iter().map(|d| (d.line, d.column)).collect();
        let mut deduped = positions.clone();
        deduped.dedup();
        assert_eq!(positions, deduped);
    }

    #[test]
    fn test_insert_statement() {
        let (tree, diagnostics) =
            parse("INSERT INTO users VALUES (1, 'Ada', TRUE, NULL);");
        assert!(diagnostics.is_empty());
        let stmt = &tree.children[0];
        assert_eq!(stmt.name, "InsertStmt");

        let values = &stmt.children[5];
        assert_eq!(values.name, "ValueList");
        let lexemes: Vec<_> = values
            .children
            .iter()
            .filter(|c| c.name != "Delimiter")
            .map(|c| c.lexeme.as_str())
            .collect();
        assert_eq!(lexemes, vec!["1", "'Ada'", "TRUE", "NULL"]);
    }

    #[test]
    fn test_update_statement() {
        let (tree, diagnostics) =
            parse("UPDATE users SET name = 'Bob', active = FALSE WHERE id = 1;");
        assert!(diagnostics.is_empty());
        let stmt = &tree.children[0];
        assert_eq!(stmt.name, "UpdateStmt");

        let assigns = &stmt.children[3];
        assert_eq!(assigns.name, "AssignList");
        let pairs: Vec<_> = assigns
            .children
            .iter()
            .filter(|c| c.name == "Assignment")
            .collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].children[0].lexeme, "name");
        assert_eq!(pairs[0].children[1].lexeme, "=");
        assert_eq!(pairs[0].children[2].lexeme, "'Bob'");
        assert_eq!(stmt.children[4].name, "WhereClause");
    }

    #[test]
    fn test_delete_statement() {
        let (tree, diagnostics) = parse("DELETE FROM logs WHERE date < '2024-01-01';");
        assert!(diagnostics.is_empty());
        let stmt = &tree.children[0];
        assert_eq!(stmt.name, "DeleteStmt");
        let rel = &stmt.children[3].children[1];
        assert_eq!(rel.name, "RelExpr");
        assert_eq!(rel.children[2].lexeme, "'2024-01-01'");
    }

    #[test]
    fn test_select_wildcard_and_order() {
        let (tree, diagnostics) = parse("SELECT * FROM t ORDER BY age DESC, name;");
        assert!(diagnostics.is_empty());
        let stmt = &tree.children[0];

        let list = &stmt.children[1];
        assert_eq!(list.children.len(), 1);
        assert_eq!(list.children[0].name, "Operator");
        assert_eq!(list.children[0].lexeme, "*");

        let order = &stmt.children[4];
        assert_eq!(order.name, "OrderClause");
        let lexemes: Vec<_> = order.children.iter().map(|c| c.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["ORDER", "BY", "age", "DESC", ",", "name"]);
    }

    #[test]
    fn test_or_chain_is_left_deep() {
        let (tree, diagnostics) = parse("SELECT a FROM t WHERE x OR y OR z;");
        assert!(diagnostics.is_empty());
        let condition = &tree.children[0].children[4].children[1];
        // ((x OR y) OR z): the outer node's left child is itself an OR node.
        assert_eq!(condition.name, "Condition");
        assert_eq!(condition.children[2].lexeme, "z");
        let inner = &condition.children[0];
        assert_eq!(inner.name, "Condition");
        assert_eq!(inner.children[0].lexeme, "x");
        assert_eq!(inner.children[2].lexeme, "y");
    }

    #[test]
    fn test_not_nests() {
        let (tree, diagnostics) = parse("SELECT a FROM t WHERE NOT NOT x;");
        assert!(diagnostics.is_empty());
        let outer = &tree.children[0].children[4].children[1];
        assert_eq!(outer.name, "NotExpr");
        let inner = &outer.children[1];
        assert_eq!(inner.name, "NotExpr");
        assert_eq!(inner.children[1].lexeme, "x");
    }

    #[test]
    fn test_parentheses_dissolve() {
        // a AND (b OR c): the parens leave no trace, only tree shape.
        let (tree, diagnostics) = parse("SELECT a FROM t WHERE a AND (b OR c);");
        assert!(diagnostics.is_empty());
        let and_node = &tree.children[0].children[4].children[1];
        assert_eq!(and_node.children[1].lexeme, "AND");
        let or_node = &and_node.children[2];
        assert_eq!(or_node.name, "Condition");
        assert_eq!(or_node.children[1].lexeme, "OR");
        let all_lexemes: Vec<_> = or_node.children.iter().map(|c| c.lexeme.as_str()).collect();
        assert!(!all_lexemes.contains(&"("));
        assert!(!all_lexemes.contains(&")"));
    }

    #[test]
    fn test_precedence_and_binds_tighter_than_or() {
        // x OR y AND z parses as x OR (y AND z).
        let (tree, diagnostics) = parse("SELECT a FROM t WHERE x OR y AND z;");
        assert!(diagnostics.is_empty());
        let or_node = &tree.children[0].children[4].children[1];
        assert_eq!(or_node.children[1].lexeme, "OR");
        assert_eq!(or_node.children[0].lexeme, "x");
        let and_node = &or_node.children[2];
        assert_eq!(and_node.children[1].lexeme, "AND");
    }

    #[test]
    fn test_multiple_statements_in_order() {
        let (tree, diagnostics) = parse("DELETE FROM a; SELECT x FROM b; UPDATE c SET d = 1;");
        assert!(diagnostics.is_empty());
        let names: Vec<_> = tree.children.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["DeleteStmt", "SelectStmt", "UpdateStmt"]);
    }

    #[test]
    fn test_error_after_good_statement_still_reports_both() {
        let (tree, diagnostics) = parse("SELECT a FROM t; DROP x; DELETE FROM u;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].found, "DROP");
        let names: Vec<_> = tree.children.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["SelectStmt", "DeleteStmt"]);
    }

    #[test]
    fn test_lexical_error_becomes_diagnostic() {
        let (tree, diagnostics) = parse("@ SELECT a FROM t;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Invalid character '@'");
        assert_eq!(diagnostics[0].found, "Invalid character '@'");
        // Synchronization lands on SELECT, so the statement still parses.
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_empty_input_parses_to_childless_program() {
        let (tree, diagnostics) = parse("");
        assert_eq!(tree.name, "Program");
        assert!(tree.children.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_eof_diagnostic_inherits_last_token_position() {
        let (_, diagnostics) = parse("DELETE FROM t");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected ';' at end of statement");
        // The sentinel reuses the last real token's position.
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(diagnostics[0].column, 13);
        assert_eq!(diagnostics[0].found, "");
    }
}
