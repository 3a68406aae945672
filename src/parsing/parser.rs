use super::ast::*;
use crate::lexing::*;
use log::{debug, trace};

pub struct Parser {
    scanner: Scanner,
    current: Token,
    peek: Token,
    errors: Vec<String>,
}

impl Parser {
    pub fn new(mut scanner: Scanner) -> Self {
        let current = scanner.next_token();
        let peek = scanner.next_token();
        Parser {
            scanner,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current.is(TokenKind::EndOfInput) {
            if let Some(stmt) = self.statement() {
                trace!(target: "parser", "Parsed statement `{}`", stmt);
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }

    fn statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.let_stmt(),
            TokenKind::Return => self.return_stmt(),
            _ => None,
        }
    }

    // Assumes the current token is `let`.
    fn let_stmt(&mut self) -> Option<Statement> {
        let let_token = self.current.clone();

        self.expect_peek(TokenKind::Identifier)?;
        self.advance();
        let name = self.current.clone();

        self.expect_peek(TokenKind::Assign)?;
        self.advance();

        // Value expressions are not parsed yet.
        self.skip_to(TokenKind::Semicolon);
        self.expect_peek(TokenKind::Semicolon)?;

        Some(Statement::let_stmt(let_token, name))
    }

    // Assumes the current token is `return`.
    fn return_stmt(&mut self) -> Option<Statement> {
        let return_token = self.current.clone();

        self.skip_to(TokenKind::Semicolon);
        self.expect_peek(TokenKind::Semicolon)?;

        Some(Statement::return_stmt(return_token))
    }

    /// Checks the peek token without consuming it, recording an error on
    /// mismatch.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek.is(kind) {
            Some(())
        } else {
            self.peek_error(kind);
            None
        }
    }

    fn peek_error(&mut self, kind: TokenKind) {
        let message = format!(
            "expected next token to be {}, got {} instead",
            kind, self.peek.kind
        );
        debug!(target: "parser", "{}", message);
        self.errors.push(message);
    }

    fn skip_to(&mut self, kind: TokenKind) {
        while !self.peek.is(kind) && !self.peek.is(TokenKind::EndOfInput) {
            self.advance();
        }
    }

    fn advance(&mut self) {
        let next = self.scanner.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }
}
