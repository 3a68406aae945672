use crate::lexing::Token;
use std::fmt;

pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }

    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
}

pub struct ReturnStatement {
    pub token: Token,
}

pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
}

impl Statement {
    pub fn let_stmt(token: Token, name: Token) -> Self {
        Statement::Let(LetStatement {
            token,
            name: Identifier::new(name),
        })
    }

    pub fn return_stmt(token: Token) -> Self {
        Statement::Return(ReturnStatement { token })
    }

    pub fn accept<V: StatementVisitor>(&self, visitor: &mut V) -> V::StatementResult {
        match self {
            Statement::Let(stmt) => visitor.visit_let_stmt(stmt),
            Statement::Return(stmt) => visitor.visit_return_stmt(stmt),
        }
    }

    /// Literal of the token that introduced this statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.literal,
            Statement::Return(stmt) => &stmt.token.literal,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{} {};", stmt.token.literal, stmt.name.value),
            Statement::Return(stmt) => write!(f, "{};", stmt.token.literal),
        }
    }
}

pub trait StatementVisitor {
    type StatementResult;

    fn visit_let_stmt(&mut self, stmt: &LetStatement) -> Self::StatementResult;
    fn visit_return_stmt(&mut self, stmt: &ReturnStatement) -> Self::StatementResult;
}

#[derive(Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|s| s.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
