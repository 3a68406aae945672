mod ast;
mod ast_printer;
mod parser;

pub use ast::{
    Identifier, LetStatement, Program, ReturnStatement, Statement, StatementVisitor,
};
pub use ast_printer::ASTPrinter;
pub use parser::Parser;
