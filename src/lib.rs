pub mod diagnostic;
pub mod lexing;
pub mod parsing;
pub mod repl;
pub mod source;

use diagnostic::*;
use lexing::*;
use parsing::*;
pub use source::*;
use std::io::{self, Write};
use std::rc::Rc;

/// Parses `input` as a program, returning the tree and the parser's errors.
pub fn parse(input: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Scanner::new(input));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Parses a whole source file, writing the tree to `output`. Returns the
/// number of errors handed to `reporter`.
pub fn run<W: Write>(source: Source, output: &mut W, reporter: Rc<dyn Reporter>) -> io::Result<usize> {
    let scanner = Scanner::from_source(source);
    let mut parser = Parser::new(scanner);
    let program = parser.parse_program();

    let mut printer = ASTPrinter::new();
    printer.print(&program);
    for line in printer.collected() {
        writeln!(output, "{}", line)?;
    }

    for error in parser.errors() {
        reporter.report(Diagnostic::error(error));
    }
    Ok(parser.errors().len())
}
