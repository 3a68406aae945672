use crate::diagnostic::*;
use crate::lexing::*;
use crate::source::Source;
use clap::ValueEnum;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

pub const PROMPT: &str = ">> ";

/// What the console does with each line it reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print every token scanned from the line.
    Tokens,
    /// Parse the line as a program and print its tree.
    Program,
}

pub fn start<R, W>(input: R, output: &mut W, mode: Mode, reporter: Rc<dyn Reporter>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match mode {
            Mode::Tokens => print_tokens(&line, output)?,
            Mode::Program => {
                crate::run(Source::text(&line), output, Rc::clone(&reporter))?;
            }
        }
    }
}

fn print_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    for token in Scanner::new(line) {
        writeln!(output, "{}", token)?;
    }
    Ok(())
}
