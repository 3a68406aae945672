use colored::*;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Severity {
    Error,
    // Warning,
}

#[derive(Debug, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
}

impl Diagnostic {
    pub fn error(message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: String::from(message),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "Error: {}", self.message),
        }
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        self.iter()
            .map(|d| format!("  {}", d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = match diagnostic.severity {
            Severity::Error => "• Error:".red().bold(),
        };
        println!("{} {}", header, diagnostic.message);
    }
}
