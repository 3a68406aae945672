pub use hai::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_token {

    use hai::lexing::*;

    pub fn test(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    pub fn ident(name: &str) -> Token {
        test(TokenKind::Identifier, name)
    }

    pub fn int(digits: &str) -> Token {
        test(TokenKind::Integer, digits)
    }

    pub fn assign() -> Token {
        test(TokenKind::Assign, "=")
    }

    pub fn semicolon() -> Token {
        test(TokenKind::Semicolon, ";")
    }

    pub fn comma() -> Token {
        test(TokenKind::Comma, ",")
    }

    pub fn left_paren() -> Token {
        test(TokenKind::LParen, "(")
    }

    pub fn right_paren() -> Token {
        test(TokenKind::RParen, ")")
    }

    pub fn left_brace() -> Token {
        test(TokenKind::LBrace, "{")
    }

    pub fn right_brace() -> Token {
        test(TokenKind::RBrace, "}")
    }

    pub fn let_keyword() -> Token {
        test(TokenKind::Let, "let")
    }

    pub fn fn_keyword() -> Token {
        test(TokenKind::Function, "fn")
    }

    pub fn return_keyword() -> Token {
        test(TokenKind::Return, "return")
    }

    pub fn end_of_input() -> Token {
        Token::end_of_input()
    }
}

#[allow(dead_code)]
pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    #[allow(dead_code)]
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

#[allow(dead_code)]
pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    #[allow(dead_code)]
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[allow(dead_code)]
pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!("Expected {} {}, got {}", expected.len(), kind, got.len());
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
