use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use strum::{AsRefStr, EnumIter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    Illegal,
    EndOfInput,

    // Identifiers + literals
    #[strum(serialize = "ident")]
    Identifier,
    #[strum(serialize = "int")]
    Integer,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    #[strum(serialize = "lt")]
    LessThan,
    #[strum(serialize = "gt")]
    GreaterThan,
    #[strum(serialize = "eq")]
    Equal,
    #[strum(serialize = "not_eq")]
    NotEqual,

    // Delimiters
    Comma,
    Semicolon,
    #[strum(serialize = "lparen")]
    LParen,
    #[strum(serialize = "rparen")]
    RParen,
    #[strum(serialize = "lbrace")]
    LBrace,
    #[strum(serialize = "rbrace")]
    RBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = HashMap::from([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ]);
}

/// Resolves identifier text to its keyword kind, or `Identifier` when the
/// text is not reserved.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, literal: S) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// Identifier or keyword token, depending on the text.
    pub fn ident(literal: String) -> Self {
        Token::new(lookup_ident(&literal), literal)
    }

    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Token(kind: {}, literal: {})", self.kind, self.literal)
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks = self
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        String::from("Vec(") + &toks + ")"
    }
}
