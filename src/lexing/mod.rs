pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{lookup_ident, Token, TokenKind, TokenString};
