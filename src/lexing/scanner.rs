use super::token::*;
use crate::source::*;
use log::trace;

pub struct Scanner {
    source: Source,
    position: usize,
    read_position: usize,
    character: Option<char>,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Scanner::from_source(input.into())
    }

    pub fn from_source(source: Source) -> Self {
        let mut scanner = Scanner {
            source,
            position: 0,
            read_position: 0,
            character: None,
        };
        scanner.advance();
        scanner
    }

    /// Scans every token in the input, including the trailing `EndOfInput`.
    pub fn tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::EndOfInput);
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.character {
            Some('=') => self.conditional_token('=', TokenKind::Equal, TokenKind::Assign),
            Some('!') => self.conditional_token('=', TokenKind::NotEqual, TokenKind::Bang),
            Some('+') => self.single_token(TokenKind::Plus),
            Some('-') => self.single_token(TokenKind::Minus),
            Some('*') => self.single_token(TokenKind::Asterisk),
            Some('/') => self.single_token(TokenKind::Slash),
            Some('<') => self.single_token(TokenKind::LessThan),
            Some('>') => self.single_token(TokenKind::GreaterThan),
            Some(';') => self.single_token(TokenKind::Semicolon),
            Some(',') => self.single_token(TokenKind::Comma),
            Some('(') => self.single_token(TokenKind::LParen),
            Some(')') => self.single_token(TokenKind::RParen),
            Some('{') => self.single_token(TokenKind::LBrace),
            Some('}') => self.single_token(TokenKind::RBrace),
            Some(c) if is_identifier_start(c) => Token::ident(self.identifier()),
            Some(c) if is_digit(c) => self.number(),
            Some(_) => self.single_token(TokenKind::Illegal),
            None => Token::end_of_input(),
        };

        trace!(target: "scanner", "Scanned {}", token);
        token
    }

    fn single_token(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        Token::new(kind, self.source.lexeme(start, self.position))
    }

    fn conditional_token(
        &mut self,
        character: char,
        matched: TokenKind,
        unmatched: TokenKind,
    ) -> Token {
        let start = self.position;
        let kind = if self.peek() == Some(character) {
            self.advance();
            matched
        } else {
            unmatched
        };
        self.advance();
        Token::new(kind, self.source.lexeme(start, self.position))
    }

    // Assumes the current character is a valid identifier start.
    fn identifier(&mut self) -> String {
        let start = self.position;
        self.advance();
        self.skip_while(is_identifier_body);
        self.source.lexeme(start, self.position)
    }

    fn number(&mut self) -> Token {
        let start = self.position;
        self.skip_while(is_digit);
        match self.character {
            Some(c) if is_identifier_start(c) => {
                self.skip_while(is_identifier_body);
                Token::new(TokenKind::Illegal, self.source.lexeme(start, self.position))
            }
            _ => Token::new(TokenKind::Integer, self.source.lexeme(start, self.position)),
        }
    }

    fn skip_whitespace(&mut self) {
        self.skip_while(is_whitespace);
    }

    fn skip_while(&mut self, predicate: fn(char) -> bool) {
        while let Some(c) = self.character {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.read_position > self.source.length() {
            return;
        }
        self.character = self.source.character(self.read_position);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek(&self) -> Option<char> {
        self.source.character(self.read_position)
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EndOfInput) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_identifier_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

fn is_identifier_body(c: char) -> bool {
    is_identifier_start(c) || is_digit(c)
}
