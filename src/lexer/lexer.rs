use tracing::{debug, trace};

use crate::{
    errors::errors::{Diagnostics, Error, ErrorImpl, Reporter},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Single-pass scanner over one source text.
///
/// `start` and `current` are byte offsets into `source` and always sit on
/// `char` boundaries. `scan_tokens` takes the scanner by value, so a scanner
/// runs exactly once.
pub struct Scanner<'a, R: Reporter> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
    reporter: &'a mut R,
}

impl<'a, R: Reporter> Scanner<'a, R> {
    pub fn new(source: &'a str, reporter: &'a mut R) -> Scanner<'a, R> {
        Scanner {
            source,
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        debug!(len = self.source.len(), "scanning source");

        while !self.at_eof() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(MK_TOKEN!(TokenKind::Eof, String::new(), None, self.line));

        debug!(tokens = self.tokens.len(), lines = self.line, "finished scanning");
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.next();

        match c {
            '(' => self.push(TokenKind::LeftParen),
            ')' => self.push(TokenKind::RightParen),
            '{' => self.push(TokenKind::LeftBrace),
            '}' => self.push(TokenKind::RightBrace),
            ',' => self.push(TokenKind::Comma),
            '.' => self.push(TokenKind::Dot),
            '-' => self.push(TokenKind::Minus),
            '+' => self.push(TokenKind::Plus),
            ';' => self.push(TokenKind::Semicolon),
            '*' => self.push(TokenKind::Star),
            '!' => {
                let kind = if self.matches('=') { TokenKind::Ne } else { TokenKind::Bang };
                self.push(kind);
            }
            '=' => {
                let kind = if self.matches('=') { TokenKind::EqEq } else { TokenKind::Eq };
                self.push(kind);
            }
            '<' => {
                let kind = if self.matches('=') { TokenKind::Le } else { TokenKind::Lt };
                self.push(kind);
            }
            '>' => {
                let kind = if self.matches('=') { TokenKind::Ge } else { TokenKind::Gt };
                self.push(kind);
            }
            '/' => {
                if self.matches('/') {
                    // Comment runs to the end of the line; the newline itself is left for the loop.
                    while self.peek() != Some('\n') && !self.at_eof() {
                        self.next();
                    }
                } else {
                    self.push(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if is_digit(c) => self.number(),
            c if is_alpha(c) => self.identifier(),
            c => self.error(ErrorImpl::UnexpectedCharacter { character: c }),
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.next();
        }

        let kind = RESERVED_LOOKUP
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.push(kind);
    }

    fn number(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.next();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            self.next();

            while self.peek().is_some_and(is_digit) {
                self.next();
            }
        }

        let value = self.lexeme().parse::<f64>().unwrap_or(f64::NAN);
        self.push_literal(TokenKind::Number, Literal::Number(value));
    }

    fn string(&mut self) {
        while self.peek() != Some('"') && !self.at_eof() {
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.next();
        }

        if self.at_eof() {
            self.error(ErrorImpl::UnterminatedString);
            return;
        }

        // closing quote
        self.next();

        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.push_literal(TokenKind::String, Literal::String(value));
    }

    fn next(&mut self) -> char {
        let c = self.source[self.current..]
            .chars()
            .next()
            .unwrap_or('\0');
        self.current += c.len_utf8();
        c
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn push(&mut self, kind: TokenKind) {
        self.add_token(kind, None);
    }

    fn push_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.add_token(kind, Some(literal));
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = MK_TOKEN!(kind, self.lexeme().to_string(), literal, self.start_line);
        trace!(%token, line = token.line, "token");
        self.tokens.push(token);
    }

    fn error(&mut self, error: ErrorImpl) {
        debug!(line = self.line, ?error, "lexical error");
        self.reporter.error(Error::new(error, self.line));
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_digit(c) || is_alpha(c)
}

/// Scans `source` with a fresh [`Diagnostics`] sink.
///
/// Returns every reported error instead of the tokens when the source is not
/// lexically valid.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Vec<Error>> {
    let mut diagnostics = Diagnostics::new();
    let tokens = Scanner::new(source, &mut diagnostics).scan_tokens();

    if diagnostics.had_error() {
        return Err(diagnostics.into_errors());
    }

    Ok(tokens)
}
