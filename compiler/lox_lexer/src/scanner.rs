//! Single-pass scanner.
//!
//! One forward cursor plus a lexeme-start marker. Operators use maximal
//! munch with one character of lookahead.
//!
//! # Comments
//!
//! `//` runs to end of line. `/* */` nests: every `/*` inside a block comment
//! opens another level and needs its own `*/`. Newlines inside block comments
//! still advance the line counter. An unclosed block comment runs silently to
//! end of input.

use lox_diagnostic::Reporter;
use lox_ir::{Token, TokenKind, Value};
use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords;

pub struct Scanner<'src, 'r> {
    cursor: Cursor<'src>,
    reporter: &'r mut Reporter,
    tokens: Vec<Token>,
}

impl<'src, 'r> Scanner<'src, 'r> {
    pub fn new(source: &'src str, reporter: &'r mut Reporter) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            reporter,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source. The result always ends with one `Eof` token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.cursor.mark_start();
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.cursor.line()));
        self.tokens
    }

    fn scan_token(&mut self) {
        let Some(c) = self.cursor.advance() else {
            return;
        };

        match c {
            '(' => self.add(TokenKind::LeftParen),
            ')' => self.add(TokenKind::RightParen),
            '{' => self.add(TokenKind::LeftBrace),
            '}' => self.add(TokenKind::RightBrace),
            ',' => self.add(TokenKind::Comma),
            '.' => self.add(TokenKind::Dot),
            '-' => self.add(TokenKind::Minus),
            '+' => self.add(TokenKind::Plus),
            ';' => self.add(TokenKind::Semicolon),
            '*' => self.add(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.cursor.eat('/') {
                    self.cursor.eat_while(|c| c != '\n');
                } else if self.cursor.eat('*') {
                    self.block_comment();
                } else {
                    self.add(TokenKind::Slash);
                }
            }
            '"' => self.string(),
            ' ' | '\r' | '\t' => {}
            '\n' => self.cursor.newline(),
            c if c.is_ascii_digit() => self.number(),
            c if is_ident_start(c) => self.identifier(),
            c => {
                self.reporter
                    .error(self.cursor.line(), format!("Unexpected character: {c}"));
            }
        }
    }

    /// Consume a block comment whose opening `/*` was already consumed.
    fn block_comment(&mut self) {
        let mut depth: u32 = 1;
        while depth > 0 && !self.cursor.is_eof() {
            if self.cursor.eat_pair('/', '*') {
                depth += 1;
            } else if self.cursor.eat_pair('*', '/') {
                depth -= 1;
            } else if self.cursor.advance() == Some('\n') {
                self.cursor.newline();
            }
        }
        trace!(unclosed = depth, "block comment");
    }

    /// String literal without escape processing. May span lines.
    fn string(&mut self) {
        while let Some(c) = self.cursor.current() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.cursor.newline();
            }
            self.cursor.advance();
        }

        if self.cursor.is_eof() {
            self.reporter.error(self.cursor.line(), "Unterminated string.");
            return;
        }

        // Closing quote.
        self.cursor.advance();

        let lexeme = self.cursor.lexeme();
        let text = &lexeme[1..lexeme.len() - 1];
        self.add_literal(TokenKind::String, Value::string(text));
    }

    /// Digit run, optionally followed by `.` and more digits. A trailing `.`
    /// with no digit after it is left for the next token.
    fn number(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let has_fraction = self.cursor.current() == Some('.')
            && self.cursor.peek().is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        match self.cursor.lexeme().parse::<f64>() {
            Ok(value) => self.add_literal(TokenKind::Number, Value::Number(value)),
            Err(err) => {
                self.reporter
                    .error(self.cursor.line(), format!("Invalid number literal: {err}"));
            }
        }
    }

    fn identifier(&mut self) {
        self.cursor.eat_while(is_ident_continue);
        let kind = keywords::lookup(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add(kind);
    }

    fn add_either(&mut self, next: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.cursor.eat(next) { matched } else { single };
        self.add(kind);
    }

    fn add(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.cursor.lexeme(), self.cursor.line());
        trace!(%token, "token");
        self.tokens.push(token);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Value) {
        let token = Token::with_literal(kind, self.cursor.lexeme(), literal, self.cursor.line());
        trace!(%token, "token");
        self.tokens.push(token);
    }
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}
