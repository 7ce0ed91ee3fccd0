//! Tokens produced by the scanner.

use std::fmt;

use crate::Value;

/// Lexical category of a token.
///
/// Fieldless so the discriminant can index a bitset (see
/// [`TokenKind::discriminant_index`]). Literal payloads live on [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Index of this kind, stable for the lifetime of the build.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Whether tokens of this kind carry a literal value.
    #[inline]
    pub const fn has_literal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::String)
    }

    /// Upper snake case name, as used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// # Invariant
/// `literal` is `Some` exactly when `kind` is [`TokenKind::Number`] or
/// [`TokenKind::String`]. The constructors uphold this.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token (empty for `Eof`).
    pub lexeme: String,
    pub literal: Option<Value>,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    /// Create a token without a literal payload.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        debug_assert!(!kind.has_literal(), "{kind} tokens require a literal");
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Create a `Number` or `String` token carrying its evaluated literal.
    pub fn with_literal(kind: TokenKind, lexeme: impl Into<String>, literal: Value, line: u32) -> Self {
        debug_assert!(kind.has_literal(), "{kind} tokens carry no literal");
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }

    /// The end-of-input marker.
    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, " {literal}"),
            None => f.write_str(" null"),
        }
    }
}
