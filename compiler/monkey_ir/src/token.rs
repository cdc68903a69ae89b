//! Token types for the Monkey lexer.

use super::Span;
use std::fmt;

/// A token with its literal text and span in the source.
///
/// The literal is kept as text for every kind; integer conversion happens
/// in the parser.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// End-of-input token positioned at `offset`.
    pub fn eof(offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
            span: Span::point(offset),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.literal, self.span)
    }
}

/// Token kinds for Monkey.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Special ===
    Eof,
    Illegal,

    // === Identifiers and literals ===
    Ident,
    Int,

    // === Operators ===
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Slash,    // /
    Asterisk, // *
    Eq,       // ==
    NotEq,    // !=
    Lt,       // <
    Gt,       // >

    // === Delimiters ===
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // === Keywords ===
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
    For,
}

impl TokenKind {
    /// Display name used in parser diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Slash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::For => "FOR",
        }
    }

    /// Check if this token is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::For
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const KEYWORDS: [(&str, TokenKind); 8] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
    ("for", TokenKind::For),
];

/// Classify an identifier lexeme against the keyword table.
///
/// Anything that is not a keyword is an `Ident`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map_or(TokenKind::Ident, |(_, kind)| *kind)
}
