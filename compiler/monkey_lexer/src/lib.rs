//! Lexer for Monkey using logos.
//!
//! The lexer is total: characters outside the language become `Illegal`
//! tokens and the stream ends with `Eof`, repeated for as long as the
//! caller keeps asking.

use logos::Logos;
use monkey_ir::{clamp_offset, lookup_ident, Span, Token, TokenKind};

/// Raw token from logos, before keyword classification.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    // === Two-character operators ===
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,

    // === Single-character operators ===
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("/")]
    Slash,
    #[token("*")]
    Asterisk,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Keywords are split out by `lookup_ident`
    #[regex(r"[A-Za-z_]+")]
    Word,

    #[regex(r"[0-9]+")]
    Int,
}

impl RawToken {
    fn kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::Eq => TokenKind::Eq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Asterisk => TokenKind::Asterisk,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Word => lookup_ident(slice),
            RawToken::Int => TokenKind::Int,
        }
    }
}

/// Streaming lexer over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    end: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            end: clamp_offset(source.len()),
        }
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted this returns `Eof` on every call.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::eof(self.end);
        };

        let span = Span::from_range(self.inner.span());
        let slice = self.inner.slice();
        let kind = match result {
            Ok(raw) => raw.kind(slice),
            Err(()) => TokenKind::Illegal,
        };
        Token::new(kind, slice, span)
    }
}

/// Lex the whole source, up to and including the first `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
