//! Parse error type.
//!
//! Errors are collected by the parser rather than aborting it, so a single
//! pass can report several problems.

use monkey_ir::{Span, Token, TokenKind};
use std::fmt;

/// A syntax error with the location it was detected at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable message.
    pub message: String,
    /// Location of the offending token.
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    /// The lookahead token was not the one the grammar requires.
    #[cold]
    pub fn unexpected_token(expected: TokenKind, found: &Token) -> Self {
        Self::new(
            format!("expected next token to be {expected}, got {} instead", found.kind),
            found.span,
        )
    }

    /// No expression can start with this token.
    #[cold]
    pub fn no_prefix_rule(found: &Token) -> Self {
        Self::new(
            format!("no prefix parse function for {} found", found.kind),
            found.span,
        )
    }

    /// Digit run that does not fit in an `i64`.
    #[cold]
    pub fn invalid_integer(found: &Token) -> Self {
        Self::new(
            format!("could not parse {:?} as integer", found.literal),
            found.span,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}
