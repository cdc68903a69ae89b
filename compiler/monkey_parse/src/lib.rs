//! Pratt parser for Monkey.
//!
//! The parser pulls tokens from the lexer on demand and keeps a window of
//! two: the current token and one token of lookahead. Errors are collected
//! in source order; after each one the parser resynchronizes at the next
//! statement boundary and keeps going.

mod error;
mod grammar;
mod recovery;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use monkey_ir::{Program, Token, TokenKind};
use monkey_lexer::Lexer;
use recovery::Boundary;

/// Result of parsing a source text.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Check if there are parse errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

/// Parser state.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    cur: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            cur,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse the whole input as a program.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(stmt) => {
                    statements.push(stmt);
                    self.next_token();
                }
                Err(err) => {
                    self.record(err);
                    self.synchronize(Boundary::Program);
                }
            }
        }

        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    // ===== Token access =====

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    #[inline]
    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if the lookahead is `kind`, otherwise report what was found.
    fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(kind, &self.peek))
        }
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    fn record(&mut self, err: ParseError) {
        tracing::debug!(span = %err.span, message = %err.message, "parse error");
        self.errors.push(err);
    }
}

/// Parse a source text into a program plus any syntax errors.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(source).parse_program()
}
