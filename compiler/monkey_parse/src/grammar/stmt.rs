//! Statement parsing.

use super::expr::Precedence;
use crate::recovery::Boundary;
use crate::{ParseError, Parser};
use monkey_ir::{BlockStatement, Expr, ExprKind, Identifier, Name, Stmt, StmtKind, TokenKind};

impl Parser<'_> {
    /// Parse one statement starting at the current token.
    ///
    /// On success the current token is the last token of the statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        tracing::trace!(token = %self.cur.kind, span = %self.cur.span, "statement");
        let start = self.cur.span;
        let kind = match self.cur.kind {
            TokenKind::Let => {
                let (name, value) = self.parse_let_binding()?;
                StmtKind::Let { name, value }
            }
            TokenKind::Return => {
                self.next_token();
                StmtKind::Return(self.parse_expression(Precedence::Lowest)?)
            }
            _ => StmtKind::Expression(self.parse_assign_or_expression()?),
        };
        self.skip_optional_semicolon();
        Ok(Stmt::new(kind, start.merge(self.cur.span)))
    }

    /// `let <ident> = <expr>`, without the trailing `;`.
    pub(crate) fn parse_let_binding(&mut self) -> Result<(Identifier, Expr), ParseError> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(Name::new(&self.cur.literal), self.cur.span);
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        Ok((name, value))
    }

    /// An `<ident> = <expr>` assignment if the tokens say so, otherwise a
    /// plain expression.
    pub(crate) fn parse_assign_or_expression(&mut self) -> Result<Expr, ParseError> {
        if !(self.cur_is(TokenKind::Ident) && self.peek_is(TokenKind::Assign)) {
            return self.parse_expression(Precedence::Lowest);
        }

        let target = Identifier::new(Name::new(&self.cur.literal), self.cur.span);
        self.next_token();
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        let span = target.span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Assign {
                target,
                value: Box::new(value),
            },
            span,
        ))
    }

    /// Parse `{ ... }` starting at the `{`. Ends with the `}` as current token.
    ///
    /// Errors inside the block are recorded here so the rest of the block
    /// is still parsed.
    pub(crate) fn parse_block_statement(&mut self) -> Result<BlockStatement, ParseError> {
        let start = self.cur.span;
        self.next_token();

        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::RBrace) {
            if self.cur_is(TokenKind::Eof) {
                return Err(ParseError::unexpected_token(TokenKind::RBrace, &self.cur));
            }
            match self.parse_statement() {
                Ok(stmt) => {
                    statements.push(stmt);
                    self.next_token();
                }
                Err(err) => {
                    self.record(err);
                    self.synchronize(Boundary::Block);
                }
            }
        }

        Ok(BlockStatement::new(statements, start.merge(self.cur.span)))
    }

    /// The first clause of a `for` header: a `let` binding, an assignment
    /// or an expression. The `;` after it is left to the caller.
    pub(crate) fn parse_for_initial(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cur.span;
        let kind = if self.cur_is(TokenKind::Let) {
            let (name, value) = self.parse_let_binding()?;
            StmtKind::Let { name, value }
        } else {
            StmtKind::Expression(self.parse_assign_or_expression()?)
        };
        Ok(Stmt::new(kind, start.merge(self.cur.span)))
    }
}
