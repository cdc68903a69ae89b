//! Expression parsing.
//!
//! Pratt parsing: each token kind may have a prefix rule (it starts an
//! expression) and an infix rule (it continues one). Binding strength comes
//! from [`Precedence`]; equal precedence associates to the left.

use crate::{ParseError, Parser};
use monkey_ir::{
    Expr, ExprKind, FunctionLiteral, Identifier, InfixOp, Name, PrefixOp, TokenKind,
};
use monkey_stack::ensure_sufficient_stack;

/// Binding power, weakest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `!x` `-x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

fn infix_op(kind: TokenKind) -> Option<InfixOp> {
    match kind {
        TokenKind::Plus => Some(InfixOp::Add),
        TokenKind::Minus => Some(InfixOp::Sub),
        TokenKind::Asterisk => Some(InfixOp::Mul),
        TokenKind::Slash => Some(InfixOp::Div),
        TokenKind::Eq => Some(InfixOp::Eq),
        TokenKind::NotEq => Some(InfixOp::NotEq),
        TokenKind::Lt => Some(InfixOp::Lt),
        TokenKind::Gt => Some(InfixOp::Gt),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than `min`.
    ///
    /// Starts at the current token and leaves the last token of the
    /// expression current.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| -> Result<Expr, ParseError> {
            let mut left = self.parse_prefix()?;
            while !self.peek_is(TokenKind::Semicolon) && min < Precedence::of(self.peek.kind) {
                self.next_token();
                left = self.parse_infix(left)?;
            }
            Ok(left)
        })
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let span = self.cur.span;
        match self.cur.kind {
            TokenKind::Ident => Ok(Expr::new(
                ExprKind::Ident(Name::new(&self.cur.literal)),
                span,
            )),
            TokenKind::Int => {
                let value = self
                    .cur
                    .literal
                    .parse::<i64>()
                    .map_err(|_| ParseError::invalid_integer(&self.cur))?;
                Ok(Expr::new(ExprKind::Int(value), span))
            }
            TokenKind::True => Ok(Expr::new(ExprKind::Bool(true), span)),
            TokenKind::False => Ok(Expr::new(ExprKind::Bool(false), span)),
            TokenKind::Bang => self.parse_prefix_op(PrefixOp::Not),
            TokenKind::Minus => self.parse_prefix_op(PrefixOp::Neg),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::For => self.parse_for(),
            _ => Err(ParseError::no_prefix_rule(&self.cur)),
        }
    }

    fn parse_infix(&mut self, left: Expr) -> Result<Expr, ParseError> {
        if self.cur_is(TokenKind::LParen) {
            return self.parse_call(left);
        }
        let Some(op) = infix_op(self.cur.kind) else {
            // Only reachable for kinds with a non-Lowest precedence.
            return Err(ParseError::no_prefix_rule(&self.cur));
        };

        let precedence = Precedence::of(self.cur.kind);
        self.next_token();
        let right = self.parse_expression(precedence)?;
        let span = left.span.merge(right.span);
        Ok(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    fn parse_prefix_op(&mut self, op: PrefixOp) -> Result<Expr, ParseError> {
        let start = self.cur.span;
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        let span = start.merge(right.span);
        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                right: Box::new(right),
            },
            span,
        ))
    }

    /// `( expr )`: the inner expression, widened to cover the parentheses.
    fn parse_grouped(&mut self) -> Result<Expr, ParseError> {
        let start = self.cur.span;
        self.next_token();
        let mut expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        expr.span = start.merge(self.cur.span);
        Ok(expr)
    }

    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.cur.span;
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            start.merge(self.cur.span),
        ))
    }

    fn parse_function_literal(&mut self) -> Result<Expr, ParseError> {
        let start = self.cur.span;
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;
        Ok(Expr::new(
            ExprKind::Function(FunctionLiteral::new(parameters, body)),
            start.merge(self.cur.span),
        ))
    }

    /// Comma-separated identifiers. Starts at `(`, ends at `)`.
    fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        loop {
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(Name::new(&self.cur.literal), self.cur.span));
            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }
        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    fn parse_call(&mut self, function: Expr) -> Result<Expr, ParseError> {
        let arguments = self.parse_call_arguments()?;
        let span = function.span.merge(self.cur.span);
        Ok(Expr::new(
            ExprKind::Call {
                function: Box::new(function),
                arguments,
            },
            span,
        ))
    }

    /// Comma-separated expressions. Starts at `(`, ends at `)`.
    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(TokenKind::RParen)?;
        Ok(arguments)
    }

    /// `for (<init>; <cond>; <incr>) { ... }`
    fn parse_for(&mut self) -> Result<Expr, ParseError> {
        let start = self.cur.span;
        self.expect_peek(TokenKind::LParen)?;

        self.next_token();
        let initial = self.parse_for_initial()?;
        self.expect_peek(TokenKind::Semicolon)?;

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        self.next_token();
        let increment = self.parse_assign_or_expression()?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expr::new(
            ExprKind::For {
                initial: Box::new(initial),
                condition: Box::new(condition),
                increment: Box::new(increment),
                body,
            },
            start.merge(self.cur.span),
        ))
    }
}
