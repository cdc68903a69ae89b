//! Monkey IR - shared front-end types.
//!
//! This crate contains the data structures every other stage agrees on:
//! - Spans for source locations
//! - Names for identifiers
//! - Tokens produced by the lexer
//! - AST nodes (`Program`, `Stmt`, `Expr`, ...) produced by the parser
//!
//! The AST is an owned tree. Function bodies and parameter lists sit behind
//! `Rc` so that a runtime closure can keep them alive without copying the
//! subtree.

pub mod ast;
mod name;
mod span;
mod token;

pub use ast::{
    BlockStatement, Expr, ExprKind, FunctionLiteral, Identifier, InfixOp, PrefixOp, Program, Stmt,
    StmtKind,
};
pub use name::Name;
pub use span::{clamp_offset, Span};
pub use token::{lookup_ident, Token, TokenKind};
