//! Monkey abstract syntax tree.
//!
//! A boxed tree: every node owns its children and carries the span it was
//! parsed from. Function literals keep their parameters and body behind
//! `Rc` so a closure value can share them without cloning the subtree.
//!
//! # Module Structure
//!
//! - `operators`: prefix and infix operators
//! - `render`: `Display` impls producing re-parseable source text
//! - `drop`: non-recursive `Drop` for `Expr`

mod drop;
mod operators;
mod render;


use crate::{Name, Span};
use std::rc::Rc;

pub use operators::{InfixOp, PrefixOp};

/// A named reference in source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: Name,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<Name>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Take the node's kind. `Expr` implements `Drop`, so fields cannot be
    /// moved out of it directly.
    pub fn into_kind(mut self) -> ExprKind {
        self.take_kind()
    }

    fn take_kind(&mut self) -> ExprKind {
        std::mem::replace(&mut self.kind, ExprKind::Bool(false))
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Variable reference: `x`
    Ident(Name),

    /// Integer literal: `42`
    Int(i64),

    /// Boolean literal: `true`, `false`
    Bool(bool),

    /// Prefix operation: `!x`, `-x`
    Prefix { op: PrefixOp, right: Box<Expr> },

    /// Infix operation: `left op right`
    Infix {
        op: InfixOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional: `if (cond) { ... } else { ... }`
    If {
        condition: Box<Expr>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },

    /// Function literal: `fn(x, y) { ... }`
    Function(FunctionLiteral),

    /// Call: `callee(args)`
    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },

    /// Loop: `for (init; cond; incr) { ... }`
    For {
        initial: Box<Stmt>,
        condition: Box<Expr>,
        increment: Box<Expr>,
        body: BlockStatement,
    },

    /// Rebinding an existing name: `x = value`
    Assign { target: Identifier, value: Box<Expr> },
}

/// Function literal parameters and body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionLiteral {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
}

impl FunctionLiteral {
    pub fn new(parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        FunctionLiteral {
            parameters: parameters.into(),
            body: Rc::new(body),
        }
    }
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `let name = value;`
    Let { name: Identifier, value: Expr },

    /// `return value;`
    Return(Expr),

    /// A bare expression, optionally terminated by `;`
    Expression(Expr),
}

/// Braced statement sequence. Does not introduce a new scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BlockStatement {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl BlockStatement {
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        BlockStatement { statements, span }
    }
}

/// A parsed source file or REPL line.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
