//! Iterative teardown for expression trees.
//!
//! Drop glue frees one nesting level per host stack frame, so a long
//! `1 + 1 + ...` chain would overflow the stack on drop alone, even after
//! the parser and evaluator handled it. Children are moved onto a worklist
//! instead and freed one at a time.

use super::{BlockStatement, Expr, ExprKind, Stmt, StmtKind};
use std::rc::Rc;

impl Drop for Expr {
    fn drop(&mut self) {
        if self.kind.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        push_children(self.take_kind(), &mut pending);
        while let Some(mut expr) = pending.pop() {
            // `expr` is left holding a leaf, so its own drop returns at once.
            push_children(expr.take_kind(), &mut pending);
        }
    }
}

impl ExprKind {
    fn is_leaf(&self) -> bool {
        matches!(self, ExprKind::Ident(_) | ExprKind::Int(_) | ExprKind::Bool(_))
    }
}

fn push_children(kind: ExprKind, pending: &mut Vec<Expr>) {
    match kind {
        ExprKind::Ident(_) | ExprKind::Int(_) | ExprKind::Bool(_) => {}
        ExprKind::Prefix { right, .. } => pending.push(*right),
        ExprKind::Infix { left, right, .. } => {
            pending.push(*left);
            pending.push(*right);
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            pending.push(*condition);
            push_block(consequence, pending);
            if let Some(alternative) = alternative {
                push_block(alternative, pending);
            }
        }
        // A body still shared with a closure is freed by whoever drops last.
        ExprKind::Function(func) => {
            if let Ok(body) = Rc::try_unwrap(func.body) {
                push_block(body, pending);
            }
        }
        ExprKind::Call {
            function,
            arguments,
        } => {
            pending.push(*function);
            pending.extend(arguments);
        }
        ExprKind::For {
            initial,
            condition,
            increment,
            body,
        } => {
            push_statement(*initial, pending);
            pending.push(*condition);
            pending.push(*increment);
            push_block(body, pending);
        }
        ExprKind::Assign { value, .. } => pending.push(*value),
    }
}

fn push_block(block: BlockStatement, pending: &mut Vec<Expr>) {
    for stmt in block.statements {
        push_statement(stmt, pending);
    }
}

fn push_statement(stmt: Stmt, pending: &mut Vec<Expr>) {
    match stmt.kind {
        StmtKind::Let { value, .. } => pending.push(value),
        StmtKind::Return(expr) | StmtKind::Expression(expr) => pending.push(expr),
    }
}
