//! Source rendering for AST nodes.
//!
//! Prefix and infix expressions are always parenthesized, and every
//! non-block statement ends in `;`, so the output re-parses to a tree
//! with the same meaning.

use super::{BlockStatement, Expr, ExprKind, FunctionLiteral, Identifier, Program, Stmt, StmtKind};
use monkey_stack::ensure_sufficient_stack;
use std::fmt;

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {name} = {value};"),
            StmtKind::Return(value) => write!(f, "return {value};"),
            StmtKind::Expression(expr) => write!(f, "{expr};"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for stmt in &self.statements {
            write!(f, "{stmt} ")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_comma_separated(f, self.parameters.iter())?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.render(f))
    }
}

impl Expr {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Ident(name) => f.write_str(name),
            ExprKind::Int(value) => write!(f, "{value}"),
            ExprKind::Bool(value) => write!(f, "{value}"),
            ExprKind::Prefix { op, right } => write!(f, "({}{right})", op.as_symbol()),
            ExprKind::Infix { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            ExprKind::Function(func) => write!(f, "{func}"),
            ExprKind::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                write_comma_separated(f, arguments.iter())?;
                f.write_str(")")
            }
            // The initial statement already carries its `;`.
            ExprKind::For {
                initial,
                condition,
                increment,
                body,
            } => write!(f, "for ({initial} {condition}; {increment}) {body}"),
            ExprKind::Assign { target, value } => write!(f, "{target} = {value}"),
        }
    }
}

fn write_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
