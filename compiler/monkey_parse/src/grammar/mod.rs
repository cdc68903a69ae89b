//! Grammar rules.
//!
//! - `stmt`: `let`, `return`, expression statements and blocks
//! - `expr`: Pratt expression parsing, prefix and infix rules

mod expr;
mod stmt;
