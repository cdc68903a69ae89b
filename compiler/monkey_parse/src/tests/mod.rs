//! Parser tests.
//!
//! - `parser`: statements, literals, operators and compound expressions
//! - `errors`: error messages and recovery
//! - `render`: rendering a parsed program re-parses to the same text
//! - `nesting`: very long and very deep inputs
