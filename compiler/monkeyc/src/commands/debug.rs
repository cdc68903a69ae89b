//! Inspection commands: `lex` and `parse`.

use super::{read_file, CliError};
use crate::RunError;
use std::io::Write;

/// Print every token of a file, one per line, ending with `EOF`.
pub fn lex_file(path: &str, output: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    let tokens = monkey_lexer::tokenize(&source);
    for token in &tokens {
        writeln!(output, "{token:?}")?;
    }
    tracing::debug!(count = tokens.len(), "lexed {path}");
    Ok(())
}

/// Print the parsed program re-rendered as source, one statement per line.
///
/// Statements that did parse are still printed when there are syntax
/// errors, and the command then fails with those errors.
pub fn parse_file(path: &str, output: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    let parsed = monkey_parse::parse(&source);
    for stmt in &parsed.program.statements {
        writeln!(output, "{stmt}")?;
    }
    if parsed.has_errors() {
        return Err(RunError::Parse(parsed.errors).into());
    }
    Ok(())
}
