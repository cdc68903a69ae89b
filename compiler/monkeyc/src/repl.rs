//! Interactive read-eval-print loop.
//!
//! Each line is evaluated as a whole program in one shared [`Session`].
//! The value is printed as-is (nothing for a blank line or a trailing
//! `let`), parse errors one per line with a leading tab, and runtime errors
//! as `ERROR: <message>`. Bytes that are not UTF-8 reach the lexer as
//! replacement characters and come back as syntax errors.

use crate::{RunError, Session};
use monkey_parse::ParseError;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// Run a REPL with a default session until `input` is exhausted.
pub fn start(input: impl BufRead, output: impl Write) -> io::Result<()> {
    start_with(Session::new(), input, output)
}

/// Run a REPL over an existing session.
pub fn start_with(
    mut session: Session,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut line = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match session.run(&String::from_utf8_lossy(&line)) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {}
            Err(err) => print_run_error(&mut output, &err)?,
        }
    }
}

/// Write a failed run the way the REPL reports it.
pub fn print_run_error(output: &mut impl Write, err: &RunError) -> io::Result<()> {
    match err {
        RunError::Parse(errors) => print_parse_errors(output, errors),
        RunError::Eval(err) => writeln!(output, "ERROR: {err}"),
    }
}

pub fn print_parse_errors(output: &mut impl Write, errors: &[ParseError]) -> io::Result<()> {
    for err in errors {
        writeln!(output, "\t{}", err.message)?;
    }
    Ok(())
}
