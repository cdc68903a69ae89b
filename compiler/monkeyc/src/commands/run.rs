//! The `run` command.

use super::{read_file, CliError};
use crate::Session;
use monkey_eval::{EvalConfig, Value};
use std::io::Write;

/// Evaluate a file and print the value of its last statement, unless that
/// value is `null`.
pub fn run_file(path: &str, config: EvalConfig, output: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    let mut session = Session::with_config(config);
    let value = session.eval(&source)?;
    if value != Value::Null {
        writeln!(output, "{value}")?;
    }
    Ok(())
}
