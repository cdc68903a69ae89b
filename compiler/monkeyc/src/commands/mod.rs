//! Command handlers for the `monkey` CLI.
//!
//! Each submodule implements one command. Shared pieces (`read_file`, the
//! error type and error reporting) live here in the module root.

mod debug;
mod options;
mod run;

pub use debug::{lex_file, parse_file};
pub use options::{parse_options, Options};
pub use run::run_file;

use crate::repl::print_run_error;
use crate::RunError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("{0}")]
    InvalidOption(String),
}

/// Read a source file.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, CliError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Report a command failure on `output`.
///
/// Run failures use the REPL's format: tab-prefixed syntax errors or
/// `ERROR: <message>`.
pub fn report_error(output: &mut impl Write, err: &CliError) -> io::Result<()> {
    match err {
        CliError::Run(err) => print_run_error(output, err),
        other => writeln!(output, "error: {other}"),
    }
}
