//! Evaluator options from the environment and the command line.

use super::CliError;
use monkey_eval::EvalConfig;

/// Parsed command line: evaluator settings plus the remaining arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub config: EvalConfig,
    pub positional: Vec<String>,
}

/// Build [`Options`] from `args` (without the program name).
///
/// `MONKEY_MAX_DEPTH` and `MONKEY_STRICT_ARITY` are read through `var`
/// first; `--max-depth=N` and `--strict-arity` override them. A depth of
/// `none` removes the limit.
pub fn parse_options(
    args: &[String],
    var: impl Fn(&str) -> Option<String>,
) -> Result<Options, CliError> {
    let mut config = EvalConfig::default();

    if let Some(depth) = var("MONKEY_MAX_DEPTH") {
        config = config.max_call_depth(parse_depth(&depth)?);
    }
    if let Some(strict) = var("MONKEY_STRICT_ARITY") {
        config = config.strict_arity(parse_flag("MONKEY_STRICT_ARITY", &strict)?);
    }

    let mut positional = Vec::new();
    for arg in args {
        if arg == "--strict-arity" {
            config = config.strict_arity(true);
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            config = config.max_call_depth(parse_depth(depth)?);
        } else if arg.starts_with("--") && !matches!(arg.as_str(), "--help" | "--version") {
            return Err(CliError::InvalidOption(format!("unknown option '{arg}'")));
        } else {
            positional.push(arg.clone());
        }
    }

    Ok(Options { config, positional })
}

fn parse_depth(text: &str) -> Result<Option<usize>, CliError> {
    if text.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match text.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(Some(depth)),
        _ => Err(CliError::InvalidOption(format!(
            "invalid call depth '{text}': expected a positive integer or 'none'"
        ))),
    }
}

fn parse_flag(name: &str, text: &str) -> Result<bool, CliError> {
    match text {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(CliError::InvalidOption(format!(
            "invalid value '{text}' for {name}: expected 1 or 0"
        ))),
    }
}
