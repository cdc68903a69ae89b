//! CLI commands run against files in `tests/fixtures`.

#![allow(clippy::unwrap_used)]

use monkey_eval::EvalConfig;
use monkeyc::commands::{lex_file, parse_file, report_error, run_file, CliError};
use monkeyc::RunError;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn run(name: &str, config: EvalConfig) -> (Result<(), CliError>, String) {
    let mut out = Vec::new();
    let result = run_file(&fixture(name), config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_run_prints_result() {
    let (result, out) = run("fib.monkey", EvalConfig::default());
    assert!(result.is_ok(), "{result:?}");
    // fib(0) + ... + fib(9)
    assert_eq!(out, "88\n");
}

#[test]
fn test_run_reports_syntax_errors() {
    let (result, out) = run("broken.monkey", EvalConfig::default());
    assert_eq!(out, "");
    let err = result.unwrap_err();
    let mut report = Vec::new();
    report_error(&mut report, &err).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert!(
        report.starts_with("\texpected next token to be =, got INT instead\n"),
        "{report:?}"
    );
    assert!(matches!(err, CliError::Run(RunError::Parse(errors)) if errors.len() >= 2));
}

#[test]
fn test_run_with_strict_arity() {
    let (result, out) = run("arity.monkey", EvalConfig::default());
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(out, "1\n");

    let (result, _) = run("arity.monkey", EvalConfig::default().strict_arity(true));
    let mut report = Vec::new();
    report_error(&mut report, &result.unwrap_err()).unwrap();
    assert_eq!(
        String::from_utf8(report).unwrap(),
        "ERROR: wrong number of arguments: want=2, got=1\n"
    );
}

#[test]
fn test_missing_file() {
    let (result, _) = run("does-not-exist.monkey", EvalConfig::default());
    let err = result.unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read '"));
}

#[test]
fn test_lex_file() {
    let mut out = Vec::new();
    lex_file(&fixture("small.monkey"), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let kinds: Vec<&str> = out
        .lines()
        .map(|line| line.split(' ').next().unwrap())
        .collect();
    assert_eq!(
        kinds,
        ["LET", "IDENT", "=", "INT", ";", "IDENT", "+", "INT", "EOF"]
    );
    assert!(out.starts_with("LET \"let\" @ 0..3\n"), "{out:?}");
}

#[test]
fn test_parse_file() {
    let mut out = Vec::new();
    parse_file(&fixture("small.monkey"), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "let x = 5;\n(x + 10);\n");

    let mut out = Vec::new();
    let result = parse_file(&fixture("broken.monkey"), &mut out);
    assert!(matches!(result, Err(CliError::Run(RunError::Parse(_)))));
}
