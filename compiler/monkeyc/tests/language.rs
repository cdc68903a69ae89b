//! End-to-end behaviour of the language through `Session`.

#![allow(clippy::unwrap_used)]

use monkey_eval::{EvalConfig, EvalErrorKind, Value};
use monkeyc::{RunError, Session};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval(source: &str) -> Value {
    match Session::new().eval(source) {
        Ok(value) => value,
        Err(err) => panic!("{source:?} failed: {err:?}"),
    }
}

fn runtime_error(source: &str) -> String {
    match Session::new().eval(source) {
        Err(RunError::Eval(err)) => err.message,
        other => panic!("expected a runtime error for {source:?}, got {other:?}"),
    }
}

/// Evaluate and describe the outcome as text, so function values from two
/// separate runs can be compared.
fn outcome(source: &str) -> String {
    match Session::new().eval(source) {
        Ok(value) => value.to_string(),
        Err(RunError::Eval(err)) => format!("ERROR: {err}"),
        Err(RunError::Parse(errors)) => panic!("parse errors for {source:?}: {errors:?}"),
    }
}

#[test]
fn test_precedence_and_grouping() {
    assert_eq!(eval("5 + 5 * 2"), Value::Integer(15));
    assert_eq!(eval("(5 + 5) * 2"), Value::Integer(20));
}

#[test]
fn test_bang_truthiness() {
    assert_eq!(eval("!true"), Value::Boolean(false));
    assert_eq!(eval("!5"), Value::Boolean(false));
    assert_eq!(eval("!!5"), Value::Boolean(true));
}

#[test]
fn test_conditionals() {
    assert_eq!(eval("if (1 < 2) { 10 } else { 20 }"), Value::Integer(10));
    assert_eq!(eval("if (false) { 10 }"), Value::Null);
}

#[test]
fn test_closure_captures_environment() {
    let source = "let newAdder = fn(x) { fn(y) { x + y } }; \
                  let addTwo = newAdder(2); \
                  addTwo(3);";
    assert_eq!(eval(source), Value::Integer(5));
}

#[test]
fn test_assignment_requires_binding() {
    assert!(runtime_error("x = 5;").contains("identifier not found"));
    assert_eq!(eval("let x = 5; x = 6; x;"), Value::Integer(6));
}

#[test]
fn test_operator_errors() {
    assert_eq!(runtime_error("5 + true"), "type mismatch: INTEGER + BOOLEAN");
    assert_eq!(runtime_error("-true"), "unknown operator: -BOOLEAN");
}

#[test]
fn test_for_loop_leaks_its_binding() {
    let mut session = Session::new();
    assert_eq!(
        session.eval("for (let i = 0; i < 3; i = i + 1) { i }").unwrap(),
        Value::Integer(2)
    );
    assert_eq!(session.eval("i").unwrap(), Value::Integer(3));
}

#[test]
fn test_malformed_input_reports_errors() {
    for source in ["let = 5;", "let x 5;", "if (", "fn(1) { }", "5 +", ")", "@"] {
        match Session::new().eval(source) {
            Err(RunError::Parse(errors)) => {
                assert!(!errors.is_empty(), "{source:?}");
                assert!(errors.iter().all(|e| !e.message.is_empty()), "{source:?}");
            }
            other => panic!("expected parse errors for {source:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_very_long_inputs_do_not_crash() {
    let sum = vec!["1"; 200_000].join(" + ");
    assert!(matches!(
        Session::new().eval(&format!("{sum} +")),
        Err(RunError::Parse(_))
    ));
    assert_eq!(eval(&sum), Value::Integer(200_000));
    assert_eq!(eval(&format!("{}true", "!".repeat(200_000))), Value::Boolean(true));
}

#[test]
fn test_parse_errors_prevent_evaluation() {
    let mut session = Session::new();
    assert!(matches!(
        session.eval("let x = 1; let = 2;"),
        Err(RunError::Parse(_))
    ));
    assert_eq!(session.env().get("x"), None);
}

#[test]
fn test_session_state_persists() {
    let mut session = Session::new();
    session.eval("let counter = 0;").unwrap();
    session
        .eval("let bump = fn() { counter = counter + 1 };")
        .unwrap();
    session.eval("bump(); bump();").unwrap();
    assert_eq!(session.eval("counter").unwrap(), Value::Integer(2));
}

#[test]
fn test_bindings_survive_a_later_error() {
    let mut session = Session::new();
    assert!(session.eval("let a = 1; a + true").is_err());
    assert_eq!(session.eval("a").unwrap(), Value::Integer(1));
}

#[test]
fn test_strict_arity() {
    let source = "let f = fn(a, b) { a }; f(1)";

    assert_eq!(eval(source), Value::Integer(1));

    let mut strict = Session::with_config(EvalConfig::default().strict_arity(true));
    match strict.eval(source) {
        Err(RunError::Eval(err)) => {
            assert_eq!(err.kind, EvalErrorKind::WrongArgCount { expected: 2, got: 1 });
        }
        other => panic!("expected an arity error, got {other:?}"),
    }
}

#[test]
fn test_call_depth_limit() {
    let mut session = Session::with_config(EvalConfig::default().max_call_depth(Some(50)));
    let result = session.eval("let loop = fn(n) { loop(n + 1) }; loop(0)");
    match result {
        Err(RunError::Eval(err)) => {
            assert_eq!(err.kind, EvalErrorKind::CallDepthExceeded { limit: 50 });
        }
        other => panic!("expected a depth error, got {other:?}"),
    }
    // The session is still usable afterwards.
    assert_eq!(session.eval("loop").map(|v| v.type_name()).unwrap(), "FUNCTION");
}

#[test]
fn test_render_round_trip_preserves_value() {
    for source in [
        "5 + 5 * 2",
        "let f = fn(x) { if (x > 1) { return x * f(x - 1) } else { 1 } }; f(10)",
        "let s = 0; for (let i = 0; i < 5; i = i + 1) { s = s + i }; s",
        "let add = fn(a) { fn(b) { a + b } }; add(3)(4)",
        "-(-5) * !true",
        "1 / 0",
        "fn(x) { x }",
    ] {
        let rendered = monkey_parse::parse(source).program.to_string();
        assert_eq!(outcome(source), outcome(&rendered), "rendered: {rendered}");
    }
}

fn program_source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0i64..100).prop_map(|n| n.to_string()),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("a".to_string()),
    ];
    let expr = leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "<", ">", "==", "!="]), inner.clone())
                .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
            (prop::sample::select(vec!["!", "-"]), inner.clone())
                .prop_map(|(op, e)| format!("{op}{e}")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, t, e)| format!("if ({c}) {{ {t} }} else {{ {e} }}")),
            (inner.clone(), inner).prop_map(|(body, arg)| format!("fn(a) {{ {body} }}({arg})")),
        ]
    });
    expr.prop_map(|e| format!("let a = 7; {e}"))
}

proptest! {
    #[test]
    fn rendered_program_evaluates_the_same(source in program_source()) {
        let parsed = monkey_parse::parse(&source);
        prop_assert!(!parsed.has_errors(), "{:?}", parsed.error_messages());
        let rendered = parsed.program.to_string();
        prop_assert_eq!(outcome(&source), outcome(&rendered));
    }

    #[test]
    fn arbitrary_input_never_panics(source in "\\PC{0,64}") {
        let _ = Session::new().eval(&source);
    }
}
