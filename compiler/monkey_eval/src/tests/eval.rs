use super::eval_source;
use crate::Value;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn assert_evals(cases: &[(&str, Value)]) {
    for (source, expected) in cases {
        assert_eq!(&eval_source(source), &Ok(expected.clone()), "source: {source}");
    }
}

fn int(n: i64) -> Value {
    Value::Integer(n)
}

#[test]
fn test_integer_expressions() {
    assert_evals(&[
        ("5", int(5)),
        ("10", int(10)),
        ("-5", int(-5)),
        ("-10", int(-10)),
        ("5 + 5 + 5 + 5 - 10", int(10)),
        ("2 * 2 * 2 * 2 * 2", int(32)),
        ("-50 + 100 + -50", int(0)),
        ("5 * 2 + 10", int(20)),
        ("5 + 2 * 10", int(25)),
        ("20 + 2 * -10", int(0)),
        ("50 / 2 * 2 + 10", int(60)),
        ("2 * (5 + 10)", int(30)),
        ("3 * 3 * 3 + 10", int(37)),
        ("3 * (3 * 3) + 10", int(37)),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", int(50)),
    ]);
}

#[test]
fn test_precedence_and_grouping() {
    assert_evals(&[("5 + 5 * 2", int(15)), ("(5 + 5) * 2", int(20))]);
}

#[test]
fn test_boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == false", true),
        ("5 == true", false),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_source(source), Ok(Value::Boolean(expected)), "source: {source}");
    }
}

#[test]
fn test_bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_source(source), Ok(Value::Boolean(expected)), "source: {source}");
    }
}

#[test]
fn test_if_else_expressions() {
    assert_evals(&[
        ("if (true) { 10 }", int(10)),
        ("if (false) { 10 }", Value::Null),
        ("if (1) { 10 }", int(10)),
        ("if (1 < 2) { 10 }", int(10)),
        ("if (1 > 2) { 10 }", Value::Null),
        ("if (1 > 2) { 10 } else { 20 }", int(20)),
        ("if (1 < 2) { 10 } else { 20 }", int(10)),
        ("if (if (false) { 1 }) { 10 } else { 20 }", int(20)),
    ]);
}

#[test]
fn test_return_statements() {
    assert_evals(&[
        ("return 10;", int(10)),
        ("return 10; 9;", int(10)),
        ("return 2 * 5; 9;", int(10)),
        ("9; return 2 * 5; 9;", int(10)),
        (
            "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
            int(10),
        ),
    ]);
}

#[test]
fn test_let_statements() {
    assert_evals(&[
        ("let a = 5; a;", int(5)),
        ("let a = 5 * 5; a;", int(25)),
        ("let a = 5; let b = a; b;", int(5)),
        ("let a = 5; let b = a; let c = a + b + 5; c;", int(15)),
        ("let a = 1;", Value::Null),
    ]);
}

#[test]
fn test_assignment() {
    assert_evals(&[
        ("let x = 5; x = 6; x;", int(6)),
        ("let x = 5; x = x * 2", int(10)),
        ("let x = 1; let f = fn() { x = x + 10 }; f(); x", int(11)),
    ]);
}

#[test]
fn test_empty_program_and_block() {
    assert_evals(&[
        ("", Value::Null),
        ("if (true) { }", Value::Null),
        ("fn() { }()", Value::Null),
    ]);
}

#[test]
fn test_for_loop() {
    assert_evals(&[
        ("for (let i = 0; i < 3; i = i + 1) { i }", int(2)),
        ("for (let i = 0; i < 3; i = i + 1) { i }; i", int(3)),
        ("for (let i = 0; i < 0; i = i + 1) { i }", Value::Null),
        (
            "let sum = 0; for (let i = 1; i < 5; i = i + 1) { sum = sum + i }; sum",
            int(10),
        ),
        (
            "let i = 10; for (i = 0; i < 2; i = i + 1) { i * 100 }",
            int(100),
        ),
    ]);
}

#[test]
fn test_return_inside_loop_unwinds_out() {
    assert_evals(&[
        (
            "let f = fn() { for (let i = 0; i < 10; i = i + 1) { if (i == 3) { return i * 7; } } }; f()",
            int(21),
        ),
        ("for (let i = 0; i < 10; i = i + 1) { return 4; }; 99", int(4)),
    ]);
}

#[test]
fn test_blocks_share_enclosing_scope() {
    assert_evals(&[
        ("if (true) { let x = 4; }; x", int(4)),
        ("let x = 1; if (true) { let x = 2; }; x", int(2)),
    ]);
}

proptest! {
    #[test]
    fn integer_literals_evaluate_to_themselves(n in 0i64..=i64::MAX) {
        prop_assert_eq!(eval_source(&n.to_string()), Ok(Value::Integer(n)));
    }

    #[test]
    fn addition_matches_host_arithmetic(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let source = format!("let a = {a}; let b = {b}; a + b * 2 - (a / 3)");
        let expected = a + b * 2 - (a / 3);
        prop_assert_eq!(eval_source(&source), Ok(Value::Integer(expected)));
    }
}
