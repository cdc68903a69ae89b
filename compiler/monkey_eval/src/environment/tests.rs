#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

fn name(text: &str) -> Name {
    Name::new(text)
}

#[test]
fn test_set_and_get() {
    let env = Environment::new();
    env.set(name("x"), Value::Integer(42));
    assert_eq!(env.get("x"), Some(Value::Integer(42)));
    assert_eq!(env.get("y"), None);
}

#[test]
fn test_lookup_walks_outward() {
    let root = Environment::new();
    root.set(name("x"), Value::Integer(1));
    let child = Environment::enclosed(&root);
    let grandchild = Environment::enclosed(&child);
    assert_eq!(grandchild.get("x"), Some(Value::Integer(1)));
}

#[test]
fn test_set_shadows_in_local_scope() {
    let root = Environment::new();
    root.set(name("x"), Value::Integer(1));
    let child = Environment::enclosed(&root);
    child.set(name("x"), Value::Integer(2));

    assert_eq!(child.get("x"), Some(Value::Integer(2)));
    assert_eq!(root.get("x"), Some(Value::Integer(1)));
}

#[test]
fn test_assign_mutates_nearest_binding() {
    let root = Environment::new();
    root.set(name("x"), Value::Integer(1));
    let child = Environment::enclosed(&root);

    assert_eq!(child.assign("x", Value::Integer(5)), Ok(()));
    assert_eq!(root.get("x"), Some(Value::Integer(5)));

    // The child did not gain a binding of its own.
    root.assign("x", Value::Integer(6)).unwrap();
    assert_eq!(child.get("x"), Some(Value::Integer(6)));
}

#[test]
fn test_assign_undefined() {
    let root = Environment::new();
    let child = Environment::enclosed(&root);
    assert_eq!(
        child.assign("missing", Value::Null),
        Err(AssignError::Undefined)
    );
    assert_eq!(child.get("missing"), None);
}

#[test]
fn test_clones_share_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.set(name("x"), Value::Boolean(true));
    assert_eq!(env.get("x"), Some(Value::Boolean(true)));
    assert!(env.ptr_eq(&alias));
    assert!(!env.ptr_eq(&Environment::new()));
}

#[test]
fn test_debug_lists_local_names() {
    let env = Environment::new();
    env.set(name("b"), Value::Null);
    env.set(name("a"), Value::Null);
    let child = Environment::enclosed(&env);
    assert_eq!(
        format!("{env:?}"),
        r#"Environment { names: ["a", "b"], has_parent: false }"#
    );
    assert_eq!(
        format!("{child:?}"),
        "Environment { names: [], has_parent: true }"
    );
}
