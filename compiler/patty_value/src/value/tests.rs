use super::*;
use crate::test_helpers::TestExecutor;
use crate::{CircularGenerator, DynamicGenerator};
use pretty_assertions::assert_eq;

fn ints(values: &[i64]) -> Value {
    Value::list(values.iter().copied().map(Value::int).collect())
}

#[test]
fn truthiness_follows_boolean_coercion() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::int(0).is_truthy());
    assert!(Value::int(-3).is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::string("x").is_truthy());
    assert!(!Value::list(vec![]).is_truthy());
    assert!(ints(&[0]).is_truthy());
    assert!(Value::symbol("anything").is_truthy());
    assert!(Value::native("f", |_, _| Ok(Value::Nil)).is_truthy());
}

#[test]
fn static_classification_looks_for_index_symbol() {
    assert!(Value::int(1).is_static());
    assert!(Value::symbol("x").is_static());
    assert!(!Value::symbol("n").is_static());
    assert!(Value::symbol("nn").is_static());

    let nested = Value::list(vec![
        Value::symbol("+"),
        Value::int(1),
        Value::list(vec![Value::symbol("*"), Value::symbol("n"), Value::int(2)]),
    ]);
    assert!(!nested.is_static());
    assert!(Value::list(vec![Value::symbol("+"), Value::int(1)]).is_static());
}

#[test]
fn top_level_strings_render_raw() {
    assert_eq!(Value::string("hello world").to_string(), "hello world");
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::int(-42).to_string(), "-42");
    assert_eq!(Value::symbol("foo").to_string(), "foo");
}

#[test]
fn nested_strings_render_quoted() {
    let list = Value::list(vec![
        Value::int(1),
        Value::string("two"),
        Value::list(vec![Value::string("say \"hi\"")]),
        Value::Nil,
    ]);
    assert_eq!(list.to_string(), r#"(1 "two" ("say \"hi\"") nil)"#);
}

#[test]
fn quoted_rendering_quotes_top_level_strings() {
    assert_eq!(Value::string(r"a\b").quoted().to_string(), r#""a\\b""#);
    assert_eq!(Value::int(7).quoted().to_string(), "7");
}

#[test]
fn natives_and_sequences_render_as_tags() {
    assert_eq!(
        Value::native("zip", |_, _| Ok(Value::Nil)).to_string(),
        "<native-function zip>"
    );
    let circular = Value::Sequence(Sequence::new(CircularGenerator::new(vec![Value::int(1)])));
    assert_eq!(circular.to_string(), "<sequence of 1>");
    let dynamic = Value::Sequence(Sequence::new(DynamicGenerator::new(Value::symbol("n"))));
    assert_eq!(dynamic.to_string(), "<sequence infinite>");
}

#[test]
fn empty_list_renders_as_parens() {
    assert_eq!(Value::list(vec![]).to_string(), "()");
}

#[test]
fn native_equality_is_identity() {
    let f = Value::native("f", |_, _| Ok(Value::Nil));
    let g = Value::native("f", |_, _| Ok(Value::Nil));
    assert_eq!(f.clone(), f);
    assert_ne!(f, g);
}

#[test]
fn take_truncates_strings_and_lists() {
    let mut exec = TestExecutor::new();
    assert_eq!(
        Value::string("patty").take(&mut exec, 3),
        Ok(Value::string("pat"))
    );
    assert_eq!(ints(&[1, 2, 3, 4]).take(&mut exec, 2), Ok(ints(&[1, 2])));
    assert_eq!(ints(&[1, 2]).take(&mut exec, 10), Ok(ints(&[1, 2])));
}

#[test]
fn take_rejects_other_variants() {
    let mut exec = TestExecutor::new();
    let err = Value::int(5).take(&mut exec, 1).unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedOperation(_)));
}

#[test]
fn expect_int_reports_actual_variant() {
    let err = Value::string("x").expect_int("+").unwrap_err();
    assert_eq!(
        err,
        EngineError::TypeMismatch {
            context: "+".to_string(),
            expected: "int",
            got: "string",
        }
    );
    assert_eq!(err.to_string(), "type mismatch in +: expected int, got string");
}

fn nested(depth: usize) -> Value {
    let mut value = Value::list(vec![]);
    for _ in 0..depth {
        value = Value::list(vec![Value::int(1), value]);
    }
    value
}

#[test]
fn deep_lists_clone_compare_render_and_drop() {
    let depth = 300_000;
    let value = nested(depth);
    let copy = value.clone();
    assert!(copy == value);
    assert!(value.is_static());

    let expected = format!("{}(){}", "(1 ".repeat(depth), ")".repeat(depth));
    assert!(value.to_string() == expected);

    drop(copy);
    drop(value);
}

#[test]
fn dropping_keeps_shared_sequences_alive() {
    let mut exec = TestExecutor::new();
    let seq = Sequence::new(CircularGenerator::new(vec![Value::int(7)]));
    let holder = Value::list(vec![Value::list(vec![Value::Sequence(seq.clone())])]);
    drop(holder);
    assert_eq!(seq.take(&mut exec, 2), Ok(vec![Value::int(7), Value::int(7)]));
}

#[test]
fn list_converts_back_to_its_elements() {
    let Value::List(items) = ints(&[1, 2, 3]) else {
        panic!("expected a list");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(items.into_vec(), vec![Value::int(1), Value::int(2), Value::int(3)]);
}
