use super::*;

#[test]
fn inner_binding_shadows_outer() {
    let mut env = Environment::new();
    env.assign("x", Value::int(1));
    env.push_scope();
    env.assign("x", Value::int(2));
    assert_eq!(env.lookup("x"), Some(&Value::int(2)));
    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(&Value::int(1)));
}

#[test]
fn lookup_falls_through_to_outer_scopes() {
    let mut env = Environment::new();
    env.assign("outer", Value::int(1));
    env.push_scope();
    env.push_scope();
    assert_eq!(env.lookup("outer"), Some(&Value::int(1)));
    assert_eq!(env.lookup("missing"), None);
}

#[test]
fn assign_only_touches_innermost_scope() {
    let mut env = Environment::new();
    env.push_scope();
    env.assign("x", Value::int(5));
    assert_eq!(env.lookup_global("x"), None);
    env.pop_scope();
    assert_eq!(env.lookup("x"), None);
}

#[test]
fn lookup_global_ignores_shadowing() {
    let mut env = Environment::new();
    env.define_global("seq", Value::int(1));
    env.push_scope();
    env.assign("seq", Value::int(2));
    assert_eq!(env.lookup("seq"), Some(&Value::int(2)));
    assert_eq!(env.lookup_global("seq"), Some(&Value::int(1)));
}

#[test]
fn global_scope_is_never_popped() {
    let mut env = Environment::new();
    env.assign("x", Value::int(1));
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup("x"), Some(&Value::int(1)));
}
