use super::*;

#[test]
fn shallow_recursion_returns_value() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(100), 5050);
}

#[test]
fn deep_recursion_does_not_overflow() {
    // Nested evaluation of a 200k-deep list would overflow an 8MB stack.
    fn nest(depth: u64) -> u64 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    assert_eq!(nest(200_000), 200_000);
}

#[test]
fn result_passes_through() {
    let result: Result<i64, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}
