//! Integration tests for the Display and Debug implementations.

use lambars_maybe::maybe::{EmptyError, Maybe};
use rstest::rstest;

// =============================================================================
// Display
// =============================================================================

#[rstest]
fn test_present_display() {
    assert_eq!(format!("{}", Maybe::of(42)), "Present(42)");
    assert_eq!(format!("{}", Maybe::of("hello")), "Present(hello)");
    assert_eq!(format!("{}", Maybe::of('x')), "Present(x)");
}

#[rstest]
fn test_empty_display() {
    assert_eq!(format!("{}", Maybe::<i32>::empty()), "Empty");
    assert_eq!(format!("{}", Maybe::<f64>::empty()), "Empty");
    assert_eq!(format!("{}", Maybe::of(f64::NAN)), "Empty");
}

#[rstest]
fn test_nested_display() {
    let nested = Maybe::of(Maybe::of(1));
    assert_eq!(format!("{nested}"), "Present(Present(1))");

    let inner_empty = Maybe::of(Maybe::<i32>::empty());
    assert_eq!(format!("{inner_empty}"), "Present(Empty)");
}

// =============================================================================
// Debug
// =============================================================================

#[rstest]
fn test_debug_quotes_strings() {
    assert_eq!(format!("{:?}", Maybe::of("a")), "Present(\"a\")");
    assert_eq!(format!("{:?}", Maybe::of('a')), "Present('a')");
    assert_eq!(format!("{:?}", Maybe::<String>::empty()), "Empty");
}

#[rstest]
fn test_debug_alternate() {
    let pretty = format!("{:#?}", Maybe::of(vec![1]));
    assert_eq!(pretty, "Present(\n    [\n        1,\n    ],\n)");
}

// =============================================================================
// EmptyError
// =============================================================================

#[rstest]
fn test_empty_error_display() {
    assert_eq!(EmptyError::of::<bool>().to_string(), "Maybe<bool> is empty");
    assert_eq!(
        EmptyError::of::<Vec<u8>>().to_string(),
        "Maybe<alloc::vec::Vec<u8>> is empty"
    );
}
