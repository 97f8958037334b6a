//! Property-based tests for the combinator laws.
//!
//! - **Apply on present**: `apply(f)(of(a), of(b)) == of(f(a, b))`
//! - **Apply on empty**: any empty argument yields Empty and `f` never runs
//! - **Match dispatch**: exactly one of the two functions runs, once
//! - **Order independence**: `match_with(s, fb) == match_with(fb, s)`
//! - **Scan**: `all_present` is the conjunction of the wrapped positions

use lambars_maybe::combinator::{all_present, apply, attempt, match_with};
use lambars_maybe::maybe::Maybe;
use proptest::prelude::*;
use std::cell::Cell;

fn combine(left: i32, right: i32) -> i64 {
    i64::from(left) * 31 + i64::from(right)
}

proptest! {
    #[test]
    fn prop_apply_on_present(left in any::<i32>(), right in any::<i32>()) {
        prop_assert_eq!(
            apply(combine).to((Maybe::of(left), Maybe::of(right))),
            Maybe::of(combine(left, right))
        );
    }

    #[test]
    fn prop_apply_mixed_plain_and_wrapped(left in any::<i32>(), right in any::<i32>()) {
        prop_assert_eq!(
            apply(combine).to((left, Maybe::of(right))),
            Maybe::of(combine(left, right))
        );
        prop_assert_eq!(
            apply(combine).to((Some(left), right)),
            Maybe::of(combine(left, right))
        );
    }

    #[test]
    fn prop_apply_agrees_with_option_zip(left in any::<Option<i32>>(), right in any::<Option<i32>>()) {
        let expected: Maybe<i64> = left.zip(right).map(|(a, b)| combine(a, b)).into();
        prop_assert_eq!(apply(combine).to((left, right)), expected);
    }

    #[test]
    fn prop_apply_never_calls_on_empty(value in any::<i32>(), empty_first in any::<bool>()) {
        let calls = Cell::new(0);
        let counted = |left: i32, right: i32| {
            calls.set(calls.get() + 1);
            combine(left, right)
        };

        let arguments = if empty_first {
            (Maybe::empty(), Maybe::of(value))
        } else {
            (Maybe::of(value), Maybe::empty())
        };

        prop_assert!(apply(counted).to(arguments).is_empty());
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn prop_match_with_runs_exactly_one(value in any::<Option<u32>>()) {
        let successes = Cell::new(0);
        let fallbacks = Cell::new(0);
        let success = |_: u32| successes.set(successes.get() + 1);
        let fallback = || fallbacks.set(fallbacks.get() + 1);

        match_with(success, fallback).to((value,));

        prop_assert_eq!(successes.get() + fallbacks.get(), 1);
        prop_assert_eq!(successes.get() == 1, value.is_some());
    }

    #[test]
    fn prop_match_with_order_independent(value in any::<Option<i16>>(), fallback_value in any::<i16>()) {
        let double = |number: i16| number.wrapping_mul(2);
        let fallback = || fallback_value;

        prop_assert_eq!(
            match_with(double, fallback).to((value,)),
            match_with(fallback, double).to((value,))
        );
    }

    #[test]
    fn prop_attempt_agrees_with_scan(left in any::<Option<u8>>(), right in any::<Option<char>>()) {
        let arguments = (Maybe::from(left), right, "plain");
        let expected = all_present(&arguments);
        prop_assert_eq!(
            attempt(|_: u8, _: char, _: &str| ()).ran(arguments),
            expected
        );
        prop_assert_eq!(expected, left.is_some() && right.is_some());
    }

    #[test]
    fn prop_attempt_equals_apply(left in any::<Option<i32>>(), right in any::<i32>()) {
        let combine = |left: i32, right: i32| left.wrapping_sub(right);

        prop_assert_eq!(
            attempt(combine).to((Maybe::from(left), right)),
            apply(combine).to((Maybe::from(left), right))
        );
        prop_assert_eq!(
            attempt(combine).to((Maybe::from(left), right)),
            Maybe::from(left.map(|left| combine(left, right)))
        );
    }
}
