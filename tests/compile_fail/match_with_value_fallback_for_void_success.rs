//! Test that a value-returning fallback paired with a success function that
//! returns nothing produces a compile error.

use lambars_maybe::combinator::match_with;
use lambars_maybe::maybe::Maybe;

fn main() {
    let report = |value: i32| println!("{value}");
    match_with(report, || 0).to((Maybe::of(1),));
}
