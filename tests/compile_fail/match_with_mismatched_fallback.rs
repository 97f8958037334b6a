//! Test that a fallback returning a different type than the success function
//! produces a compile error.

use lambars_maybe::combinator::match_with;
use lambars_maybe::maybe::Maybe;

fn main() {
    let double = |value: i32| value * 2;
    let _ = match_with(double, || "none").to((Maybe::of(1),));
}
