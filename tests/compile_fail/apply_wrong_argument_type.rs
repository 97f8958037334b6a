//! Test that an argument that does not fit the function after unwrapping
//! produces a compile error.

use lambars_maybe::combinator::apply;
use lambars_maybe::maybe::Maybe;

fn main() {
    let double = |value: i32| value * 2;
    let _ = apply(double).to((Maybe::of("seven"),));
}
