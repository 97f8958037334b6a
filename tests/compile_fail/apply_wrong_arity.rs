//! Test that an argument list shorter than the function's parameter list
//! produces a compile error.

use lambars_maybe::combinator::apply;
use lambars_maybe::maybe::Maybe;

fn main() {
    let add = |left: i32, right: i32| left + right;
    let _ = apply(add).to((Maybe::of(1),));
}
