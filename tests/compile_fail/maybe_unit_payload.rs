//! Test that `()` cannot be stored in a `Maybe`.

use lambars_maybe::maybe::Maybe;

fn main() {
    let _unit: Maybe<()> = Maybe::empty();
}
