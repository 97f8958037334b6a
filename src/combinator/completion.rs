//! Result shaping for the two branches of a combinator call.
//!
//! A function that returns a value `R` yields `Maybe<R>` through a
//! combinator; a function that returns `()` yields `()`. The fallback branch
//! must agree: a `()` fallback produces the empty result, an `R` fallback
//! produces `Maybe::of` its value, and a value-returning fallback next to a
//! `()` success does not compile.

use crate::maybe::Maybe;
use crate::repr::Repr;

/// The return type of a success function.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::Completion;
/// use lambars_maybe::maybe::Maybe;
///
/// assert_eq!(5_i32.complete(), Maybe::of(5));
/// assert!(<i32 as Completion>::skipped().is_empty());
/// let () = ().complete();
/// ```
pub trait Completion {
    /// What the combinator call evaluates to.
    type Output;

    /// Wraps the success function's return value.
    fn complete(self) -> Self::Output;

    /// The result when the success function was not called.
    fn skipped() -> Self::Output;
}

impl<R: Repr> Completion for R {
    type Output = Maybe<R>;

    #[inline]
    fn complete(self) -> Maybe<R> {
        Maybe::of(self)
    }

    #[inline]
    fn skipped() -> Maybe<R> {
        Maybe::empty()
    }
}

impl Completion for () {
    type Output = ();

    #[inline]
    fn complete(self) {}

    #[inline]
    fn skipped() {}
}

/// The return type of a fallback function, given the success type `R`.
pub trait Recovery<R: Completion> {
    /// Turns the fallback's return value into the combinator result.
    fn recover(self) -> R::Output;
}

impl<R: Completion> Recovery<R> for () {
    #[inline]
    fn recover(self) -> R::Output {
        R::skipped()
    }
}

impl<R: Repr> Recovery<R> for R {
    #[inline]
    fn recover(self) -> Maybe<R> {
        Maybe::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn recover_as<R: Completion, F: Recovery<R>>(fallback: F) -> R::Output {
        fallback.recover()
    }

    #[rstest]
    fn unit_fallback_yields_empty() {
        assert!(recover_as::<String, ()>(()).is_empty());
    }

    #[rstest]
    fn value_fallback_yields_present() {
        assert_eq!(recover_as::<i32, i32>(-1), Maybe::of(-1));
    }

    #[rstest]
    fn unit_fallback_for_unit_success() {
        recover_as::<(), ()>(());
    }

    #[rstest]
    fn float_completion_keeps_sentinel_rule() {
        assert!(f64::NAN.complete().is_empty());
        assert_eq!(0.5_f64.complete(), Maybe::of(0.5));
    }
}
