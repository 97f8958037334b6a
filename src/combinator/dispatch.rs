//! The `apply`, `attempt` and `match_with` combinators.

use super::arguments::Arguments;
use super::completion::{Completion, Recovery};
use super::invoke::Invoke;

// =============================================================================
// apply
// =============================================================================

/// A function waiting for its argument list. Created by [`apply`].
#[derive(Debug, Clone, Copy)]
#[must_use = "the function only runs when `to` is called"]
pub struct Apply<F> {
    function: F,
}

/// Calls `function` only if every optional argument is present.
///
/// Optional arguments are unwrapped; plain ones are passed unchanged. A
/// function returning `R` yields `Maybe<R>` (Empty when skipped); a function
/// returning `()` yields `()`.
///
/// Closure parameters must carry type annotations.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::apply;
/// use lambars_maybe::maybe::Maybe;
///
/// let area = |width: f64, height: f64| width * height;
///
/// assert_eq!(apply(area).to((Maybe::of(2.0), 3.0)), Maybe::of(6.0));
/// assert!(apply(area).to((Maybe::of(2.0), Maybe::<f64>::empty())).is_empty());
/// ```
///
/// Arguments that do not fit the function after unwrapping, by type or by
/// count, are rejected at compile time.
#[inline]
pub const fn apply<F>(function: F) -> Apply<F> {
    Apply { function }
}

impl<F> Apply<F> {
    /// Runs the call against `arguments`.
    #[inline]
    pub fn to<A>(self, arguments: A) -> <F::Output as Completion>::Output
    where
        A: Arguments,
        F: Invoke<A::Values>,
        F::Output: Completion,
    {
        match arguments.into_values() {
            Some(values) => self.function.invoke(values).complete(),
            None => <F::Output as Completion>::skipped(),
        }
    }
}

// =============================================================================
// attempt
// =============================================================================

/// A function waiting for its argument list. Created by [`attempt`].
#[derive(Debug, Clone, Copy)]
#[must_use = "the function only runs when `to` is called"]
pub struct Attempt<F> {
    function: F,
}

/// Calls `function` only if every optional argument is present.
///
/// Same as [`apply`]: a function returning `R` yields `Maybe<R>`, and a
/// function returning `()` yields `()`. Use [`Attempt::ran`] to learn whether
/// the function ran instead.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::attempt;
/// use lambars_maybe::maybe::Maybe;
///
/// let double = |value: i32| value * 2;
/// assert_eq!(attempt(double).to((Maybe::of(3),)), Maybe::of(6));
/// assert!(attempt(double).to((Maybe::<i32>::empty(),)).is_empty());
///
/// let mut log = Vec::new();
/// assert!(attempt(|line: &str| log.push(line.to_string())).ran((Maybe::of("ready"),)));
/// assert!(!attempt(|line: &str| log.push(line.to_string())).ran((Maybe::<&str>::empty(),)));
/// assert_eq!(log, vec!["ready".to_string()]);
/// ```
#[inline]
pub const fn attempt<F>(function: F) -> Attempt<F> {
    Attempt { function }
}

impl<F> Attempt<F> {
    /// Runs the call against `arguments`.
    #[inline]
    pub fn to<A>(self, arguments: A) -> <F::Output as Completion>::Output
    where
        A: Arguments,
        F: Invoke<A::Values>,
        F::Output: Completion,
    {
        apply(self.function).to(arguments)
    }

    /// Runs the call against `arguments`, discarding the result. Returns
    /// `true` if the function ran.
    #[inline]
    pub fn ran<A>(self, arguments: A) -> bool
    where
        A: Arguments,
        F: Invoke<A::Values>,
    {
        arguments.into_values().is_some_and(|values| {
            self.function.invoke(values);
            true
        })
    }
}

// =============================================================================
// match_with
// =============================================================================

/// Marks a [`match_with`] call whose success function comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuccessFirst {}

/// Marks a [`match_with`] call whose fallback function comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackFirst {}

/// A success function and a fallback function, in either order.
///
/// `Order` is [`SuccessFirst`] or [`FallbackFirst`]. It is inferred from the
/// signatures: the fallback is the callable that takes no arguments.
pub trait Branches<Values, Order> {
    /// What the combinator call evaluates to.
    type Output;

    /// Calls the success function with `values`, or the fallback if `None`.
    fn dispatch(self, values: Option<Values>) -> Self::Output;
}

impl<S, B, V, Fallback> Branches<V, SuccessFirst> for (S, B)
where
    S: Invoke<V>,
    S::Output: Completion,
    B: FnOnce() -> Fallback,
    Fallback: Recovery<S::Output>,
{
    type Output = <S::Output as Completion>::Output;

    #[inline]
    fn dispatch(self, values: Option<V>) -> Self::Output {
        let (success, fallback) = self;
        match values {
            Some(values) => success.invoke(values).complete(),
            None => fallback().recover(),
        }
    }
}

impl<B, S, V, Fallback> Branches<V, FallbackFirst> for (B, S)
where
    S: Invoke<V>,
    S::Output: Completion,
    B: FnOnce() -> Fallback,
    Fallback: Recovery<S::Output>,
{
    type Output = <S::Output as Completion>::Output;

    #[inline]
    fn dispatch(self, values: Option<V>) -> Self::Output {
        let (fallback, success) = self;
        match values {
            Some(values) => success.invoke(values).complete(),
            None => fallback().recover(),
        }
    }
}

/// A pair of branches waiting for its argument list. Created by
/// [`match_with`].
#[derive(Debug, Clone, Copy)]
#[must_use = "neither branch runs until `to` is called"]
pub struct MatchWith<A, B> {
    first: A,
    second: B,
}

/// Calls the success function if every optional argument is present, and the
/// fallback function otherwise.
///
/// The two functions may be given in either order; the one that takes no
/// arguments is the fallback. Exactly one of them runs.
///
/// | success returns | fallback returns | result                                 |
/// |-----------------|------------------|----------------------------------------|
/// | `R`             | `()`             | `Maybe<R>`, Empty on the fallback path |
/// | `R`             | `R`              | `Maybe<R>`, `of(fallback())` otherwise |
/// | `()`            | `()`             | `()`                                   |
///
/// When the argument list is `()` both functions take no arguments; name the
/// order with a turbofish, `.to::<_, SuccessFirst>(())`.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::match_with;
/// use lambars_maybe::maybe::Maybe;
///
/// let half = |value: i32| f64::from(value) / 2.0;
///
/// assert_eq!(match_with(half, || -1.0).to((Maybe::of(3),)), Maybe::of(1.5));
/// assert_eq!(match_with(|| -1.0, half).to((Maybe::<i32>::empty(),)), Maybe::of(-1.0));
/// assert!(match_with(half, || {}).to((Maybe::<i32>::empty(),)).is_empty());
/// ```
///
/// A value-returning fallback must return exactly the success function's
/// type; pairing it with a success function that returns nothing, or with one
/// that returns another type, does not compile.
#[inline]
pub const fn match_with<A, B>(first: A, second: B) -> MatchWith<A, B> {
    MatchWith { first, second }
}

impl<A, B> MatchWith<A, B> {
    /// Runs the call against `arguments`.
    #[inline]
    pub fn to<Args, Order>(
        self,
        arguments: Args,
    ) -> <(A, B) as Branches<Args::Values, Order>>::Output
    where
        Args: Arguments,
        (A, B): Branches<Args::Values, Order>,
    {
        (self.first, self.second).dispatch(arguments.into_values())
    }
}
