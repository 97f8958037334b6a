//! Combinators that call ordinary functions across optional arguments.
//!
//! Every combinator takes an argument list (a tuple) that may mix plain
//! values with optional ones (`Maybe<T>`, `Option<T>`, or references to
//! either). Each call does the same three things:
//!
//! 1. **Classification**: every position is either wrapped or plain, decided
//!    by its type's [`Argument`] impl at compile time.
//! 2. **Validity scan**: the wrapped positions are checked left to right
//!    ([`all_present`]).
//! 3. **Dispatch**: if all of them hold a value, the success function is
//!    called with the unwrapped values in their original order. Otherwise it
//!    is not called, and the fallback (if any) runs instead.
//!
//! | Combinator                    | Success returns `R` | Success returns `()` |
//! |-------------------------------|---------------------|----------------------|
//! | [`apply`]`(f).to(args)`       | `Maybe<R>`          | `()`                 |
//! | [`attempt`]`(f).to(args)`     | `Maybe<R>`          | `()`                 |
//! | [`match_with`]`(f, g).to(args)` | `Maybe<R>`        | `()`                 |
//!
//! [`Attempt::ran`] reports whether the function ran as a `bool`.
//!
//! An argument list that does not fit the function after unwrapping is a
//! compile error, never a call with the wrong arguments. Failures inside the
//! called functions (panics, or an `Err` they return) reach the caller
//! unchanged.
//!
//! # Closures
//!
//! Closure parameters must be annotated (`|name: &str| ...`): the signature is
//! matched through trait impls, which cannot infer it.
//!
//! # Plain arguments
//!
//! Only types with an [`Argument`] impl can appear in an argument list. Tuples,
//! arrays and user types without `#[derive(Plain)]` have to be wrapped in
//! [`Plain`]; so does a `Maybe` the function expects as is.
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::combinator::{apply, match_with};
//! use lambars_maybe::maybe::Maybe;
//!
//! fn text(prefix: &str, count: i32) -> String {
//!     format!("{prefix}{count}")
//! }
//!
//! assert_eq!(apply(text).to((Maybe::of("hi"), 5)), Maybe::of("hi5".to_string()));
//!
//! let counted = |count: i32, label: String| format!("{count} {label}");
//! assert!(apply(counted).to((6, Maybe::<String>::empty())).is_empty());
//!
//! let summary = match_with(|| "nothing".to_string(), counted)
//!     .to((6, Maybe::<String>::empty()));
//! assert_eq!(summary, Maybe::of("nothing".to_string()));
//! ```

mod argument;
mod arguments;
mod completion;
mod dispatch;
mod invoke;
mod macros;

pub use argument::{Argument, Plain, is_maybe};
pub use arguments::{Arguments, all_present};
pub use completion::{Completion, Recovery};
pub use dispatch::{
    Apply, Attempt, Branches, FallbackFirst, MatchWith, SuccessFirst, apply, attempt, match_with,
};
pub use invoke::Invoke;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::apply;
pub use crate::attempt;
pub use crate::match_with;
