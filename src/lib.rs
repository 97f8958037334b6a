//! # lambars-maybe
//!
//! An optional-value type whose storage is chosen per inner type, plus
//! combinators that call ordinary functions across a mix of plain and
//! optional arguments.
//!
//! ## Overview
//!
//! - **[`Maybe<T>`](maybe::Maybe)**: holds zero or one `T`. Types with a natural
//!   invalid value (`f32`/`f64` use NaN, `char` uses `char::MAX`) store it
//!   unboxed; every other type carries an explicit tag.
//! - **Representation policy**: the [`Repr`](repr::Repr) trait picks the storage
//!   slot of each `T` at monomorphization time.
//! - **Combinators**: [`apply`](combinator::apply),
//!   [`attempt`](combinator::attempt) and [`match_with`](combinator::match_with)
//!   unwrap every optional argument of a call and dispatch on whether all of
//!   them were present.
//!
//! ## Feature Flags
//!
//! - `combinator`: the `apply` / `attempt` / `match_with` layer and its macros
//! - `derive`: `#[derive(Repr)]` and `#[derive(Plain)]` for user types
//! - `serde`: `Serialize` / `Deserialize` for `Maybe<T>`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_maybe::prelude::*;
//!
//! fn text(prefix: &str, count: i32) -> String {
//!     format!("{prefix}{count}")
//! }
//!
//! let greeting = Maybe::of("hi");
//! assert_eq!(apply(text).to((greeting, 5)), Maybe::of("hi5".to_string()));
//!
//! let missing: Maybe<&str> = Maybe::empty();
//! assert!(apply(text).to((missing, 5)).is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_maybe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::*;
    pub use crate::repr::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;
}

pub mod maybe;
pub mod repr;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "derive")]
pub use lambars_maybe_derive::{Plain, Repr};
