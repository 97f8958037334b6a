//! Derive macros for lambars-maybe.
//!
//! # Available Derive Macros
//!
//! - [`Repr`]: lets a type live inside `Maybe<T>`
//! - [`Plain`]: lets a type be passed unchanged to the combinators
//!
//! # Example
//!
//! ```rust,ignore
//! use lambars_maybe::{Plain, Repr};
//! use lambars_maybe::combinator::apply;
//! use lambars_maybe::maybe::Maybe;
//!
//! #[derive(Debug, PartialEq, Repr)]
//! struct Celsius(f64);
//!
//! #[derive(Plain)]
//! struct Scale(f64);
//!
//! let scaled = apply(|value: Celsius, scale: Scale| Celsius(value.0 * scale.0))
//!     .to((Maybe::of(Celsius(20.0)), Scale(2.0)));
//! assert_eq!(scaled, Maybe::of(Celsius(40.0)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod plain;
mod repr;

use proc_macro::TokenStream;

/// Derive macro implementing `lambars_maybe::repr::Repr`.
///
/// By default the type gets tagged storage: `Maybe<Self>` keeps an explicit
/// present/absent marker, and every value of the type is a valid payload.
///
/// With `#[maybe(sentinel)]` the type gets sentinel storage instead. The type
/// must then implement `lambars_maybe::repr::HasSentinel`, and its sentinel
/// value reads back as empty.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Repr for TypeName {
///     type Slot = Tagged<Self>; // or Sentinel<Self>
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use lambars_maybe::Repr;
/// use lambars_maybe::maybe::Maybe;
/// use lambars_maybe::repr::HasSentinel;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Repr)]
/// #[maybe(sentinel)]
/// struct Percent(u8);
///
/// impl HasSentinel for Percent {
///     const SENTINEL: Self = Self(u8::MAX);
///
///     fn is_sentinel(&self) -> bool {
///         self.0 > 100
///     }
/// }
///
/// assert!(Maybe::of(Percent(101)).is_empty());
/// assert_eq!(Maybe::of(Percent(50)).value_or(Percent(0)), Percent(50));
/// ```
///
/// # Generics
///
/// Type parameters and where clauses are carried over unchanged:
///
/// ```rust,ignore
/// #[derive(Repr)]
/// struct Labeled<T> {
///     label: String,
///     value: T,
/// }
///
/// let labeled = Maybe::of(Labeled { label: "x".to_string(), value: 1 });
/// ```
#[proc_macro_derive(Repr, attributes(maybe))]
pub fn derive_repr(input: TokenStream) -> TokenStream {
    repr::derive_repr_impl(input)
}

/// Derive macro implementing `lambars_maybe::combinator::Argument` as a plain
/// argument.
///
/// A plain argument is handed to the combinator's function as is and never
/// takes part in the validity scan.
///
/// # Example
///
/// ```rust,ignore
/// use lambars_maybe::Plain;
/// use lambars_maybe::combinator::apply;
/// use lambars_maybe::maybe::Maybe;
///
/// #[derive(Plain)]
/// struct Unit(&'static str);
///
/// let render = apply(|amount: f64, unit: Unit| format!("{amount}{}", unit.0));
/// assert_eq!(render.to((Maybe::of(2.5), Unit("kg"))), Maybe::of("2.5kg".to_string()));
/// ```
#[proc_macro_derive(Plain)]
pub fn derive_plain(input: TokenStream) -> TokenStream {
    plain::derive_plain_impl(input)
}
