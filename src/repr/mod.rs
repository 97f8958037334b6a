//! Invalidity policies: how a `Maybe<T>` stores the absence of a value.
//!
//! Every type that can live inside a [`Maybe`](crate::maybe::Maybe) names its
//! storage slot through [`Repr::Slot`]. Two slots are provided:
//!
//! - [`Tagged<T>`]: an explicit present/absent tag next to the value. This is
//!   the policy for almost every type. Pointer-like types (`&T`, `Box<T>`,
//!   `NonNull<T>`, `NonZero*`) still get the null niche, so the tag costs no
//!   space for them.
//! - [`Sentinel<T>`]: the value slot itself, with one in-domain value of `T`
//!   reserved to mean "empty". Used for `f32` / `f64` (NaN) and `char`
//!   (`char::MAX`). Requires [`HasSentinel`].
//!
//! The choice is made when `Maybe<T>` is monomorphized; no runtime type
//! inspection takes place.
//!
//! # Sentinel ambiguity
//!
//! A sentinel-backed `Maybe` cannot tell "empty" apart from "present and equal
//! to the sentinel". Constructing `Maybe::of(f64::NAN)` is accepted and yields
//! a value that every operation treats as empty.
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//!
//! assert!(Maybe::of(f64::NAN).is_empty());
//! assert!(Maybe::of(char::MAX).is_empty());
//! assert!(!Maybe::of(0.0_f64).is_empty());
//! ```
//!
//! # User types
//!
//! User types opt in with `#[derive(Repr)]` (tagged storage) or
//! `#[derive(Repr)] #[maybe(sentinel)]` (sentinel storage, requires a
//! [`HasSentinel`] impl). The impl can also be written by hand:
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//! use lambars_maybe::repr::{Repr, Tagged};
//!
//! #[derive(Debug, PartialEq)]
//! struct Port(u16);
//!
//! impl Repr for Port {
//!     type Slot = Tagged<Self>;
//! }
//!
//! assert_eq!(Maybe::of(Port(80)).value_or(Port(0)), Port(80));
//! ```

mod sentinel;
mod standard;
mod tagged;

pub use sentinel::{HasSentinel, Sentinel};
pub use tagged::Tagged;

/// Storage for zero or one `T`.
///
/// A slot is the only place a [`Maybe`](crate::maybe::Maybe) keeps its state.
/// Implementations must uphold one invariant: [`get`](Slot::get) returns
/// `Some` exactly when the slot holds a value that is observable as present.
pub trait Slot<T>: Sized {
    /// Whether two empty slots compare equal.
    ///
    /// `false` only for policies whose "empty" is a value that is never equal
    /// to itself (NaN). For `T: Eq` this is always `true`, which keeps
    /// `Maybe<T>: Eq` reflexive.
    fn empties_equal() -> bool
    where
        T: PartialEq;

    /// Creates an empty slot.
    fn vacant() -> Self;

    /// Creates a slot holding `value`.
    ///
    /// Sentinel slots store the value as is; if it equals the sentinel the
    /// slot reads back as empty.
    fn occupied(value: T) -> Self;

    /// Returns a reference to the stored value, if present.
    fn get(&self) -> Option<&T>;

    /// Returns a mutable reference to the stored value, if present.
    ///
    /// Writing the sentinel through this reference empties a sentinel slot.
    fn get_mut(&mut self) -> Option<&mut T>;

    /// Consumes the slot and returns the stored value, if present.
    fn into_inner(self) -> Option<T>;

    /// Moves the value out, leaving the slot empty.
    #[inline]
    fn take(&mut self) -> Option<T> {
        core::mem::replace(self, Self::vacant()).into_inner()
    }
}

/// Selects the storage slot used by `Maybe<Self>`.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::repr::{Repr, Sentinel, Tagged};
///
/// fn assert_slot<T: Repr<Slot = S>, S>() {}
///
/// assert_slot::<f64, Sentinel<f64>>();
/// assert_slot::<char, Sentinel<char>>();
/// assert_slot::<i32, Tagged<i32>>();
/// assert_slot::<String, Tagged<String>>();
/// ```
///
/// `()` has no representation: it is the "no value" result of the
/// combinators, not a payload, so `Maybe<()>` does not compile.
pub trait Repr: Sized {
    /// The storage slot for this type.
    type Slot: Slot<Self>;
}
