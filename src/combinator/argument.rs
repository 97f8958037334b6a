//! Per-position classification of combinator arguments.
//!
//! Each argument of a combinator call is either *wrapped* (an optional value
//! that must be present for the call to go ahead) or *plain* (forwarded
//! unchanged). The distinction is made by the [`Argument`] impl of the
//! argument's type, so it is fixed at compile time.

use crate::maybe::Maybe;
use crate::repr::Repr;

/// A single argument of a combinator call.
///
/// # Wrapped arguments
///
/// | Type           | Forwarded as |
/// |----------------|--------------|
/// | `Maybe<T>`     | `T`          |
/// | `&Maybe<T>`    | `&T`         |
/// | `Option<T>`    | `T`          |
/// | `&Option<T>`   | `&T`         |
///
/// # Plain arguments
///
/// The primitive scalars and `String`, both by value and by reference, along
/// with `&str`, `&[T]`, `Vec<T>`, `&Vec<T>`, `Box<T>`, and anything wrapped in
/// [`Plain`]. User types can opt in with `#[derive(Plain)]`.
///
/// Every other type, including tuples, arrays and references to user types,
/// has to be wrapped in [`Plain`] to be passed through.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::{is_maybe, Argument, Plain};
/// use lambars_maybe::maybe::Maybe;
///
/// assert!(is_maybe::<Maybe<i32>>());
/// assert!(is_maybe::<&Option<String>>());
/// assert!(!is_maybe::<i32>());
/// assert!(!is_maybe::<Plain<Maybe<i32>>>());
///
/// assert_eq!(Maybe::of(3).into_value(), Some(3));
/// assert_eq!(Maybe::<i32>::empty().into_value(), None);
/// assert_eq!(4_i32.into_value(), Some(4));
/// ```
pub trait Argument {
    /// `true` for optional arguments that are unwrapped before the call.
    const WRAPPED: bool;

    /// The type handed to the called function.
    type Value;

    /// Returns `false` only for a wrapped argument that holds no value.
    fn is_present(&self) -> bool;

    /// Unwraps the argument, or returns `None` if it is an empty wrapped one.
    fn into_value(self) -> Option<Self::Value>;
}

/// Returns `true` if `A` is unwrapped by the combinators.
#[inline]
#[must_use]
pub const fn is_maybe<A: Argument>() -> bool {
    A::WRAPPED
}

/// Marks a value as a plain argument.
///
/// Use it for types that have no [`Argument`] impl of their own, or to pass
/// a `Maybe` through to a function that expects the `Maybe` itself.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::{apply, Plain};
/// use lambars_maybe::maybe::Maybe;
///
/// let describe = |label: &str, value: Maybe<i32>| format!("{label}: {value}");
///
/// let result = apply(describe).to((Maybe::of("count"), Plain(Maybe::<i32>::empty())));
/// assert_eq!(result, Maybe::of("count: Empty".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Plain<T>(pub T);

impl<T> Argument for Plain<T> {
    const WRAPPED: bool = false;
    type Value = T;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        Some(self.0)
    }
}

impl<T: Repr> Argument for Maybe<T> {
    const WRAPPED: bool = true;
    type Value = T;

    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self.into_option()
    }
}

impl<'a, T: Repr> Argument for &'a Maybe<T> {
    const WRAPPED: bool = true;
    type Value = &'a T;

    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    #[inline]
    fn into_value(self) -> Option<&'a T> {
        self.as_option()
    }
}

impl<T> Argument for Option<T> {
    const WRAPPED: bool = true;
    type Value = T;

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self
    }
}

impl<'a, T> Argument for &'a Option<T> {
    const WRAPPED: bool = true;
    type Value = &'a T;

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn into_value(self) -> Option<&'a T> {
        self.as_ref()
    }
}

macro_rules! plain_argument {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Argument for $ty {
                const WRAPPED: bool = false;
                type Value = Self;

                #[inline]
                fn is_present(&self) -> bool {
                    true
                }

                #[inline]
                fn into_value(self) -> Option<Self> {
                    Some(self)
                }
            }
        )*
    };
}

plain_argument!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

macro_rules! plain_reference {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> Argument for &'a $ty {
                const WRAPPED: bool = false;
                type Value = Self;

                #[inline]
                fn is_present(&self) -> bool {
                    true
                }

                #[inline]
                fn into_value(self) -> Option<Self> {
                    Some(self)
                }
            }
        )*
    };
}

plain_reference!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

impl<'a> Argument for &'a str {
    const WRAPPED: bool = false;
    type Value = &'a str;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_value(self) -> Option<&'a str> {
        Some(self)
    }
}

impl<'a, T> Argument for &'a [T] {
    const WRAPPED: bool = false;
    type Value = &'a [T];

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_value(self) -> Option<&'a [T]> {
        Some(self)
    }
}

impl<T> Argument for Vec<T> {
    const WRAPPED: bool = false;
    type Value = Self;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_value(self) -> Option<Self> {
        Some(self)
    }
}

impl<'a, T> Argument for &'a Vec<T> {
    const WRAPPED: bool = false;
    type Value = Self;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_value(self) -> Option<Self> {
        Some(self)
    }
}

impl<T: ?Sized> Argument for Box<T> {
    const WRAPPED: bool = false;
    type Value = Self;

    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_value(self) -> Option<Self> {
        Some(self)
    }
}
