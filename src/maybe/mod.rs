//! `Maybe<T>` - a container holding zero or one value of type `T`.
//!
//! A `Maybe` is always in exactly one of two states: *Empty* or *Present*.
//! There is no unchecked accessor: the payload is reached through
//! [`value_or`](Maybe::value_or), [`attempt`](Maybe::attempt),
//! [`map`](Maybe::map), [`filter`](Maybe::filter) and their variants, or by
//! converting into a `core::option::Option`.
//!
//! The storage of each `T` is selected by its [`Repr`] implementation (see
//! [`crate::repr`]). The choice is invisible except for one rule: two empty
//! floating-point `Maybe`s never compare equal, mirroring `NaN != NaN`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//!
//! let seven = Maybe::of(7);
//! assert!(seven.contains(7));
//! assert!(seven.filter(|value| *value != 7).is_empty());
//!
//! assert_eq!(Maybe::<i32>::empty().value_or(-1), -1);
//! assert_eq!(seven.map(|value| f64::from(value) * 0.5), Maybe::of(3.5));
//!
//! // Empty integers are equal, empty floats are not.
//! assert_eq!(Maybe::<i32>::empty(), Maybe::empty());
//! assert_ne!(Maybe::<f64>::empty(), Maybe::empty());
//! ```

mod error;
mod sequence;

pub use error::EmptyError;
pub use sequence::{Enumerate, Sequence};

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::repr::{Repr, Slot};

/// A value of type `T`, or nothing.
///
/// Construct with [`Maybe::of`] or [`Maybe::empty`] (also [`Default`]).
///
/// # Type Parameters
///
/// * `T` - The payload type. Its [`Repr`] picks the storage.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::maybe::Maybe;
///
/// let mut name = Maybe::of("ferris".to_string());
/// assert!(name.attempt(|value| assert_eq!(value, "ferris")));
///
/// name.clear();
/// assert!(name.is_empty());
/// assert!(!name.attempt(|_| unreachable!()));
/// ```
pub struct Maybe<T: Repr> {
    slot: T::Slot,
}

impl<T: Repr> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert!(Maybe::<String>::empty().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slot: T::Slot::vacant(),
        }
    }

    /// Creates a `Maybe` holding `value`.
    ///
    /// For sentinel-backed types a `value` equal to the sentinel (a NaN, or
    /// `char::MAX`) is accepted and produces a `Maybe` that is
    /// indistinguishable from [`Maybe::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert!(!Maybe::of(0).is_empty());
    /// assert!(Maybe::of(f32::NAN).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn of(value: T) -> Self {
        Self {
            slot: T::Slot::occupied(value),
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns `true` if no value is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.get().is_none()
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.slot.get().is_some()
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Compares two `Maybe`s.
    ///
    /// - Both present: compares the payloads with `T`'s equality.
    /// - Both empty: `true`, except for NaN-backed types where it is `false`.
    /// - One empty, one present: `false`.
    ///
    /// This is also what `==` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert!(Maybe::of("a").equals(&Maybe::of("a")));
    /// assert!(!Maybe::of("a").equals(&Maybe::empty()));
    /// assert!(Maybe::<&str>::empty().equals(&Maybe::empty()));
    /// assert!(!Maybe::<f32>::empty().equals(&Maybe::empty()));
    /// ```
    #[inline]
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self.slot.get(), other.slot.get()) {
            (Some(left), Some(right)) => left == right,
            // NaN-backed empties are never equal, every other empty is.
            (None, None) => <T::Slot as Slot<T>>::empties_equal(),
            _ => false,
        }
    }

    /// Returns `true` if this holds a value equal to `value`.
    ///
    /// Same as `self.equals(&Maybe::of(value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert!(Maybe::of(7).contains(7));
    /// assert!(!Maybe::of(7).contains(8));
    /// assert!(!Maybe::of(f64::NAN).contains(f64::NAN));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        self.equals(&Self::of(value))
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Calls `function` with the payload if present.
    ///
    /// Returns whether `function` was called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// assert!(Maybe::of(3).attempt(|value| seen.push(*value)));
    /// assert!(!Maybe::<i32>::empty().attempt(|value| seen.push(*value)));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn attempt<F>(&self, function: F) -> bool
    where
        F: FnOnce(&T),
    {
        match self.slot.get() {
            Some(value) => {
                function(value);
                true
            }
            None => false,
        }
    }

    /// Returns the payload, or `fallback` if empty.
    ///
    /// `fallback` is returned as is, even if it is a sentinel value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(4).value_or(0), 4);
    /// assert_eq!(Maybe::<i32>::empty().value_or(-1), -1);
    /// assert!(Maybe::<f64>::empty().value_or(f64::NAN).is_nan());
    /// ```
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        self.slot.into_inner().unwrap_or(fallback)
    }

    /// Returns the payload, or the result of `fallback` if empty.
    ///
    /// `fallback` is only called when empty.
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.slot.into_inner().unwrap_or_else(fallback)
    }

    /// Returns the payload, or `T::default()` if empty.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.slot.into_inner().unwrap_or_default()
    }

    /// Borrows the payload as a `core::option::Option`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Mutably borrows the payload as a `core::option::Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let mut count = Maybe::of(1);
    /// if let Some(value) = count.as_option_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(count, Maybe::of(2));
    /// ```
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.slot.get_mut()
    }

    /// Converts into a `core::option::Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot.into_inner()
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let text = Maybe::of("hello".to_string());
    /// let length = text.as_ref().map(|value| value.len());
    /// assert_eq!(length, Maybe::of(5));
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        self.slot.get().into()
    }

    /// Returns the payload as `Ok`, or `Err(error)` if empty.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.slot.into_inner().ok_or(error)
    }

    /// Returns the payload as `Ok`, or an [`EmptyError`] naming `T` if empty.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] when the `Maybe` is empty.
    #[inline]
    pub fn ok_or_empty(self) -> Result<T, EmptyError> {
        self.slot.into_inner().ok_or_else(EmptyError::of::<T>)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the payload, producing a new `Maybe`.
    ///
    /// `function` is not called when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(7).map(|value| value.to_string()), Maybe::of("7".to_string()));
    /// assert!(Maybe::<i32>::empty().map(|value| value + 1).is_empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        U: Repr,
        F: FnOnce(T) -> U,
    {
        match self.slot.into_inner() {
            Some(value) => Maybe::of(function(value)),
            None => Maybe::empty(),
        }
    }

    /// Applies `function` to a reference of the payload, producing a new `Maybe`.
    #[inline]
    pub fn map_ref<U, F>(&self, function: F) -> Maybe<U>
    where
        U: Repr,
        F: FnOnce(&T) -> U,
    {
        match self.slot.get() {
            Some(value) => Maybe::of(function(value)),
            None => Maybe::empty(),
        }
    }

    /// Keeps the payload only if `predicate` accepts it.
    ///
    /// `predicate` is not called when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(4).filter(|value| value % 2 == 0), Maybe::of(4));
    /// assert!(Maybe::of(3).filter(|value| value % 2 == 0).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.slot.get().is_some_and(predicate) {
            self
        } else {
            Self::empty()
        }
    }

    /// Like [`filter`](Maybe::filter), but leaves `self` untouched and clones
    /// the payload into the result.
    #[inline]
    #[must_use]
    pub fn filter_ref<P>(&self, predicate: P) -> Self
    where
        T: Clone,
        P: FnOnce(&T) -> bool,
    {
        match self.slot.get() {
            Some(value) if predicate(value) => Self::of(value.clone()),
            _ => Self::empty(),
        }
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let parse = |text: &str| -> Maybe<i32> { text.parse().ok().into() };
    /// assert_eq!(Maybe::of("12").and_then(parse), Maybe::of(12));
    /// assert!(Maybe::of("x").and_then(parse).is_empty());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        U: Repr,
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.slot.into_inner() {
            Some(value) => function(value),
            None => Maybe::empty(),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        if self.is_present() { self } else { alternative }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_present() {
            self
        } else {
            alternative()
        }
    }

    /// Pairs two payloads; empty if either side is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(1).zip(Maybe::of('a')), Maybe::of((1, 'a')));
    /// assert!(Maybe::of(1).zip(Maybe::<char>::empty()).is_empty());
    /// ```
    #[inline]
    pub fn zip<U: Repr>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.slot.into_inner().zip(other.into_option()).into()
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Stores `value`, discarding any previous payload.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.slot = T::Slot::occupied(value);
    }

    /// Resets to empty.
    #[inline]
    pub fn clear(&mut self) {
        self.slot = T::Slot::vacant();
    }

    /// Moves the payload out into a new `Maybe`, leaving `self` empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let mut source = Maybe::of(5);
    /// let taken = source.take();
    /// assert_eq!(taken, Maybe::of(5));
    /// assert!(source.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        self.slot.take().into()
    }

    /// Stores `value` and returns the previous contents.
    #[inline]
    #[must_use]
    pub fn replace(&mut self, value: T) -> Self {
        core::mem::replace(self, Self::of(value))
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterates the contained sequence as `(index, element)` pairs.
    ///
    /// Yields nothing when empty. Each call starts from the beginning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let pairs: Vec<(usize, char)> = Maybe::of("hi").enumerate().collect();
    /// assert_eq!(pairs, vec![(0, 'h'), (1, 'i')]);
    ///
    /// assert_eq!(Maybe::<&str>::empty().enumerate().count(), 0);
    /// ```
    #[inline]
    pub fn enumerate(&self) -> Enumerate<'_, T>
    where
        T: Sequence,
    {
        Enumerate::new(self.slot.get())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Repr> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Repr + Clone> Clone for Maybe<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self.slot.get() {
            Some(value) => Self::of(value.clone()),
            None => Self::empty(),
        }
    }
}

impl<T: Repr + Copy> Copy for Maybe<T> where T::Slot: Copy {}

impl<T: Repr + PartialEq> PartialEq for Maybe<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Repr + Eq> Eq for Maybe<T> {}

impl<T: Repr + Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.get().hash(state);
    }
}

impl<T: Repr + fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => formatter.debug_tuple("Present").field(value).finish(),
            None => formatter.write_str("Empty"),
        }
    }
}

impl<T: Repr + fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => write!(formatter, "Present({value})"),
            None => formatter.write_str("Empty"),
        }
    }
}

impl<T: Repr> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

impl<T: Repr> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or_else(Self::empty, Self::of)
    }
}

impl<T: Repr> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<'a, T: Repr + Sequence + 'a> IntoIterator for &'a Maybe<T> {
    type Item = (usize, T::Element<'a>);
    type IntoIter = Enumerate<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.enumerate()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: Repr + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: Repr + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Layout
// =============================================================================

static_assertions::assert_eq_size!(Maybe<f64>, f64);
static_assertions::assert_eq_size!(Maybe<f32>, f32);
static_assertions::assert_eq_size!(Maybe<char>, char);
static_assertions::assert_eq_size!(Maybe<&u8>, &u8);
static_assertions::assert_eq_size!(Maybe<Box<str>>, Box<str>);
static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync, Eq, Hash);
static_assertions::assert_impl_all!(Maybe<f64>: Copy, PartialEq);
static_assertions::assert_not_impl_any!(Maybe<f64>: Eq);
static_assertions::assert_not_impl_any!(Maybe<String>: Copy);
