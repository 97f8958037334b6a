//! Sentinel storage: one in-domain value of `T` is reserved to mean "empty".

use super::Slot;

/// Types with a natural invalid value.
///
/// Implementations must keep [`is_sentinel`](HasSentinel::is_sentinel) true
/// for [`SENTINEL`](HasSentinel::SENTINEL); otherwise an empty `Maybe<Self>`
/// reads back as present. Debug builds check this whenever an empty slot is
/// created.
///
/// Two empty `Maybe<Self>` values are equal exactly when `SENTINEL` equals
/// itself, so a `PartialEq` that is not reflexive on the sentinel (NaN) makes
/// empties unequal.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::repr::HasSentinel;
///
/// assert!(f64::NAN.is_sentinel());
/// assert!(char::MAX.is_sentinel());
/// assert!(!'a'.is_sentinel());
/// ```
pub trait HasSentinel: Copy {
    /// The value that stands for "empty".
    const SENTINEL: Self;

    /// Returns `true` if `self` reads as "empty".
    fn is_sentinel(&self) -> bool;
}

impl HasSentinel for f32 {
    const SENTINEL: Self = Self::NAN;

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_nan()
    }
}

impl HasSentinel for f64 {
    const SENTINEL: Self = Self::NAN;

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_nan()
    }
}

impl HasSentinel for char {
    const SENTINEL: Self = Self::MAX;

    #[inline]
    fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

const SENTINEL_INVARIANT_PANIC_MESSAGE: &str =
    "HasSentinel::SENTINEL must satisfy HasSentinel::is_sentinel";

/// Slot that stores `T` unboxed and uses [`HasSentinel::SENTINEL`] for "empty".
///
/// Every NaN bit pattern counts as empty, not only the canonical one.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Sentinel<T: HasSentinel>(T);

impl<T: HasSentinel> Slot<T> for Sentinel<T> {
    #[inline]
    #[allow(clippy::eq_op)]
    fn empties_equal() -> bool
    where
        T: PartialEq,
    {
        T::SENTINEL == T::SENTINEL
    }

    #[inline]
    fn vacant() -> Self {
        debug_assert!(
            T::SENTINEL.is_sentinel(),
            "{}",
            SENTINEL_INVARIANT_PANIC_MESSAGE
        );
        Self(T::SENTINEL)
    }

    #[inline]
    fn occupied(value: T) -> Self {
        Self(value)
    }

    #[inline]
    fn get(&self) -> Option<&T> {
        if self.0.is_sentinel() {
            None
        } else {
            Some(&self.0)
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut T> {
        if self.0.is_sentinel() {
            None
        } else {
            Some(&mut self.0)
        }
    }

    #[inline]
    fn into_inner(self) -> Option<T> {
        if self.0.is_sentinel() {
            None
        } else {
            Some(self.0)
        }
    }
}
