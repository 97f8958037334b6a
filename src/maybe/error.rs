//! Error type for converting an empty `Maybe` into a `Result`.

/// Represents the absence of a value where one was required.
///
/// Returned by [`Maybe::ok_or_empty`](super::Maybe::ok_or_empty).
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::maybe::{EmptyError, Maybe};
///
/// let error = Maybe::<i32>::empty().ok_or_empty().unwrap_err();
/// assert_eq!(error, EmptyError { type_name: "i32" });
/// assert_eq!(format!("{error}"), "Maybe<i32> is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyError {
    /// The name of the payload type, as reported by `core::any::type_name`.
    pub type_name: &'static str,
}

impl EmptyError {
    /// Creates the error for `Maybe<T>`.
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self {
        Self {
            type_name: core::any::type_name::<T>(),
        }
    }
}

impl std::fmt::Display for EmptyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Maybe<{}> is empty", self.type_name)
    }
}

impl std::error::Error for EmptyError {}
