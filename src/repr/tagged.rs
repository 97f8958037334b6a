//! Tagged storage: an explicit present/absent marker next to the value.

use super::Slot;

/// Slot that stores its state in a tag.
///
/// Backed by `core::option::Option<T>`, so every value of `T` (including
/// `i32::MIN`, empty strings or empty vectors) is a legitimate payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tagged<T>(Option<T>);

impl<T> Slot<T> for Tagged<T> {
    #[inline]
    fn empties_equal() -> bool
    where
        T: PartialEq,
    {
        true
    }

    #[inline]
    fn vacant() -> Self {
        Self(None)
    }

    #[inline]
    fn occupied(value: T) -> Self {
        Self(Some(value))
    }

    #[inline]
    fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    #[inline]
    fn into_inner(self) -> Option<T> {
        self.0
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.0.take()
    }
}
