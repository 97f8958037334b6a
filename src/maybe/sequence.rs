//! Indexed iteration over a `Maybe` whose payload is a sequence.
//!
//! [`Sequence`] uses Generic Associated Types so that the element type may
//! borrow from the container (`&E` for `Vec<E>`) or be produced by value
//! (`char` for `String`).

use std::collections::VecDeque;
use std::iter::FusedIterator;

/// An ordered, finite sequence of elements.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::maybe::Sequence;
///
/// let letters: Vec<char> = "ab".to_string().elements().collect();
/// assert_eq!(letters, vec!['a', 'b']);
///
/// let numbers = vec![1, 2];
/// let borrowed: Vec<&i32> = numbers.elements().collect();
/// assert_eq!(borrowed, vec![&1, &2]);
/// ```
pub trait Sequence {
    /// The element yielded for each position.
    type Element<'a>
    where
        Self: 'a;

    /// The iterator over the elements, in order.
    type Iter<'a>: Iterator<Item = Self::Element<'a>> + Clone
    where
        Self: 'a;

    /// Returns an iterator over the elements, starting at the first one.
    fn elements(&self) -> Self::Iter<'_>;
}

impl Sequence for String {
    type Element<'a>
        = char
    where
        Self: 'a;
    type Iter<'a>
        = std::str::Chars<'a>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl<'s> Sequence for &'s str {
    type Element<'a>
        = char
    where
        Self: 'a;
    type Iter<'a>
        = std::str::Chars<'a>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl<E> Sequence for Vec<E> {
    type Element<'a>
        = &'a E
    where
        Self: 'a;
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<E> Sequence for VecDeque<E> {
    type Element<'a>
        = &'a E
    where
        Self: 'a;
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, E>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<E, const N: usize> Sequence for [E; N] {
    type Element<'a>
        = &'a E
    where
        Self: 'a;
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<'s, E> Sequence for &'s [E] {
    type Element<'a>
        = &'a E
    where
        Self: 'a;
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<E> Sequence for Box<[E]> {
    type Element<'a>
        = &'a E
    where
        Self: 'a;
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

/// Iterator over `(index, element)` pairs of a `Maybe` sequence.
///
/// Created by [`Maybe::enumerate`](super::Maybe::enumerate). Yields nothing
/// for an empty `Maybe`. A clone continues from the same position; call
/// `enumerate` again to start over.
pub struct Enumerate<'a, T: Sequence + 'a> {
    inner: Option<std::iter::Enumerate<T::Iter<'a>>>,
}

impl<'a, T: Sequence + 'a> Enumerate<'a, T> {
    pub(super) fn new(sequence: Option<&'a T>) -> Self {
        Self {
            inner: sequence.map(|sequence| sequence.elements().enumerate()),
        }
    }
}

impl<'a, T: Sequence + 'a> Clone for Enumerate<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T: Sequence + 'a> Iterator for Enumerate<'a, T> {
    type Item = (usize, T::Element<'a>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |inner| inner.size_hint())
    }
}

impl<'a, T> ExactSizeIterator for Enumerate<'a, T>
where
    T: Sequence + 'a,
    T::Iter<'a>: ExactSizeIterator,
{
}

impl<'a, T> FusedIterator for Enumerate<'a, T>
where
    T: Sequence + 'a,
    T::Iter<'a>: FusedIterator,
{
}
