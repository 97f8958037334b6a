//! Argument lists: tuples of [`Argument`]s.

use super::argument::Argument;

/// An ordered list of combinator arguments.
///
/// Implemented for `()` and for tuples of up to eight [`Argument`]s. Each
/// position is classified by its own type, so a list may freely mix plain
/// values and optional values of different payload types.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::Arguments;
/// use lambars_maybe::maybe::Maybe;
///
/// type List = (Maybe<&'static str>, i32, Option<char>);
///
/// assert_eq!(<List as Arguments>::ARITY, 3);
/// assert!(List::is_wrapped(0));
/// assert!(!List::is_wrapped(1));
/// assert!(List::is_wrapped(2));
///
/// let list: List = (Maybe::of("hi"), 5, Some('!'));
/// assert!(list.all_present());
/// assert_eq!(list.into_values(), Some(("hi", 5, '!')));
/// ```
pub trait Arguments {
    /// Number of positions.
    const ARITY: usize;

    /// The tuple handed to the called function.
    type Values;

    /// Returns `true` if the argument at `position` is unwrapped before the
    /// call. Out-of-range positions are never wrapped.
    fn is_wrapped(position: usize) -> bool;

    /// Returns `true` if every wrapped argument holds a value.
    ///
    /// Plain arguments do not take part in the scan. An empty list, or one
    /// without wrapped arguments, is always valid.
    fn all_present(&self) -> bool;

    /// Unwraps every position, or returns `None` if any wrapped argument is
    /// empty.
    fn into_values(self) -> Option<Self::Values>;
}

/// Returns `true` if every wrapped argument of `arguments` holds a value.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::all_present;
/// use lambars_maybe::maybe::Maybe;
///
/// assert!(all_present(&(Maybe::of(1), "plain", Some(2.0))));
/// assert!(!all_present(&(Maybe::of(1), Maybe::<f64>::empty())));
/// assert!(all_present(&()));
/// ```
#[inline]
pub fn all_present<A: Arguments>(arguments: &A) -> bool {
    arguments.all_present()
}

impl Arguments for () {
    const ARITY: usize = 0;
    type Values = ();

    #[inline]
    fn is_wrapped(_position: usize) -> bool {
        false
    }

    #[inline]
    fn all_present(&self) -> bool {
        true
    }

    #[inline]
    fn into_values(self) -> Option<()> {
        Some(())
    }
}

macro_rules! impl_arguments {
    ($arity:literal => $($index:tt)+) => {
        paste::paste! {
            impl<$([<A $index>]: Argument),+> Arguments for ($([<A $index>],)+) {
                const ARITY: usize = $arity;
                type Values = ($([<A $index>]::Value,)+);

                #[inline]
                fn is_wrapped(position: usize) -> bool {
                    match position {
                        $($index => [<A $index>]::WRAPPED,)+
                        _ => false,
                    }
                }

                #[inline]
                fn all_present(&self) -> bool {
                    $(self.$index.is_present())&&+
                }

                #[inline]
                fn into_values(self) -> Option<Self::Values> {
                    Some(($(self.$index.into_value()?,)+))
                }
            }
        }
    };
}

impl_arguments!(1 => 0);
impl_arguments!(2 => 0 1);
impl_arguments!(3 => 0 1 2);
impl_arguments!(4 => 0 1 2 3);
impl_arguments!(5 => 0 1 2 3 4);
impl_arguments!(6 => 0 1 2 3 4 5);
impl_arguments!(7 => 0 1 2 3 4 5 6);
impl_arguments!(8 => 0 1 2 3 4 5 6 7);
