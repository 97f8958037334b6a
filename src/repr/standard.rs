//! `Repr` implementations for standard library types.

use super::{Repr, Sentinel, Tagged};
use crate::maybe::Maybe;

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

macro_rules! tagged_repr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Repr for $ty {
                type Slot = Tagged<Self>;
            }
        )*
    };
}

macro_rules! sentinel_repr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Repr for $ty {
                type Slot = Sentinel<Self>;
            }
        )*
    };
}

sentinel_repr!(f32, f64, char);

tagged_repr!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String,
);

tagged_repr!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

impl<T: ?Sized> Repr for &T {
    type Slot = Tagged<Self>;
}

impl<T: ?Sized> Repr for &mut T {
    type Slot = Tagged<Self>;
}

impl<T: ?Sized> Repr for Box<T> {
    type Slot = Tagged<Self>;
}

impl<T: ?Sized> Repr for Rc<T> {
    type Slot = Tagged<Self>;
}

impl<T: ?Sized> Repr for Arc<T> {
    type Slot = Tagged<Self>;
}

impl<T: ?Sized> Repr for NonNull<T> {
    type Slot = Tagged<Self>;
}

impl<B: ToOwned + ?Sized> Repr for Cow<'_, B> {
    type Slot = Tagged<Self>;
}

impl<T> Repr for Vec<T> {
    type Slot = Tagged<Self>;
}

impl<T> Repr for VecDeque<T> {
    type Slot = Tagged<Self>;
}

impl<T, const N: usize> Repr for [T; N] {
    type Slot = Tagged<Self>;
}

impl<K, V, S> Repr for HashMap<K, V, S> {
    type Slot = Tagged<Self>;
}

impl<T, S> Repr for HashSet<T, S> {
    type Slot = Tagged<Self>;
}

impl<K, V> Repr for BTreeMap<K, V> {
    type Slot = Tagged<Self>;
}

impl<T> Repr for BTreeSet<T> {
    type Slot = Tagged<Self>;
}

impl<T> Repr for Option<T> {
    type Slot = Tagged<Self>;
}

impl<T, E> Repr for Result<T, E> {
    type Slot = Tagged<Self>;
}

impl<T: Repr> Repr for Maybe<T> {
    type Slot = Tagged<Self>;
}

impl<A> Repr for (A,) {
    type Slot = Tagged<Self>;
}

impl<A, B> Repr for (A, B) {
    type Slot = Tagged<Self>;
}

impl<A, B, C> Repr for (A, B, C) {
    type Slot = Tagged<Self>;
}

impl<A, B, C, D> Repr for (A, B, C, D) {
    type Slot = Tagged<Self>;
}
