//! Calling a function with an unpacked tuple of values.

/// A callable that accepts the tuple `Values` spread over its parameters.
///
/// Implemented for every `FnOnce` of arity 0 to 8. The parameter types of the
/// function must match `Values` exactly, which is what turns an ill-formed
/// combinator call into a compile error.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::combinator::Invoke;
///
/// let join = |left: &str, right: i32| format!("{left}{right}");
/// assert_eq!(join.invoke(("hi", 5)), "hi5");
///
/// let constant = || 42;
/// assert_eq!(constant.invoke(()), 42);
/// ```
pub trait Invoke<Values> {
    /// The function's return type.
    type Output;

    /// Calls the function with the elements of `values` as its arguments.
    fn invoke(self, values: Values) -> Self::Output;
}

impl<F, R> Invoke<()> for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    #[inline]
    fn invoke(self, (): ()) -> R {
        self()
    }
}

macro_rules! impl_invoke {
    ($($index:tt)+) => {
        paste::paste! {
            impl<F, R, $([<V $index>]),+> Invoke<($([<V $index>],)+)> for F
            where
                F: FnOnce($([<V $index>]),+) -> R,
            {
                type Output = R;

                #[inline]
                fn invoke(self, values: ($([<V $index>],)+)) -> R {
                    self($(values.$index),+)
                }
            }
        }
    };
}

impl_invoke!(0);
impl_invoke!(0 1);
impl_invoke!(0 1 2);
impl_invoke!(0 1 2 3);
impl_invoke!(0 1 2 3 4);
impl_invoke!(0 1 2 3 4 5);
impl_invoke!(0 1 2 3 4 5 6);
impl_invoke!(0 1 2 3 4 5 6 7);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[allow(clippy::too_many_arguments)]
    fn sum_of_eight(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8) -> u32 {
        [a, b, c, d, e, f, g, h].iter().map(|value| u32::from(*value)).sum()
    }

    #[rstest]
    fn positions_are_kept_in_order() {
        let subtract = |left: i32, right: i32| left - right;
        assert_eq!(subtract.invoke((10, 3)), 7);
    }

    #[rstest]
    fn function_items_are_callable() {
        assert_eq!(sum_of_eight.invoke((1, 2, 3, 4, 5, 6, 7, 8)), 36);
    }

    #[rstest]
    fn moves_captured_state() {
        let owned = vec![1, 2, 3];
        let consume = move |extra: i32| owned.into_iter().sum::<i32>() + extra;
        assert_eq!(consume.invoke((4,)), 10);
    }
}
