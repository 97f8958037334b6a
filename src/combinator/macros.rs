//! Call-site sugar for the combinators.
//!
//! The macros take the arguments as a plain comma-separated list instead of
//! a tuple. Everything else, including the compile-time checks, is the same
//! as calling the function forms.

/// Calls a function if every optional argument is present.
///
/// `apply!(f; a, b)` is `apply(f).to((a, b))`.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::apply;
/// use lambars_maybe::maybe::Maybe;
///
/// fn text(prefix: &str, count: i32) -> String {
///     format!("{prefix}{count}")
/// }
///
/// assert_eq!(apply!(text; Maybe::of("hi"), 5), Maybe::of("hi5".to_string()));
/// assert!(apply!(text; Maybe::<&str>::empty(), 5).is_empty());
/// ```
#[macro_export]
macro_rules! apply {
    ($function:expr; $($argument:expr),* $(,)?) => {
        $crate::combinator::apply($function).to(($($argument,)*))
    };
}

/// Calls a function if every optional argument is present.
///
/// `attempt!(f; a, b)` is `attempt(f).to((a, b))`, which evaluates to the same
/// value as `apply!(f; a, b)`.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::attempt;
/// use lambars_maybe::maybe::Maybe;
///
/// let port = Maybe::of(8080_u16);
/// let host: Option<&str> = None;
///
/// let address = attempt!(|host: &str, port: u16| format!("{host}:{port}"); host, port);
/// assert!(address.is_empty());
/// ```
#[macro_export]
macro_rules! attempt {
    ($function:expr; $($argument:expr),* $(,)?) => {
        $crate::combinator::attempt($function).to(($($argument,)*))
    };
}

/// Calls a success or a fallback function depending on whether every
/// optional argument is present.
///
/// `match_with!(s, fb; a, b)` is `match_with(s, fb).to((a, b))`. The two
/// functions may be given in either order.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::match_with;
/// use lambars_maybe::maybe::Maybe;
///
/// let greet = |name: &str| format!("hello, {name}");
/// let anonymous = || "hello, stranger".to_string();
///
/// assert_eq!(
///     match_with!(greet, anonymous; Maybe::of("ferris")),
///     Maybe::of("hello, ferris".to_string())
/// );
/// assert_eq!(
///     match_with!(anonymous, greet; Maybe::<&str>::empty()),
///     Maybe::of("hello, stranger".to_string())
/// );
/// ```
#[macro_export]
macro_rules! match_with {
    ($first:expr, $second:expr; $($argument:expr),* $(,)?) => {
        $crate::combinator::match_with($first, $second).to(($($argument,)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::maybe::Maybe;
    use rstest::rstest;

    #[rstest]
    fn apply_macro_matches_function_form() {
        let add = |left: i32, right: i32| left + right;
        assert_eq!(
            apply!(add; Maybe::of(1), 2),
            crate::combinator::apply(add).to((Maybe::of(1), 2))
        );
    }

    #[rstest]
    fn single_argument_becomes_one_tuple() {
        let negate = |value: i64| -value;
        assert_eq!(apply!(negate; Some(4_i64)), Maybe::of(-4));
    }

    #[rstest]
    fn trailing_comma_is_accepted() {
        let pair = |left: char, right: char| format!("{left}{right}");
        assert_eq!(
            apply!(pair; Maybe::of('a'), 'b',),
            Maybe::of("ab".to_string())
        );
    }

    #[rstest]
    fn attempt_macro_skips_empty() {
        let mut seen = Vec::new();
        attempt!(|value: u8| seen.push(value); Maybe::<u8>::empty());
        attempt!(|value: u8| seen.push(value); Maybe::of(9_u8));
        assert_eq!(seen, vec![9]);
    }

    #[rstest]
    fn attempt_macro_matches_apply_macro() {
        let halve = |value: u32| value / 2;
        assert_eq!(attempt!(halve; Maybe::of(8_u32)), apply!(halve; Maybe::of(8_u32)));
        assert_eq!(attempt!(halve; Maybe::of(8_u32)), Maybe::of(4));
    }

    #[rstest]
    fn match_with_macro_uses_fallback_value() {
        let length = |text: &String| text.len();
        let missing = Maybe::<String>::empty();
        assert_eq!(match_with!(length, || 0_usize; &missing), Maybe::of(0));
    }
}
