//! Early-return helpers for `extern "C"` functions, which cannot use `?`.

/// Values that [`try_or_else!`](crate::try_or_else) can unwrap.
pub trait IntoOption<T> {
    fn into_option(self) -> Option<T>;
}

impl<T> IntoOption<T> for Option<T> {
    fn into_option(self) -> Option<T> {
        self
    }
}

impl<T, E: std::fmt::Display> IntoOption<T> for Result<T, E> {
    fn into_option(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("FFI call failed: {}", err);
                None
            }
        }
    }
}

/// Unwraps an `Option` or `Result`, or returns `$or_else()` from the
/// enclosing function.
#[macro_export]
macro_rules! try_or_else {
    ($exp:expr, $or_else:expr) => {
        match $crate::macros::IntoOption::into_option($exp) {
            Some(value) => value,
            None => return $or_else(),
        }
    };
}

#[macro_export]
macro_rules! try_or_false {
    ($exp:expr) => {
        $crate::try_or_else!($exp, || false)
    };
}

#[cfg(test)]
mod tests {
    use crate::Error;

    fn double(input: Option<u32>) -> u32 {
        let value = crate::try_or_else!(input, || 0);
        value * 2
    }

    fn is_valid(input: Result<u32, Error>) -> bool {
        let value = crate::try_or_false!(input);
        value > 0
    }

    #[test]
    fn option_fallback() {
        assert_eq!(double(Some(21)), 42);
        assert_eq!(double(None), 0);
    }

    #[test]
    fn result_fallback() {
        assert!(is_valid(Ok(1)));
        assert!(!is_valid(Ok(0)));
        assert!(!is_valid(Err(Error::NullPointer(1))));
    }
}
