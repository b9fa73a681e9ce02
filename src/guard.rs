//! Argument guards
//!
//! Each check fails immediately with an [`Error`] naming the offending argument.

use crate::Error;

/// Ensure `n` is not zero.
#[inline]
pub fn non_zero(n: i64, name: &'static str) -> Result<(), Error> {
    if n == 0 {
        return Err(Error::OutOfRange { name });
    }
    Ok(())
}

/// Ensure `n` is not negative.
#[inline]
pub fn non_negative(n: i64, name: &'static str) -> Result<(), Error> {
    greater_than_or_equal(n, 0, name)
}

/// Ensure `n` is strictly positive.
#[inline]
pub fn positive_non_zero(n: i64, name: &'static str) -> Result<(), Error> {
    greater_than(n, 0, name)
}

#[inline]
pub fn greater_than(n: i64, limit: i64, name: &'static str) -> Result<(), Error> {
    if n <= limit {
        return Err(Error::OutOfRange { name });
    }
    Ok(())
}

#[inline]
pub fn greater_than_or_equal(n: i64, limit: i64, name: &'static str) -> Result<(), Error> {
    if n < limit {
        return Err(Error::OutOfRange { name });
    }
    Ok(())
}

#[inline]
pub fn less_than(n: i64, limit: i64, name: &'static str) -> Result<(), Error> {
    if n >= limit {
        return Err(Error::OutOfRange { name });
    }
    Ok(())
}

#[inline]
pub fn less_than_or_equal(n: i64, limit: i64, name: &'static str) -> Result<(), Error> {
    if n > limit {
        return Err(Error::OutOfRange { name });
    }
    Ok(())
}

/// Ensure `value` is present, returning it unwrapped.
#[inline]
pub fn not_null<T>(value: Option<T>, name: &'static str) -> Result<T, Error> {
    value.ok_or(Error::Null { name })
}

/// Ensure `s` is present and not empty.
#[inline]
pub fn not_null_or_empty<'a>(s: Option<&'a str>, name: &'static str) -> Result<&'a str, Error> {
    match s {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(Error::Null { name }),
    }
}

/// Ensure `s` is present and contains something other than white space.
#[inline]
pub fn not_null_or_white_space<'a>(
    s: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, Error> {
    match s {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(Error::Null { name }),
    }
}
