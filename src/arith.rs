//! Integer arithmetic for the calculator kernel.
//!
//! All operands are `i32`. Overflow wraps in two's complement in every
//! build profile, so `add(i32::MAX, 1) == i32::MIN` rather than a panic.

use crate::error::KernelError;

/// `a + b`, wrapping on overflow.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping on overflow.
#[inline]
pub const fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// `a * b`, wrapping on overflow.
#[inline]
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Divide `a` by `b` as floating point.
///
/// Returns [`KernelError::DivisionByZero`] when `b == 0`. The quotient is
/// exact up to `f64` rounding: `divide(15, 4) == Ok(3.75)`.
///
/// # Example
///
/// ```
/// use reckon::{divide, KernelError};
///
/// assert_eq!(divide(5, 2), Ok(2.5));
/// assert_eq!(divide(7, 0), Err(KernelError::DivisionByZero));
/// ```
#[inline]
pub fn divide(a: i32, b: i32) -> Result<f64, KernelError> {
    if b == 0 {
        return Err(KernelError::DivisionByZero);
    }
    Ok(f64::from(a) / f64::from(b))
}

/// Compute `base^exponent` by repeated multiplication.
///
/// `exponent == 0` yields 1 for every base, `0^0` included. The exponent
/// is unsigned, so negative powers cannot be requested. Intermediate
/// products wrap on overflow.
///
/// # Example
///
/// ```
/// use reckon::power;
///
/// assert_eq!(power(2, 3), 8);
/// assert_eq!(power(5, 4), 625);
/// assert_eq!(power(0, 0), 1);
/// ```
pub const fn power(base: i32, exponent: u32) -> i32 {
    if exponent == 0 {
        return 1;
    }

    let mut result: i32 = 1;
    let mut i = 0;
    while i < exponent {
        result = result.wrapping_mul(base);
        i += 1;
    }
    result
}
