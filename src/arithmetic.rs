//! The four binary operations over `i32`.
//!
//! Integer results wrap on overflow in every build profile.

use log::warn;

use crate::error::Error;
use crate::Result;

/// Sum of `a` and `b`.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Difference of `a` and `b`.
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Product of `a` and `b`.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Divides `a` by `b` without truncation.
///
/// Fails with [`Error::DivisionByZero`] when `b` is zero.
pub fn divide(a: i32, b: i32) -> Result<f64> {
    if b == 0 {
        warn!("Rejected division of {} by zero", a);
        return Err(Error::DivisionByZero);
    }

    Ok(f64::from(a) / f64::from(b))
}
