//! Widening Conversions
//!
//! The original lesson assigned an `int` to a `long` and a `float` and
//! let the language convert implicitly, "because there is no loss of
//! data". Rust never converts implicitly, but it draws the same line:
//! `From` exists exactly for the conversions that cannot lose anything.
//! Notably `i32 -> f32` is *not* one of them (an `f32` cannot represent
//! every 32-bit integer), so the wider `f64` stands in for the lesson.

/// Widens a 32-bit integer to 64 bits. Every `i32` value fits.
///
/// # Example
///
/// ```
/// use basics_chapter3::int_to_long;
/// assert_eq!(int_to_long(10), 10i64);
/// ```
#[must_use]
pub fn int_to_long(n: i32) -> i64 {
    i64::from(n)
}

/// Widens a 32-bit integer to a 64-bit float. Every `i32` value is
/// exactly representable in an `f64`.
#[must_use]
pub fn int_to_double(n: i32) -> f64 {
    f64::from(n)
}

/// Widens an 8-bit integer to 32 bits.
#[must_use]
pub fn byte_to_int(n: i8) -> i32 {
    i32::from(n)
}
