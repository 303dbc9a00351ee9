//! Narrowing Conversions
//!
//! Going the other way loses data — `3.14` narrowed to an integer drops
//! the `.14` — so the original language refused to do it implicitly and
//! demanded a cast. Rust's `as` is that cast: it truncates toward zero
//! and saturates out-of-range values. [`narrow_checked`] is the stricter
//! alternative that reports the loss instead of performing it.

use thiserror::Error;

/// Why a checked narrowing conversion was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CastError {
    /// The value carries a fractional part that truncation would drop.
    #[error("value {0} has a fractional part that narrowing would drop")]
    FractionalLoss(f64),

    /// The value does not fit in the target type at all.
    #[error("value {0} is out of range for the target type")]
    OutOfRange(f64),
}

/// Truncating narrowing cast, the original's `(int) f`: drops the
/// fractional part, keeping the integral part toward zero.
///
/// # Example
///
/// ```
/// use basics_chapter3::truncate;
/// assert_eq!(truncate(3.14), 3);
/// assert_eq!(truncate(-3.14), -3);
/// ```
#[must_use]
pub fn truncate(f: f64) -> i64 {
    f as i64
}

/// Checked narrowing: succeeds only when no data is lost.
///
/// # Example
///
/// ```
/// use basics_chapter3::{CastError, narrow_checked};
///
/// assert_eq!(narrow_checked(3.0), Ok(3));
/// assert_eq!(narrow_checked(3.14), Err(CastError::FractionalLoss(3.14)));
/// ```
pub fn narrow_checked(f: f64) -> Result<i64, CastError> {
    // -2^63 is exact in f64; the upper comparison is strict because
    // 2^63 itself rounds out of range.
    if !f.is_finite() || f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(CastError::OutOfRange(f));
    }
    if f.fract() != 0.0 {
        return Err(CastError::FractionalLoss(f));
    }
    Ok(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_lesson_values() {
        // The original walkthrough: f = 3.14, g = (int) f, h = (long) f.
        let f = 3.14;
        assert_eq!(truncate(f), 3);
    }

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(truncate(-3.99), -3);
        assert_eq!(truncate(0.99), 0);
    }

    #[test]
    fn test_checked_accepts_whole_values() {
        assert_eq!(narrow_checked(3.0), Ok(3));
        assert_eq!(narrow_checked(-42.0), Ok(-42));
        assert_eq!(narrow_checked(0.0), Ok(0));
    }

    #[test]
    fn test_checked_reports_fractional_loss() {
        assert_eq!(narrow_checked(3.14), Err(CastError::FractionalLoss(3.14)));
    }

    #[test]
    fn test_checked_reports_out_of_range() {
        assert_eq!(narrow_checked(1e300), Err(CastError::OutOfRange(1e300)));
        assert_eq!(
            narrow_checked(f64::INFINITY),
            Err(CastError::OutOfRange(f64::INFINITY))
        );
        assert!(matches!(
            narrow_checked(f64::NAN),
            Err(CastError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = CastError::FractionalLoss(3.14);
        assert_eq!(
            err.to_string(),
            "value 3.14 has a fractional part that narrowing would drop"
        );
    }
}
