//! Chapter 3: Type Casting
//!
//! Numeric conversion in both directions:
//! - Widening (implicit in the original, `From` here)
//! - Narrowing (explicit casts, truncating or checked)

// Modules
pub mod narrowing; // Narrowing: explicit, lossy or checked
pub mod widening; // Widening: lossless conversions

pub use narrowing::{CastError, narrow_checked, truncate};
pub use widening::*;
