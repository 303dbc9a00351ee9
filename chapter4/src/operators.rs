//! Bitwise Operators
//!
//! These operators work on integer operands only; there is no bitwise
//! arithmetic on floating-point values. The original lesson started by
//! printing the binary representation of a number, then walked through
//! each operator on the operands 5 and 4.
//!
//! Two renamings against the original language: complement is `!` here
//! rather than `~`, and the logical right shift `>>>` has no operator of
//! its own — shifting an unsigned reinterpretation achieves it, which is
//! what [`unsigned_shr`] does.

/// The binary representation of a number, without leading zeros.
///
/// Negative values render as their full 32-bit two's complement, exactly
/// like the original's `toBinaryString`.
///
/// # Example
///
/// ```
/// use basics_chapter4::binary_string;
/// assert_eq!(binary_string(5), "101");
/// ```
#[must_use]
pub fn binary_string(n: i32) -> String {
    format!("{n:b}")
}

/// Bitwise AND: a bit is set only where both operands have it set.
#[must_use]
pub fn and(a: i32, b: i32) -> i32 {
    a & b
}

/// Bitwise OR: a bit is set where either operand has it set.
#[must_use]
pub fn or(a: i32, b: i32) -> i32 {
    a | b
}

/// Bitwise XOR: a bit is set where exactly one operand has it set.
#[must_use]
pub fn xor(a: i32, b: i32) -> i32 {
    a ^ b
}

/// Bitwise complement: every bit flipped. `not(5)` is `-6`.
#[must_use]
pub fn not(n: i32) -> i32 {
    !n
}

/// Left shift: each position doubles the value (bits fall off the top).
///
/// The count is masked to the operand width, so `k` and `k % 32` shift
/// the same, exactly as the original operators behave.
#[must_use]
pub fn shl(n: i32, k: u32) -> i32 {
    n.wrapping_shl(k)
}

/// Arithmetic right shift: keeps the sign bit, so negative stays
/// negative. The count is masked to the operand width.
#[must_use]
pub fn shr(n: i32, k: u32) -> i32 {
    n.wrapping_shr(k)
}

/// Logical right shift, the original's `>>>`: shifts zeros in from the
/// top regardless of sign. The count is masked to the operand width.
///
/// # Example
///
/// ```
/// use basics_chapter4::unsigned_shr;
///
/// assert_eq!(unsigned_shr(-8, 1), 2_147_483_644);
/// assert_eq!(unsigned_shr(8, 1), 4);
/// ```
#[must_use]
pub fn unsigned_shr(n: i32, k: u32) -> i32 {
    (n as u32).wrapping_shr(k) as i32
}
