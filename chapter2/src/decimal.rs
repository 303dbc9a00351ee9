//! 부동소수점 타입 (Floating-Point Types)
//!
//! 32비트 `f32`와 64비트 `f64` (32-bit `f32` and 64-bit `f64`).
//!
//! 원래 수업의 핵심: 접미사 없는 소수 리터럴은 더 넓은 타입이 기본이며,
//! 좁은 타입에는 명시적으로 표시해야 합니다 (The original lesson's
//! point: an unsuffixed decimal literal defaults to the wider type, and
//! the narrower one must be marked explicitly). 러스트에서는 `3.14`가
//! `f64`이고 `3.14f32`라고 써야 `f32`입니다 (In Rust `3.14` is `f64`
//! and only `3.14f32` is an `f32`).

/// `f32`의 유한 범위 (The finite range of `f32`).
#[must_use]
pub fn float_range() -> (f32, f32) {
    (f32::MIN, f32::MAX)
}

/// `f64`의 유한 범위 (The finite range of `f64`).
#[must_use]
pub fn double_range() -> (f64, f64) {
    (f64::MIN, f64::MAX)
}

/// 타입이 보장하는 유효 십진 자릿수 (The significant decimal digits each
/// type guarantees): `f32`는 6, `f64`는 15.
///
/// # 예시 (Examples)
/// ```
/// use basics_chapter2::decimal::significant_digits;
/// assert_eq!(significant_digits(), (6, 15));
/// ```
#[must_use]
pub fn significant_digits() -> (u32, u32) {
    (f32::DIGITS, f64::DIGITS)
}
