//! 2장: 원시 데이터 타입 (Chapter 2: Primitive Data Types)
//!
//! 타입과 그 표현 범위를 다룹니다:
//! - 정수 타입과 범위 (Integral types and their ranges)
//! - 부동소수점 타입 (Floating-point types)
//! - 문자와 코드 포인트 (Characters and code points)

pub mod characters; // 문자와 코드 포인트 (Characters and Code Points)
pub mod decimal; // 부동소수점 타입 (Floating-Point Types)
pub mod integral; // 정수 타입 (Integral Types)

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use integral::*;
