//! 정수 타입 (Integral Types)
//!
//! 원래 수업은 8/16/32/64비트 정수 타입마다 최소값과 최대값을
//! 출력했습니다 (The original lesson printed the minimum and maximum of
//! each 8/16/32/64-bit integer type). 여기서는 그 범위를 값으로
//! 표현하고, 출력 형식은 `Display`에 둡니다 (Here the range is a value
//! and the print format lives in `Display`).

use std::fmt;

// =============================================================================
// 타입 범위 (Type Ranges)
// =============================================================================

/// 타입 이름과 그 최소/최대값 (A type name with its minimum and maximum).
///
/// 모든 정수 타입의 범위가 들어가도록 `i128`로 담습니다 (Held as `i128`
/// so every integral range fits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRange {
    name: &'static str,
    min: i128,
    max: i128,
}

impl TypeRange {
    /// 새로운 타입 범위를 생성합니다 (Creates a new type range).
    #[must_use]
    pub fn new(name: &'static str, min: i128, max: i128) -> Self {
        TypeRange { name, min, max }
    }

    /// 타입 이름을 반환합니다 (Returns the type name).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 최소값을 반환합니다 (Returns the minimum value).
    #[must_use]
    pub fn min(&self) -> i128 {
        self.min
    }

    /// 최대값을 반환합니다 (Returns the maximum value).
    #[must_use]
    pub fn max(&self) -> i128 {
        self.max
    }
}

impl fmt::Display for TypeRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // 원래 수업의 출력 형식 그대로 (The original lesson's format):
        // `i8: -128   127`
        write!(f, "{}: {}   {}", self.name, self.min, self.max)
    }
}

/// 8비트부터 64비트까지의 부호 있는 정수 범위 (Signed integer ranges
/// from 8 to 64 bits), 좁은 타입부터 (narrowest first).
///
/// # 예시 (Examples)
/// ```
/// use basics_chapter2::integral_ranges;
///
/// let ranges = integral_ranges();
/// assert_eq!(ranges[0].to_string(), "i8: -128   127");
/// ```
#[must_use]
pub fn integral_ranges() -> Vec<TypeRange> {
    vec![
        TypeRange::new("i8", i128::from(i8::MIN), i128::from(i8::MAX)),
        TypeRange::new("i16", i128::from(i16::MIN), i128::from(i16::MAX)),
        TypeRange::new("i32", i128::from(i32::MIN), i128::from(i32::MAX)),
        TypeRange::new("i64", i128::from(i64::MIN), i128::from(i64::MAX)),
    ]
}

// =============================================================================
// 테스트 (Tests)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_narrowest_first() {
        let ranges = integral_ranges();
        let names: Vec<&str> = ranges.iter().map(TypeRange::name).collect();
        assert_eq!(names, ["i8", "i16", "i32", "i64"]);

        // 좁은 타입의 범위는 넓은 타입 안에 들어간다 (Each narrower range
        // nests inside the wider one).
        for pair in ranges.windows(2) {
            assert!(pair[0].min() > pair[1].min());
            assert!(pair[0].max() < pair[1].max());
        }
    }

    #[test]
    fn test_exact_bounds() {
        let ranges = integral_ranges();
        assert_eq!(ranges[0].min(), -128);
        assert_eq!(ranges[0].max(), 127);
        assert_eq!(ranges[2].min(), -2_147_483_648);
        assert_eq!(ranges[2].max(), 2_147_483_647);
    }

    #[test]
    fn test_display_format() {
        let range = TypeRange::new("i16", i128::from(i16::MIN), i128::from(i16::MAX));
        assert_eq!(range.to_string(), "i16: -32768   32767");
    }
}
