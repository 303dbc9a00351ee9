//! 첫 프로그램 (The First Program)
//!
//! 모든 언어 입문은 같은 곳에서 시작합니다: 콘솔에 한 줄을 출력하는 것.
//! (Every language introduction starts in the same place: printing one
//! line to the console.)

/// 전통적인 인사말을 반환합니다 (Returns the traditional greeting).
///
/// # 예시 (Examples)
/// ```
/// use basics_chapter1::greeting;
/// assert_eq!(greeting(), "Hello world!");
/// ```
#[must_use]
pub fn greeting() -> &'static str {
    "Hello world!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(), "Hello world!");
    }
}
