//! 문자와 코드 포인트 (Characters and Code Points)
//!
//! 문자는 숫자 값이기도 합니다 (A character is also a numeric value):
//! `'A'`는 65, `'3'`은 51, `'$'`는 36. 반대 방향도 가능합니다
//! (The other direction works too) — 코드 포인트 10084는 하트(❤)입니다.

/// 문자의 코드 포인트 값 (The code point value of a character).
///
/// # 예시 (Examples)
/// ```
/// use basics_chapter2::characters::code_of;
/// assert_eq!(code_of('A'), 65);
/// ```
#[must_use]
pub fn code_of(ch: char) -> u32 {
    ch as u32
}

/// 코드 포인트의 문자 (The character of a code point). 유효하지 않은
/// 코드 포인트는 `None` (Invalid code points yield `None`).
///
/// 원래 수업의 `(char) 10084` 캐스트는 검사 없이 수행됐지만, 여기서는
/// 서러게이트 같은 비문자 값을 걸러냅니다 (The original's unchecked
/// cast becomes a checked conversion that rejects surrogates and other
/// non-characters).
///
/// # 예시 (Examples)
/// ```
/// use basics_chapter2::characters::char_of;
/// assert_eq!(char_of(10084), Some('❤'));
/// assert_eq!(char_of(0xD800), None); // 서러게이트 (a surrogate)
/// ```
#[must_use]
pub fn char_of(code: u32) -> Option<char> {
    char::from_u32(code)
}

/// 문자 코드 포인트의 전체 범위 (The full range of character code
/// points).
#[must_use]
pub fn char_range() -> (u32, u32) {
    (0, char::MAX as u32)
}
