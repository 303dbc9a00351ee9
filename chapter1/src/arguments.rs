//! 프로그램 인자 (Program Arguments)
//!
//! 프로그램 이름 뒤에 오는 모든 것이 인자이며, 인덱스 0부터 시작합니다
//! (Everything after the program name is an argument, starting at index 0).
//!
//! 원래 수업의 코드는 존재하지 않는 인자를 인덱스로 바로 접근해서,
//! 인자가 없으면 프로그램이 비정상 종료했습니다. 여기서는 그 암묵적
//! 관례를 `Option`으로 바꿔 호출자가 부재를 처리하게 합니다
//! (The original lesson indexed missing arguments directly and died when
//! none were given; here that implicit convention becomes an `Option` so
//! the caller handles absence).

use std::env;

/// 인자 목록에서 n번째 사용자 인자를 찾습니다 (Looks up the n-th user
/// argument in an argument list). 첫 항목은 프로그램 이름으로 보고
/// 건너뜁니다 (The first item is taken as the program name and skipped).
///
/// # 예시 (Examples)
/// ```
/// use basics_chapter1::arguments::argument_from;
///
/// let args = ["prog", "alpha", "beta"].map(String::from);
/// assert_eq!(argument_from(args.clone(), 0), Some("alpha".to_string()));
/// assert_eq!(argument_from(args.clone(), 1), Some("beta".to_string()));
/// assert_eq!(argument_from(args, 2), None);
/// ```
pub fn argument_from<I>(args: I, n: usize) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().skip(1).nth(n)
}

/// 현재 프로세스의 n번째 사용자 인자 (The n-th user argument of the
/// current process). 없으면 `None` (or `None` when absent).
#[must_use]
pub fn argument(n: usize) -> Option<String> {
    argument_from(env::args(), n)
}

/// 현재 프로세스의 모든 사용자 인자 (All user arguments of the current
/// process), 프로그램 이름 제외 (program name excluded).
#[must_use]
pub fn arguments() -> Vec<String> {
    env::args().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_args() -> Vec<String> {
        ["prog", "arg0", "arg1"].map(String::from).to_vec()
    }

    #[test]
    fn test_argument_present() {
        assert_eq!(argument_from(fake_args(), 0), Some("arg0".to_string()));
        assert_eq!(argument_from(fake_args(), 1), Some("arg1".to_string()));
    }

    #[test]
    fn test_argument_absent_is_none_not_a_fault() {
        // 원래 수업에서는 바로 비정상 종료하던 경우 (The case that died in
        // the original lesson).
        assert_eq!(argument_from(fake_args(), 2), None);
        assert_eq!(argument_from(vec!["prog".to_string()], 0), None);
    }

    #[test]
    fn test_empty_argument_list() {
        assert_eq!(argument_from(Vec::new(), 0), None);
    }
}
