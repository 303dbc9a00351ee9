//! 1장: Hello World와 프로그램 인자 (Chapter 1: Hello World and Program Arguments)
//!
//! 첫 프로그램을 다룹니다:
//! - 콘솔에 출력하기 (Printing to the console)
//! - 프로그램 인자 읽기 (Reading program arguments)

pub mod arguments; // 프로그램 인자 (Program arguments)
pub mod hello; // 첫 프로그램 (The first program)

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use hello::*;
