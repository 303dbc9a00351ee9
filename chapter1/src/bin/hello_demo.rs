//! 1장 데모: Hello World (Chapter 1 demo: Hello World)
//!
//! 실행 방법: cargo run --bin hello_demo -- arg0 arg1

use basics_chapter1::arguments::arguments;
use basics_chapter1::greeting;

fn main() {
    println!("{}", greeting());

    // 주어진 인자를 순서대로 출력한다 (Echo the given arguments in order).
    for arg in arguments() {
        println!("{arg}");
    }
}
