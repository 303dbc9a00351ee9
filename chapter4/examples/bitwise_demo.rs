//! Chapter 4: Bitwise Operator Walkthrough
//!
//! Reproduces the original lesson's console session on the operands
//! 5 (binary 101) and 4 (binary 100).
//!
//! Run with: cargo run --example bitwise_demo

use basics_chapter4::{and, binary_string, or, shr, unsigned_shr, xor};

fn main() {
    // The binary representation of a number.
    let a = 5;
    println!("{}", binary_string(a)); // 101

    println!("5 & 4: {}", and(5, 4));
    println!("5 | 4: {}", or(5, 4));
    println!("5 ^ 4: {}", xor(5, 4));

    // Right shift moves every bit down one position.
    let shifted = shr(5, 1);
    println!("{}", binary_string(5));
    println!("{}", binary_string(shifted));

    // The logical right shift the original wrote as >>>.
    println!("-8 >>> 1: {}", unsigned_shr(-8, 1));
}
