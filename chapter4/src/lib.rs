//! Chapter 4: Bitwise Operators
//!
//! Operators over the bits of integer operands:
//! - and `&`, or `|`, xor `^`, not `!`
//! - shifts: left, arithmetic right, and logical (unsigned) right

pub mod operators;

pub use operators::*;
