//! Chapter 8: Classes, Methods, and Objects
//!
//! The course's first object: a record with two fields and one behavior
//! that renders them. The driver in `src/bin/creature_demo.rs` builds
//! two independent records and describes each.

pub mod creature;

pub use creature::Creature;
