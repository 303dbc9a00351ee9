//! Chapter 8 demo: classes, methods, and objects.
//!
//! Two independently owned records, each described under its own name —
//! the original course's first object-oriented program.
//!
//! Run with: cargo run --bin creature_demo

use basics_chapter8::Creature;

fn main() {
    let jumbo = Creature::new(2, "Brown");
    jumbo.describe("Jumbo");

    let buzo = Creature::new(2, "Black");
    buzo.describe("Buzo");
}
