//! The Creature Record
//!
//! The original class declared both fields unset and trusted every
//! caller to assign them before calling `details` — an invariant held
//! only by convention. Here the constructor takes both values up front,
//! so a `Creature` that exists is a `Creature` that is fully described.

use std::io::{self, Write};

/// A creature with an eye count and a color.
///
/// # Example
///
/// ```
/// use basics_chapter8::Creature;
///
/// let jumbo = Creature::new(2, "Brown");
/// assert_eq!(
///     jumbo.description("Jumbo"),
///     "-------Details of Jumbo-------\nEyes : 2\nColor : Brown"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    eye_count: u32,
    color: String,
}

impl Creature {
    /// Creates a creature with both fields set.
    #[must_use]
    pub fn new(eye_count: u32, color: impl Into<String>) -> Self {
        Creature {
            eye_count,
            color: color.into(),
        }
    }

    /// Returns the number of eyes.
    #[must_use]
    pub fn eye_count(&self) -> u32 {
        self.eye_count
    }

    /// Returns the color label.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Renders the three detail lines under the caller-supplied name,
    /// without a trailing newline.
    ///
    /// An empty `name` simply renders an empty slot in the header; no
    /// field value can make this fail.
    #[must_use]
    pub fn description(&self, name: &str) -> String {
        format!(
            "-------Details of {name}-------\nEyes : {}\nColor : {}",
            self.eye_count, self.color
        )
    }

    /// Writes the detail lines to `out`, one per line.
    pub fn describe_into<W: Write>(&self, name: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.description(name))
    }

    /// Prints the detail lines to standard output.
    pub fn describe(&self, name: &str) {
        println!("{}", self.description(name));
    }
}
