//! Chapter 5: Working with Strings
//!
//! A string is not a primitive. The lesson here is the difference
//! between two questions the original language answered with `equals`
//! and `==`:
//! - value equality: do two strings hold the same text?
//! - identity: do two strings share one allocation?
//!
//! [`identity`] answers the second question directly;
//! [`pool::StringPool`] rebuilds the original's string pool, where
//! interning equal text twice hands back the *same* allocation.

pub mod identity;
pub mod pool;

pub use identity::same_allocation;
pub use pool::StringPool;
