//! The String Pool
//!
//! The original lesson's surprise: two string *literals* with the same
//! text compared identical, because the runtime keeps every literal in a
//! pool and hands out the pooled object on reuse. Rust makes no such
//! promise about literals, so this module builds the pool explicitly: an
//! interner over `Rc<str>`. Interning the same text twice returns
//! pointer-identical handles; text entering the pool is allocated once
//! and shared from then on.

use std::collections::HashSet;
use std::rc::Rc;

/// An interner that stores each distinct string once and hands out
/// shared handles to it.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use basics_chapter5::StringPool;
///
/// let mut pool = StringPool::new();
/// let str5 = pool.intern("Anthony");
/// let str6 = pool.intern("Anthony");
///
/// // The pooled handles are the same allocation.
/// assert!(Rc::ptr_eq(&str5, &str6));
/// ```
#[derive(Debug, Default)]
pub struct StringPool {
    pool: HashSet<Rc<str>>,
}

impl StringPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        StringPool {
            pool: HashSet::new(),
        }
    }

    /// Returns the pooled handle for `text`, allocating it into the pool
    /// on first use.
    pub fn intern(&mut self, text: &str) -> Rc<str> {
        if let Some(existing) = self.pool.get(text) {
            return Rc::clone(existing);
        }
        let handle: Rc<str> = Rc::from(text);
        self.pool.insert(Rc::clone(&handle));
        handle
    }

    /// Whether `text` has been interned already.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.pool.contains(text)
    }

    /// The number of distinct strings in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether the pool holds no strings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning_twice_yields_one_allocation() {
        let mut pool = StringPool::new();
        let first = pool.intern("Anthony");
        let second = pool.intern("Anthony");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_distinct_values_stay_distinct() {
        let mut pool = StringPool::new();
        let mike = pool.intern("Mike");
        let rahul = pool.intern("Rahul");

        assert!(!Rc::ptr_eq(&mike, &rahul));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_contains() {
        let mut pool = StringPool::new();
        assert!(pool.is_empty());
        assert!(!pool.contains("Karthik"));

        pool.intern("Karthik");
        assert!(pool.contains("Karthik"));
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_handle_outlives_reinterning() {
        let mut pool = StringPool::new();
        let first = pool.intern("Karthik");
        for _ in 0..3 {
            let again = pool.intern("Karthik");
            assert!(Rc::ptr_eq(&first, &again));
        }
        assert_eq!(&*first, "Karthik");
    }
}
