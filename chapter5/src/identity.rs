//! String Identity vs Value Equality
//!
//! In the original lesson, two `new String("Karthik")` objects compared
//! unequal with `==` because each got its own heap allocation, even
//! though their values matched. Rust's `==` on strings always compares
//! values; asking about the allocation takes an explicit pointer
//! comparison, which is what [`same_allocation`] does.

/// Whether two string slices view the very same bytes in memory.
///
/// This is the original's reference `==`: true only when both slices
/// start at the same address and have the same length. Two separately
/// built `String`s never satisfy it, equal or not.
///
/// # Example
///
/// ```
/// use basics_chapter5::same_allocation;
///
/// let first = String::from("Karthik");
/// let second = String::from("Karthik");
///
/// assert_eq!(first, second); // same value
/// assert!(!same_allocation(&first, &second)); // different allocations
/// assert!(same_allocation(&first, &first));
/// ```
#[must_use]
pub fn same_allocation(a: &str, b: &str) -> bool {
    std::ptr::eq(a.as_ptr(), b.as_ptr()) && a.len() == b.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values_distinct_allocations() {
        let str3 = String::from("Karthik");
        let str4 = String::from("Karthik");

        assert_eq!(str3, str4);
        assert!(!same_allocation(&str3, &str4));
    }

    #[test]
    fn test_a_slice_is_identical_to_itself() {
        let s = String::from("Anthony");
        assert!(same_allocation(&s, &s));
        assert!(same_allocation(&s[..], &s[..]));
    }

    #[test]
    fn test_subslices_at_different_offsets() {
        let s = String::from("aa");
        // Same value, same backing buffer, different start.
        assert_eq!(&s[0..1], &s[1..2]);
        assert!(!same_allocation(&s[0..1], &s[1..2]));
    }
}
