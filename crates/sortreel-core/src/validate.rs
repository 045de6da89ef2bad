//! Sortedness check run once at the end of a recording.

/// Return `true` iff `items` is in non-decreasing order.
///
/// A single forward scan over adjacent pairs. Vacuously true for zero or
/// one item.
///
/// ```
/// use sortreel_core::check_sorted;
///
/// assert!(check_sorted::<u32>(&[]));
/// assert!(check_sorted(&[5]));
/// assert!(!check_sorted(&[3, 1]));
/// assert!(check_sorted(&[1, 2, 3]));
/// ```
pub fn check_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}
