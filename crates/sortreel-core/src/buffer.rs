//! The fixed-length sequence an algorithm sorts.

use std::ops::Index;

use crate::error::RecordError;

/// A fixed-length sequence of totally ordered items.
///
/// The only mutation is exchanging two positions, so the length never
/// changes after construction. During recording the buffer is owned by
/// the recorder; during replay it is owned by the player. Ownership is
/// moved between the two phases, never shared.
///
/// # Examples
///
/// ```
/// use sortreel_core::ItemBuffer;
///
/// let mut buf = ItemBuffer::new(vec![5, 3, 8]);
/// buf.swap(0, 1).unwrap();
/// assert_eq!(buf.as_slice(), &[3, 5, 8]);
/// assert!(buf.swap(0, 3).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemBuffer<T> {
    items: Vec<T>,
}

impl<T> ItemBuffer<T> {
    /// Wrap `items` as a buffer. The length is fixed from here on.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Read-only view of all items in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Check that `index` addresses an item.
    pub fn check_index(&self, index: usize) -> Result<(), RecordError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(RecordError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Exchange the items at `i` and `j`.
    ///
    /// Both indices are checked before anything moves, so a failed call
    /// leaves the buffer untouched.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), RecordError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.items.swap(i, j);
        Ok(())
    }

    /// Exchange two positions already known to be in range.
    ///
    /// Used when replaying recorded swaps, whose indices were validated
    /// against this same buffer at recording time.
    pub(crate) fn exchange(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    /// Consume the buffer and return the underlying items.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for ItemBuffer<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> AsRef<[T]> for ItemBuffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for ItemBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a ItemBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
