//! Error types for the instrumentation API.
//!
//! Every variant is a caller bug in the algorithm under recording. They
//! are propagated immediately and never retried. An unsorted result is
//! not an error; it is carried as the verdict of the final frame.

use thiserror::Error;

/// Errors returned by fallible recorder calls.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    /// `compare`, `swap` or `get` was called with an index outside `[0, len)`.
    #[error("index {index} out of bounds for buffer of length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the item buffer.
        len: usize,
    },
    /// `unmark_value` was called while no value was marked.
    #[error("no marked value to clear")]
    NoActiveValueMark,
    /// `unmark_range` was called while no range was marked.
    #[error("no marked range to clear")]
    NoActiveRangeMark,
}
