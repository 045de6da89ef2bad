//! The instrumentation API an algorithm is written against.
//!
//! [`Recorder`] owns the item buffer for the whole recording phase. Each
//! call mutates the buffer (for swaps) and appends exactly one frame, in
//! lockstep, so by the time the algorithm returns the buffer already
//! holds its final result. [`Recorder::finish`] runs the validator,
//! appends the `Final` frame, and hands both buffer and timeline over as
//! a [`Recording`].

use std::cmp::Ordering;

use sortreel_core::{check_sorted, Frame, ItemBuffer, RecordError};

use crate::timeline::Timeline;

// ── Algorithm ───────────────────────────────────────────────────

/// An in-place algorithm expressed purely through a [`Recorder`].
///
/// Implementations must not assume anything about the buffer beyond
/// what they observe through the recorder.
pub trait Algorithm<T> {
    /// Human-readable name (used in logs).
    fn name(&self) -> &str;

    /// Run to completion against `recorder`.
    fn run(&self, recorder: &mut Recorder<T>) -> Result<(), RecordError>;
}

// ── Recording ───────────────────────────────────────────────────

/// A finished recording: the frozen timeline plus the buffer in its
/// final (post-algorithm) state.
///
/// This is the hand-off between the recording and replay phases. It can
/// only be produced by [`Recorder::finish`], so the buffer is always
/// consistent with the last frame of the timeline.
#[derive(Clone, Debug)]
pub struct Recording<T> {
    timeline: Timeline<T>,
    buffer: ItemBuffer<T>,
}

impl<T> Recording<T> {
    /// The recorded timeline.
    pub fn timeline(&self) -> &Timeline<T> {
        &self.timeline
    }

    /// The buffer as the algorithm left it.
    pub fn buffer(&self) -> &ItemBuffer<T> {
        &self.buffer
    }

    /// Whether the algorithm left the buffer sorted.
    pub fn is_sorted(&self) -> bool {
        self.timeline.verdict().unwrap_or(false)
    }

    /// Split into the timeline and the final-state buffer.
    pub fn into_parts(self) -> (Timeline<T>, ItemBuffer<T>) {
        (self.timeline, self.buffer)
    }
}

// ── Recorder ────────────────────────────────────────────────────

/// Records every operation an algorithm performs on the item buffer.
///
/// # Examples
///
/// ```
/// use sortreel_record::Recorder;
///
/// let mut rec = Recorder::new(vec![5, 3, 8]);
/// if rec.compare(0, 1)?.is_gt() {
///     rec.swap(0, 1)?;
/// }
/// let recording = rec.finish();
/// assert!(recording.is_sorted());
/// assert_eq!(recording.buffer().as_slice(), &[3, 5, 8]);
/// // Initial, Compare, Swap, Final
/// assert_eq!(recording.timeline().len(), 4);
/// # Ok::<(), sortreel_record::RecordError>(())
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    buffer: ItemBuffer<T>,
    timeline: Timeline<T>,
}

impl<T> Recorder<T> {
    /// Start recording over `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            buffer: ItemBuffer::new(items),
            timeline: Timeline::new(),
        }
    }

    /// Number of items being sorted.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Read the item at `index` without recording anything.
    pub fn get(&self, index: usize) -> Result<&T, RecordError> {
        self.buffer.check_index(index)?;
        Ok(&self.buffer[index])
    }

    /// Read-only view of the current buffer state.
    pub fn items(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Timeline recorded so far.
    pub fn timeline(&self) -> &Timeline<T> {
        &self.timeline
    }

    /// Compare the items at `i` and `j` and record a `Compare` frame.
    ///
    /// Returns the natural ordering of `items[i]` relative to `items[j]`.
    /// Never mutates the buffer.
    pub fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, RecordError>
    where
        T: Ord,
    {
        self.buffer.check_index(i)?;
        self.buffer.check_index(j)?;
        let ordering = self.buffer[i].cmp(&self.buffer[j]);
        tracing::trace!(i, j, ?ordering, "compare");
        self.timeline.push(Frame::Compare { left: i, right: j });
        Ok(ordering)
    }

    /// Exchange the items at `i` and `j` and record a `Swap` frame.
    ///
    /// The exchange is visible to every later call.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), RecordError> {
        self.buffer.swap(i, j)?;
        tracing::trace!(i, j, "swap");
        self.timeline.push(Frame::Swap { left: i, right: j });
        Ok(())
    }

    /// Mark `value` under `label`, replacing any active value mark.
    pub fn mark_value(&mut self, value: T, label: impl Into<String>) {
        let label = label.into();
        tracing::trace!(label = %label, "mark value");
        self.timeline.push(Frame::MarkValue { value, label });
    }

    /// Mark positions `lo..hi` under `label`, replacing any active range mark.
    pub fn mark_range(&mut self, lo: usize, hi: usize, label: impl Into<String>) {
        let label = label.into();
        tracing::trace!(lo, hi, label = %label, "mark range");
        self.timeline.push(Frame::MarkRange {
            range: lo..hi,
            label,
        });
    }

    /// Clear the active value mark.
    ///
    /// # Errors
    ///
    /// [`RecordError::NoActiveValueMark`] if no value is marked.
    pub fn unmark_value(&mut self) -> Result<(), RecordError> {
        let label = self
            .timeline
            .current_annotations()
            .value
            .map(|(_, label)| label.to_owned())
            .ok_or(RecordError::NoActiveValueMark)?;
        tracing::trace!(label = %label, "unmark value");
        self.timeline.push(Frame::UnmarkValue { label });
        Ok(())
    }

    /// Clear the active range mark.
    ///
    /// # Errors
    ///
    /// [`RecordError::NoActiveRangeMark`] if no range is marked.
    pub fn unmark_range(&mut self) -> Result<(), RecordError> {
        let label = self
            .timeline
            .current_annotations()
            .range
            .map(|(_, label)| label.to_owned())
            .ok_or(RecordError::NoActiveRangeMark)?;
        tracing::trace!(label = %label, "unmark range");
        self.timeline.push(Frame::UnmarkRange { label });
        Ok(())
    }

    /// End the recording phase.
    ///
    /// Runs the sortedness check once over the final buffer and appends
    /// the `Final` frame carrying its verdict. An unsorted result is
    /// logged as a warning, not returned as an error.
    pub fn finish(mut self) -> Recording<T>
    where
        T: Ord,
    {
        let sorted = check_sorted(self.buffer.as_slice());
        self.timeline.push(Frame::Final { sorted });
        tracing::info!(
            frames = self.timeline.len(),
            items = self.buffer.len(),
            sorted,
            "recording finished"
        );
        if !sorted {
            tracing::warn!("recorded algorithm left the buffer out of order");
        }
        Recording {
            timeline: self.timeline,
            buffer: self.buffer,
        }
    }
}

// ── Entry points ────────────────────────────────────────────────

/// Record `algorithm` running over `items`.
///
/// Runs the closure to completion, then finishes the recording. Any
/// error from the closure aborts the recording and is returned as-is.
///
/// ```
/// use sortreel_record::record;
///
/// let recording = record(vec![2, 1], |rec| {
///     if rec.compare(0, 1)?.is_gt() {
///         rec.swap(0, 1)?;
///     }
///     Ok(())
/// })?;
/// assert_eq!(recording.timeline().verdict(), Some(true));
/// # Ok::<(), sortreel_record::RecordError>(())
/// ```
pub fn record<T, F>(items: Vec<T>, algorithm: F) -> Result<Recording<T>, RecordError>
where
    T: Ord,
    F: FnOnce(&mut Recorder<T>) -> Result<(), RecordError>,
{
    let mut recorder = Recorder::new(items);
    algorithm(&mut recorder)?;
    Ok(recorder.finish())
}

/// Record an [`Algorithm`] implementation running over `items`.
pub fn record_algorithm<T: Ord>(
    items: Vec<T>,
    algorithm: &dyn Algorithm<T>,
) -> Result<Recording<T>, RecordError> {
    let span = tracing::debug_span!("record", algorithm = algorithm.name(), items = items.len());
    let _guard = span.enter();
    let mut recorder = Recorder::new(items);
    algorithm.run(&mut recorder)?;
    Ok(recorder.finish())
}
