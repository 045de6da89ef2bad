//! Append-only frame sequence with hoisted annotation state.
//!
//! Frames store only their own delta. The marked value and marked range
//! in effect at each position are kept in a parallel table of
//! [`MarkSlots`], each slot pointing back at the frame that set the
//! annotation, so labels and values are never copied forward.

use sortreel_core::{Annotations, Frame, FrameView};

/// Back-references to the frames that established the active annotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MarkSlots {
    value: Option<usize>,
    range: Option<usize>,
}

impl MarkSlots {
    /// Slots after `frame` (at `position`) is applied on top of `self`.
    fn after<T>(self, position: usize, frame: &Frame<T>) -> Self {
        match frame {
            Frame::MarkValue { .. } => Self {
                value: Some(position),
                ..self
            },
            Frame::UnmarkValue { .. } => Self {
                value: None,
                ..self
            },
            Frame::MarkRange { .. } => Self {
                range: Some(position),
                ..self
            },
            Frame::UnmarkRange { .. } => Self {
                range: None,
                ..self
            },
            Frame::Final { .. } => Self::default(),
            Frame::Initial | Frame::Compare { .. } | Frame::Swap { .. } => self,
        }
    }
}

/// Per-kind frame counts for a finished timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimelineStats {
    /// Number of `Compare` frames.
    pub compares: usize,
    /// Number of `Swap` frames.
    pub swaps: usize,
    /// Number of `MarkValue` and `MarkRange` frames.
    pub marks: usize,
    /// Number of `UnmarkValue` and `UnmarkRange` frames.
    pub unmarks: usize,
}

/// Ordered sequence of frames produced by one recording pass.
///
/// Always holds at least the `Initial` frame. Only the
/// [`Recorder`](crate::Recorder) appends, and once it has appended the
/// `Final` frame the timeline is handed out read-only.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    frames: Vec<Frame<T>>,
    marks: Vec<MarkSlots>,
}

impl<T> Timeline<T> {
    /// A timeline holding only the `Initial` frame.
    pub(crate) fn new() -> Self {
        Self {
            frames: vec![Frame::Initial],
            marks: vec![MarkSlots::default()],
        }
    }

    /// Append `frame`, carrying annotation state forward.
    pub(crate) fn push(&mut self, frame: Frame<T>) {
        debug_assert!(!self.is_finished(), "frame appended after Final");
        let position = self.frames.len();
        let slots = self.current_slots().after(position, &frame);
        self.frames.push(frame);
        self.marks.push(slots);
    }

    fn current_slots(&self) -> MarkSlots {
        self.marks.last().copied().unwrap_or_default()
    }

    /// Number of frames, including `Initial` (and `Final`, once recorded).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`: a timeline starts with its `Initial` frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Position of the last frame.
    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// Whether the `Final` frame has been appended.
    pub fn is_finished(&self) -> bool {
        self.frames.last().is_some_and(Frame::is_final)
    }

    /// The frame at `position`.
    pub fn get(&self, position: usize) -> Option<&Frame<T>> {
        self.frames.get(position)
    }

    /// The frame at `position` with its annotation state resolved.
    pub fn frame(&self, position: usize) -> Option<FrameView<'_, T>> {
        let frame = self.frames.get(position)?;
        let annotations = self.annotations_at(position)?;
        Some(FrameView::new(position, frame, annotations))
    }

    /// Annotation state in effect at `position`.
    pub fn annotations_at(&self, position: usize) -> Option<Annotations<'_, T>> {
        let slots = self.marks.get(position)?;
        Some(Annotations::resolve(
            slots.value.and_then(|p| self.frames.get(p)),
            slots.range.and_then(|p| self.frames.get(p)),
        ))
    }

    /// Annotation state after the most recent frame.
    pub fn current_annotations(&self) -> Annotations<'_, T> {
        self.annotations_at(self.last_index()).unwrap_or_default()
    }

    /// Iterate over all frames in order.
    pub fn frames(&self) -> std::slice::Iter<'_, Frame<T>> {
        self.frames.iter()
    }

    /// All frames as a slice, indexed by position.
    pub fn as_slice(&self) -> &[Frame<T>] {
        &self.frames
    }

    /// The validator's verdict, once the `Final` frame exists.
    pub fn verdict(&self) -> Option<bool> {
        match self.frames.last() {
            Some(Frame::Final { sorted }) => Some(*sorted),
            _ => None,
        }
    }

    /// Count frames by kind.
    pub fn stats(&self) -> TimelineStats {
        let mut stats = TimelineStats::default();
        for frame in &self.frames {
            match frame {
                Frame::Compare { .. } => stats.compares += 1,
                Frame::Swap { .. } => stats.swaps += 1,
                Frame::MarkValue { .. } | Frame::MarkRange { .. } => stats.marks += 1,
                Frame::UnmarkValue { .. } | Frame::UnmarkRange { .. } => stats.unmarks += 1,
                Frame::Initial | Frame::Final { .. } => {}
            }
        }
        stats
    }
}

impl<'a, T> IntoIterator for &'a Timeline<T> {
    type Item = &'a Frame<T>;
    type IntoIter = std::slice::Iter<'a, Frame<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
