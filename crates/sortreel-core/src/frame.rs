//! Recorded events.
//!
//! A [`Frame`] is one immutable event on the timeline. Frames carry only
//! their own delta; the sticky annotation state that each frame inherits
//! from its predecessor is tracked by the timeline and resolved through
//! a [`FrameView`](crate::FrameView).

use std::fmt;
use std::ops::Range;

use smallvec::{smallvec, SmallVec};

use crate::annotation::DisplayTag;
use crate::buffer::ItemBuffer;

/// One recorded event.
///
/// The set of kinds is closed: every consumer matches exhaustively, so a
/// new kind cannot be added without every call site handling it.
///
/// Only [`Frame::Swap`] changes the buffer, and its delta is its own
/// inverse, so [`apply`](Frame::apply) and [`undo`](Frame::undo) perform
/// the same exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame<T> {
    /// Root of every timeline. Carries no payload.
    Initial,
    /// The algorithm compared two positions.
    Compare {
        /// Left-hand index.
        left: usize,
        /// Right-hand index.
        right: usize,
    },
    /// The algorithm exchanged two positions.
    Swap {
        /// First index.
        left: usize,
        /// Second index.
        right: usize,
    },
    /// A value was marked, replacing any previous value mark.
    MarkValue {
        /// The marked value.
        value: T,
        /// Caller-supplied name for the mark (e.g. `"pivot"`).
        label: String,
    },
    /// The active value mark was cleared.
    UnmarkValue {
        /// Label of the mark that was cleared.
        label: String,
    },
    /// A half-open index range was marked, replacing any previous range mark.
    MarkRange {
        /// Marked positions, `start..end`.
        range: Range<usize>,
        /// Caller-supplied name for the mark (e.g. `"unsorted"`).
        label: String,
    },
    /// The active range mark was cleared.
    UnmarkRange {
        /// Label of the mark that was cleared.
        label: String,
    },
    /// Terminal frame holding the validator's verdict. Clears both marks.
    Final {
        /// Whether the buffer was fully ordered when recording ended.
        sorted: bool,
    },
}

impl<T> Frame<T> {
    /// Short lowercase name of the frame kind, for logs and UIs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Compare { .. } => "compare",
            Self::Swap { .. } => "swap",
            Self::MarkValue { .. } => "mark_value",
            Self::UnmarkValue { .. } => "unmark_value",
            Self::MarkRange { .. } => "mark_range",
            Self::UnmarkRange { .. } => "unmark_range",
            Self::Final { .. } => "final",
        }
    }

    /// Whether this is the terminal frame.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final { .. })
    }

    /// Whether replaying this frame changes the buffer.
    pub fn mutates(&self) -> bool {
        matches!(self, Self::Swap { .. })
    }

    /// Indices this frame involves directly (compare and swap operands).
    pub fn touched(&self) -> SmallVec<[usize; 2]> {
        match *self {
            Self::Compare { left, right } | Self::Swap { left, right } => smallvec![left, right],
            Self::Initial
            | Self::MarkValue { .. }
            | Self::UnmarkValue { .. }
            | Self::MarkRange { .. }
            | Self::UnmarkRange { .. }
            | Self::Final { .. } => SmallVec::new(),
        }
    }

    /// Replay this frame's delta onto `buffer`.
    pub fn apply(&self, buffer: &mut ItemBuffer<T>) {
        if let Self::Swap { left, right } = *self {
            buffer.exchange(left, right);
        }
    }

    /// Reverse this frame's delta on `buffer`.
    ///
    /// Identical to [`apply`](Self::apply): a swap is self-inverse and
    /// every other kind is a no-op.
    pub fn undo(&self, buffer: &mut ItemBuffer<T>) {
        self.apply(buffer);
    }

    /// Highlight owned by this frame kind at `index`, if any.
    ///
    /// `Final` claims every index; `Compare` and `Swap` claim their two
    /// operands. Annotation highlights are resolved by
    /// [`FrameView::display_tag`](crate::FrameView::display_tag), which
    /// lets this take precedence.
    pub fn highlight(&self, index: usize) -> Option<DisplayTag> {
        match *self {
            Self::Final { sorted: true } => Some(DisplayTag::Sorted),
            Self::Final { sorted: false } => Some(DisplayTag::Unsorted),
            Self::Compare { left, right } if index == left || index == right => {
                Some(DisplayTag::Compared)
            }
            Self::Swap { left, right } if index == left || index == right => {
                Some(DisplayTag::Swapped)
            }
            _ => None,
        }
    }
}

impl<T: fmt::Display> Frame<T> {
    /// Human-readable narration of this event.
    ///
    /// `buffer` is the item state *at* this frame, i.e. after its delta
    /// has been applied. `Initial` has nothing to say and returns `None`.
    pub fn describe(&self, buffer: &[T]) -> Option<String> {
        match self {
            Self::Initial => None,
            Self::Compare { left, right } => Some(format!(
                "Compare element #{left} ({}) with element #{right} ({}).",
                Item(buffer, *left),
                Item(buffer, *right),
            )),
            // The buffer already holds the exchanged values, so the
            // pre-swap value of each side now sits at the other index.
            Self::Swap { left, right } => Some(format!(
                "Swap element #{left} ({}) with element #{right} ({}).",
                Item(buffer, *right),
                Item(buffer, *left),
            )),
            Self::MarkValue { value, label } => Some(format!("Mark the value {value} as {label}.")),
            Self::UnmarkValue { label } => Some(format!("Clear the {label} value mark.")),
            Self::MarkRange { range, label } => Some(format!(
                "Mark elements #{} to #{} as {label}.",
                range.start,
                range.end.saturating_sub(1),
            )),
            Self::UnmarkRange { label } => Some(format!("Clear the {label} range mark.")),
            Self::Final { sorted: true } => Some("The array is sorted.".to_string()),
            Self::Final { sorted: false } => Some(
                "The array is NOT sorted: the algorithm left items out of order.".to_string(),
            ),
        }
    }
}

/// Formats `buffer[index]`, or `?` if the index is out of range.
struct Item<'a, T>(&'a [T], usize);

impl<T: fmt::Display> fmt::Display for Item<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get(self.1) {
            Some(v) => v.fmt(f),
            None => f.write_str("?"),
        }
    }
}
