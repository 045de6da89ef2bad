//! Sticky annotation state and the per-frame rendering contract.
//!
//! Annotations (a marked value and a marked range) persist from frame to
//! frame until explicitly cleared. The timeline stores them once, on the
//! `MarkValue`/`MarkRange` frame that set them, and every later frame
//! refers back to that source. [`Annotations`] is the resolved view.

use std::fmt;
use std::ops::Range;

use crate::frame::Frame;

// ── DisplayTag ──────────────────────────────────────────────────

/// Highlight category a renderer uses to pick a colour for one item.
///
/// Variants are listed in increasing precedence; see
/// [`FrameView::display_tag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisplayTag {
    /// No highlight.
    Plain,
    /// Inside the active marked range.
    InRange,
    /// Equal to the active marked value.
    MarkedValue,
    /// Operand of the current `Compare` frame.
    Compared,
    /// Operand of the current `Swap` frame.
    Swapped,
    /// Final frame, buffer verified sorted.
    Sorted,
    /// Final frame, buffer found out of order.
    Unsorted,
}

// ── Annotations ─────────────────────────────────────────────────

/// Annotation state in effect at one timeline position.
#[derive(Debug, PartialEq, Eq)]
pub struct Annotations<'a, T> {
    /// The marked value and its label.
    pub value: Option<(&'a T, &'a str)>,
    /// The marked half-open range and its label.
    pub range: Option<(&'a Range<usize>, &'a str)>,
}

impl<T> Clone for Annotations<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Annotations<'_, T> {}

impl<T> Default for Annotations<'_, T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<'a, T> Annotations<'a, T> {
    /// No active annotations.
    pub fn none() -> Self {
        Self {
            value: None,
            range: None,
        }
    }

    /// Resolve annotations from the frames that established them.
    ///
    /// `value_source` must be a `MarkValue` frame and `range_source` a
    /// `MarkRange` frame; any other kind resolves to no annotation.
    pub fn resolve(value_source: Option<&'a Frame<T>>, range_source: Option<&'a Frame<T>>) -> Self {
        let value = match value_source {
            Some(Frame::MarkValue { value, label }) => Some((value, label.as_str())),
            _ => None,
        };
        let range = match range_source {
            Some(Frame::MarkRange { range, label }) => Some((range, label.as_str())),
            _ => None,
        };
        Self { value, range }
    }

    /// Whether `index` lies inside the marked range.
    pub fn in_range(&self, index: usize) -> bool {
        self.range.is_some_and(|(r, _)| r.contains(&index))
    }
}

// ── FrameView ───────────────────────────────────────────────────

/// A frame together with the annotation state in effect at its position.
///
/// This is what a renderer consumes. Both [`describe`](Self::describe)
/// and [`display_tag`](Self::display_tag) are pure functions of the view
/// and their arguments.
#[derive(Debug)]
pub struct FrameView<'a, T> {
    position: usize,
    frame: &'a Frame<T>,
    annotations: Annotations<'a, T>,
}

impl<T> Clone for FrameView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FrameView<'_, T> {}

impl<'a, T> FrameView<'a, T> {
    /// Bundle a frame with its resolved annotations.
    pub fn new(position: usize, frame: &'a Frame<T>, annotations: Annotations<'a, T>) -> Self {
        Self {
            position,
            frame,
            annotations,
        }
    }

    /// Timeline position of this frame.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The underlying frame.
    pub fn frame(&self) -> &'a Frame<T> {
        self.frame
    }

    /// Annotation state at this position.
    pub fn annotations(&self) -> Annotations<'a, T> {
        self.annotations
    }

    /// The marked value and label, if any.
    pub fn marked_value(&self) -> Option<(&'a T, &'a str)> {
        self.annotations.value
    }

    /// The marked range and label, if any.
    pub fn marked_range(&self) -> Option<(&'a Range<usize>, &'a str)> {
        self.annotations.range
    }

    /// Highlight category for the item `value` at `index`.
    ///
    /// Precedence, highest first: the final verdict, the frame's own
    /// operands, the marked value, the marked range, plain.
    pub fn display_tag(&self, index: usize, value: &T) -> DisplayTag
    where
        T: PartialEq,
    {
        if let Some(tag) = self.frame.highlight(index) {
            return tag;
        }
        if self.annotations.value.is_some_and(|(v, _)| v == value) {
            return DisplayTag::MarkedValue;
        }
        if self.annotations.in_range(index) {
            return DisplayTag::InRange;
        }
        DisplayTag::Plain
    }

    /// Narration for this frame; see [`Frame::describe`].
    pub fn describe(&self, buffer: &[T]) -> Option<String>
    where
        T: fmt::Display,
    {
        self.frame.describe(buffer)
    }
}
