//! Instrumented recording for Sortreel.
//!
//! An algorithm runs against a [`Recorder`], whose compare/swap/mark
//! calls act on the item buffer and append one immutable frame each to a
//! [`Timeline`]. When the algorithm returns, the recorder checks the
//! result once and seals the timeline with a `Final` frame.
//!
//! # Architecture
//!
//! - [`Recorder`] is the only writer of a [`Timeline`]
//! - [`record`] / [`record_algorithm`] run an algorithm and return a [`Recording`]
//! - [`Recording`] moves buffer and timeline into the replay phase together
//!
//! Annotation state is not copied onto each frame. The timeline keeps a
//! compact table of back-references to the frames that set the active
//! marks, and resolves them on demand through
//! [`FrameView`](sortreel_core::FrameView).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod recorder;
pub mod timeline;

pub use recorder::{record, record_algorithm, Algorithm, Recorder, Recording};
pub use sortreel_core::RecordError;
pub use timeline::{Timeline, TimelineStats};
