//! Core types for the Sortreel record/replay framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by the recorder and the player: the item buffer
//! being sorted, the closed set of frame kinds, annotation state,
//! renderer display tags, the sortedness validator, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod annotation;
pub mod buffer;
pub mod error;
pub mod frame;
pub mod validate;

pub use annotation::{Annotations, DisplayTag, FrameView};
pub use buffer::ItemBuffer;
pub use error::RecordError;
pub use frame::Frame;
pub use validate::check_sorted;
