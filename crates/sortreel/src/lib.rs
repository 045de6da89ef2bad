//! Sortreel: record an in-place algorithm once, replay it anywhere.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Sortreel sub-crates. For most users, adding `sortreel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sortreel::prelude::*;
//!
//! // Record a tiny bubble sort through the instrumentation API.
//! let recording = record(vec![3, 1, 2], |rec| {
//!     let n = rec.len();
//!     for end in (1..n).rev() {
//!         for j in 0..end {
//!             if rec.compare(j, j + 1)?.is_gt() {
//!                 rec.swap(j, j + 1)?;
//!             }
//!         }
//!     }
//!     Ok(())
//! })
//! .unwrap();
//! assert!(recording.is_sorted());
//!
//! // Replay it: the player starts on the final frame.
//! let mut player = Player::new(recording, PlaybackConfig::default()).unwrap();
//! assert_eq!(player.buffer().as_slice(), &[1, 2, 3]);
//!
//! player.seek_start();
//! assert_eq!(player.buffer().as_slice(), &[3, 1, 2]);
//! assert!(player.describe_current().is_none());
//!
//! player.step_forward();
//! assert_eq!(
//!     player.describe_current().as_deref(),
//!     Some("Compare element #0 (3) with element #1 (1)."),
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortreel-core` | Item buffer, frames, annotations, display tags, validator |
//! | [`record`] | `sortreel-record` | Recorder, timeline, recording entry points |
//! | [`playback`] | `sortreel-playback` | Player, playback config, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`sortreel-core`).
///
/// Contains [`types::ItemBuffer`], the closed [`types::Frame`] union,
/// [`types::FrameView`] with its [`types::DisplayTag`] rendering
/// contract, and [`types::check_sorted`].
pub use sortreel_core as types;

/// Instrumented recording (`sortreel-record`).
///
/// Write an algorithm against [`record::Recorder`] and run it with
/// [`record::record`] or [`record::record_algorithm`].
pub use sortreel_record as record;

/// Incremental playback (`sortreel-playback`).
///
/// [`playback::Player`] moves a cursor over a recorded timeline and keeps
/// the item buffer in sync.
pub use sortreel_playback as playback;

/// Common imports for typical Sortreel usage.
///
/// ```rust
/// use sortreel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use sortreel_core::{
        check_sorted, Annotations, DisplayTag, Frame, FrameView, ItemBuffer, RecordError,
    };

    // Recording
    pub use sortreel_record::{record, record_algorithm, Algorithm, Recorder, Recording, Timeline};

    // Playback
    pub use sortreel_playback::{
        ConfigError, PlaybackConfig, PlaybackMetrics, PlaybackMode, Player,
    };
}
