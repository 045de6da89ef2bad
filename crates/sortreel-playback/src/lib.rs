//! Bidirectional playback for recorded Sortreel timelines.
//!
//! Provides [`Player`], which owns a finished recording and reconstructs
//! the item buffer at any requested timeline position by incrementally
//! applying or undoing frame deltas, plus a small play/pause state
//! machine driven by the host loop through [`Player::advance`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod player;

pub use config::{ConfigError, PlaybackConfig};
pub use metrics::PlaybackMetrics;
pub use player::{PlaybackMode, Player};
