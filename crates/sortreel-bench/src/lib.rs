//! Benchmark profiles and utilities for the Sortreel framework.
//!
//! Provides pre-built recordings for benchmarks and examples:
//!
//! - [`reference_recording`]: bubble sort over 256 reversed items (~65K frames)
//! - [`stress_recording`]: bubble sort over 1024 reversed items (~1M frames)
//! - [`player_for`]: wraps a recording in a paused [`Player`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sortreel_playback::{PlaybackConfig, Player};
use sortreel_record::{record_algorithm, Algorithm, RecordError, Recording};
use sortreel_test_utils::{reversed, BubbleSort};

/// Item count for [`reference_recording`].
pub const REFERENCE_ITEMS: u32 = 256;

/// Item count for [`stress_recording`].
pub const STRESS_ITEMS: u32 = 1024;

/// Record `algorithm` over `n` reversed items.
pub fn recording_of(algorithm: &dyn Algorithm<u32>, n: u32) -> Result<Recording<u32>, RecordError> {
    record_algorithm(reversed(n), algorithm)
}

/// Bubble sort over [`REFERENCE_ITEMS`] reversed items.
pub fn reference_recording() -> Result<Recording<u32>, RecordError> {
    recording_of(&BubbleSort, REFERENCE_ITEMS)
}

/// Bubble sort over [`STRESS_ITEMS`] reversed items.
pub fn stress_recording() -> Result<Recording<u32>, RecordError> {
    recording_of(&BubbleSort, STRESS_ITEMS)
}

/// A paused player with default configuration, cursor at the last frame.
pub fn player_for(recording: Recording<u32>) -> Player<u32> {
    Player::new(recording, PlaybackConfig::default())
        .expect("default playback config is valid")
}
