//! Playback configuration, validation, and error types.
//!
//! [`PlaybackConfig`] is the builder-input for a [`Player`](crate::Player).
//! [`validate()`](PlaybackConfig::validate) checks its invariants; the
//! player constructor calls it before anything else.

use std::time::Duration;

use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`PlaybackConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `frame_delay` is zero, which would make auto-advance unbounded.
    #[error("frame_delay must be non-zero")]
    ZeroFrameDelay,
    /// `max_steps_per_tick` is zero, so auto-advance could never move.
    #[error("max_steps_per_tick must be at least 1")]
    ZeroStepsPerTick,
}

// ── PlaybackConfig ─────────────────────────────────────────────────

/// Configuration for constructing a [`Player`](crate::Player).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Minimum time between auto-advance steps while playing. Default: 100 ms.
    pub frame_delay: Duration,
    /// Upper bound on auto-advance steps taken in one host tick. Default: 1.
    ///
    /// With the default, a slow host loop slows playback down. Larger
    /// values let playback catch up; any backlog beyond the cap is dropped.
    pub max_steps_per_tick: u32,
    /// Enter `Playing` as soon as the player is constructed. Default: false.
    pub start_playing: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(100),
            max_steps_per_tick: 1,
            start_playing: false,
        }
    }
}

impl PlaybackConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_delay.is_zero() {
            return Err(ConfigError::ZeroFrameDelay);
        }
        if self.max_steps_per_tick == 0 {
            return Err(ConfigError::ZeroStepsPerTick);
        }
        Ok(())
    }
}
