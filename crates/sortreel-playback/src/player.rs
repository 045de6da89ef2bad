//! Cursor-driven replay of a recorded timeline.
//!
//! [`Player`] is the primary user-facing API for the replay phase. It
//! takes ownership of a [`Recording`] and keeps its item buffer in step
//! with a cursor over the timeline by applying or undoing frame deltas.
//!
//! # Cost model
//!
//! Moving the cursor from `k` to `target` touches exactly
//! `|target - k|` frames. Nothing is re-simulated from the start, and
//! buffer length does not enter into it.
//!
//! # Ownership model
//!
//! The buffer and timeline move into the player as one unit and move out
//! again through [`into_parts()`](Player::into_parts). The recorder no
//! longer exists at that point, so there is never more than one mutator.
//!
//! # Auto-advance
//!
//! The player never reads a wall clock. The host loop calls
//! [`advance()`](Player::advance) once per tick with the elapsed time,
//! and the player steps forward whenever a full
//! [`frame_delay`](PlaybackConfig::frame_delay) has passed since its
//! last step.

use std::fmt;
use std::time::Duration;

use sortreel_core::{DisplayTag, FrameView, ItemBuffer};
use sortreel_record::{Recording, Timeline};

use crate::config::{ConfigError, PlaybackConfig};
use crate::metrics::PlaybackMetrics;

// ── PlaybackMode ────────────────────────────────────────────────

/// Whether auto-advance is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackMode {
    /// The cursor only moves on explicit requests.
    Paused,
    /// [`Player::advance`] steps forward on schedule.
    Playing,
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paused => f.write_str("paused"),
            Self::Playing => f.write_str("playing"),
        }
    }
}

// ── Player ──────────────────────────────────────────────────────

/// Replays a [`Recording`] onto its item buffer at any requested position.
///
/// A new player starts paused with the cursor on the last frame, where
/// the buffer already matches the recording's final state.
///
/// # Example
///
/// ```
/// use sortreel_playback::{PlaybackConfig, Player};
/// use sortreel_record::record;
///
/// let recording = record(vec![5, 3, 8], |rec| {
///     rec.swap(0, 1)?;
///     Ok(())
/// })?;
/// let mut player = Player::new(recording, PlaybackConfig::default()).unwrap();
/// assert_eq!(player.buffer().as_slice(), &[3, 5, 8]);
///
/// player.set_position(0);
/// assert_eq!(player.buffer().as_slice(), &[5, 3, 8]);
/// # Ok::<(), sortreel_record::RecordError>(())
/// ```
#[derive(Debug)]
pub struct Player<T> {
    timeline: Timeline<T>,
    buffer: ItemBuffer<T>,
    cursor: usize,
    mode: PlaybackMode,
    config: PlaybackConfig,
    /// Host time accumulated through `advance()`.
    clock: Duration,
    /// Value of `clock` when auto-advance last stepped (or play began).
    last_step_at: Duration,
    metrics: PlaybackMetrics,
}

impl<T> Player<T> {
    /// Take ownership of `recording` for replay.
    ///
    /// Validates `config`; if `start_playing` is set the player
    /// immediately enters `Playing` (restarting from frame 0).
    pub fn new(recording: Recording<T>, config: PlaybackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (timeline, buffer) = recording.into_parts();
        let cursor = timeline.last_index();
        let start_playing = config.start_playing;
        let mut player = Self {
            timeline,
            buffer,
            cursor,
            mode: PlaybackMode::Paused,
            config,
            clock: Duration::ZERO,
            last_step_at: Duration::ZERO,
            metrics: PlaybackMetrics::default(),
        };
        if start_playing {
            player.play();
        }
        Ok(player)
    }

    // ── Read surface ────────────────────────────────────────────

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Position of the final frame.
    pub fn last_index(&self) -> usize {
        self.timeline.last_index()
    }

    /// Number of frames in the timeline.
    pub fn frame_count(&self) -> usize {
        self.timeline.len()
    }

    /// Whether the cursor is on the final frame.
    pub fn is_at_end(&self) -> bool {
        self.cursor == self.timeline.last_index()
    }

    /// Current play/pause mode.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Whether auto-advance is active.
    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    /// The timeline being replayed.
    pub fn timeline(&self) -> &Timeline<T> {
        &self.timeline
    }

    /// The item buffer as of the current position.
    pub fn buffer(&self) -> &ItemBuffer<T> {
        &self.buffer
    }

    /// Active configuration.
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Replay cost counters since construction.
    pub fn metrics(&self) -> &PlaybackMetrics {
        &self.metrics
    }

    /// The frame at the cursor, with its annotation state.
    ///
    /// # Panics
    ///
    /// Never in practice: the cursor is kept within the timeline.
    pub fn current_frame(&self) -> FrameView<'_, T> {
        self.timeline
            .frame(self.cursor)
            .expect("cursor is kept within the timeline")
    }

    /// Narration of the frame at the cursor.
    pub fn describe_current(&self) -> Option<String>
    where
        T: fmt::Display,
    {
        self.current_frame().describe(self.buffer.as_slice())
    }

    /// One display tag per buffer index for the frame at the cursor.
    pub fn display_tags(&self) -> Vec<DisplayTag>
    where
        T: PartialEq,
    {
        let view = self.current_frame();
        self.buffer
            .iter()
            .enumerate()
            .map(|(i, v)| view.display_tag(i, v))
            .collect()
    }

    // ── Cursor movement ─────────────────────────────────────────

    /// Move the cursor to `target`, replaying deltas on the way.
    ///
    /// Moving forward applies frames `k+1 ..= target` in ascending order;
    /// moving backward undoes frames `k ..= target+1` in descending
    /// order. Out-of-range targets are ignored.
    ///
    /// Returns `true` if the cursor moved.
    pub fn set_position(&mut self, target: usize) -> bool {
        let from = self.cursor;
        if target > self.timeline.last_index() || target == from {
            return false;
        }
        let frames = self.timeline.as_slice();
        if target > from {
            for frame in &frames[from + 1..=target] {
                frame.apply(&mut self.buffer);
            }
            self.metrics.frames_applied += (target - from) as u64;
        } else {
            for frame in frames[target + 1..=from].iter().rev() {
                frame.undo(&mut self.buffer);
            }
            self.metrics.frames_undone += (from - target) as u64;
        }
        self.cursor = target;
        self.metrics.seeks += 1;
        tracing::debug!(from, to = target, "seek");
        true
    }

    /// Move one frame forward. Returns `false` at the last frame.
    pub fn step_forward(&mut self) -> bool {
        self.set_position(self.cursor + 1)
    }

    /// Move one frame back. Returns `false` at frame 0.
    pub fn step_backward(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(target) => self.set_position(target),
            None => false,
        }
    }

    /// Jump to the `Initial` frame.
    pub fn seek_start(&mut self) -> bool {
        self.set_position(0)
    }

    /// Jump to the `Final` frame.
    pub fn seek_end(&mut self) -> bool {
        self.set_position(self.timeline.last_index())
    }

    // ── Play / pause ────────────────────────────────────────────

    /// Enter `Playing`. Restarts from frame 0 if the cursor is at the end.
    ///
    /// The next auto-advance step happens one full frame delay after
    /// this call. Calling `play()` while already playing does nothing.
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        if self.is_at_end() {
            self.set_position(0);
        }
        self.mode = PlaybackMode::Playing;
        self.last_step_at = self.clock;
        tracing::debug!(position = self.cursor, "playback started");
    }

    /// Enter `Paused`.
    pub fn pause(&mut self) {
        if self.is_playing() {
            self.mode = PlaybackMode::Paused;
            tracing::debug!(position = self.cursor, "playback paused");
        }
    }

    /// Switch between `Playing` and `Paused`.
    pub fn toggle(&mut self) {
        match self.mode {
            PlaybackMode::Playing => self.pause(),
            PlaybackMode::Paused => self.play(),
        }
    }

    /// Current delay between auto-advance steps.
    pub fn frame_delay(&self) -> Duration {
        self.config.frame_delay
    }

    /// Change the delay between auto-advance steps.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroFrameDelay`] if `delay` is zero; the old delay
    /// is kept.
    pub fn set_frame_delay(&mut self, delay: Duration) -> Result<(), ConfigError> {
        if delay.is_zero() {
            return Err(ConfigError::ZeroFrameDelay);
        }
        self.config.frame_delay = delay;
        Ok(())
    }

    /// Drive auto-advance from the host loop.
    ///
    /// `elapsed` is the time since the previous call. While playing, if
    /// at least one frame delay has passed since the last step, the
    /// player steps forward (up to `max_steps_per_tick` times) and
    /// records the current time as its last step. Landing on the final
    /// frame pauses playback.
    ///
    /// Returns the number of steps taken.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.clock = self.clock.saturating_add(elapsed);
        if !self.is_playing() {
            return 0;
        }

        let since_last = self.clock.saturating_sub(self.last_step_at);
        let due = since_last.as_nanos() / self.config.frame_delay.as_nanos();
        let allowed = due.min(u128::from(self.config.max_steps_per_tick)) as u32;
        if allowed == 0 {
            return 0;
        }

        let mut taken = 0;
        while taken < allowed && self.step_forward() {
            taken += 1;
            if self.is_at_end() {
                break;
            }
        }
        self.metrics.auto_steps += u64::from(taken);
        self.last_step_at = self.clock;

        if self.is_at_end() {
            self.pause();
        }
        taken
    }

    // ── Hand-off ────────────────────────────────────────────────

    /// Leave the replay phase, returning the timeline and the buffer
    /// restored to the final frame's state.
    pub fn into_parts(mut self) -> (Timeline<T>, ItemBuffer<T>) {
        self.seek_end();
        (self.timeline, self.buffer)
    }
}
