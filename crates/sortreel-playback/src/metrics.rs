//! Cumulative replay cost counters.
//!
//! [`PlaybackMetrics`] records how much work the player has done. Seek
//! cost is proportional to distance travelled, so `frames_applied` and
//! `frames_undone` grow with cursor movement, never with buffer size.

/// Counters maintained by a [`Player`](crate::Player) since construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackMetrics {
    /// Cursor moves that changed position (ignored seeks are not counted).
    pub seeks: u64,
    /// Frames whose delta was applied while moving forward.
    pub frames_applied: u64,
    /// Frames whose delta was undone while moving backward.
    pub frames_undone: u64,
    /// Steps taken by auto-advance.
    pub auto_steps: u64,
}

impl PlaybackMetrics {
    /// Total frames visited by seeks in either direction.
    pub fn frames_visited(&self) -> u64 {
        self.frames_applied + self.frames_undone
    }
}
