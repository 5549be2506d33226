//! Play/pause state machine for timeline auto-scroll.
//!
//! Each run gets a fresh [`PlaybackToken`]. Frame callbacks and periodic
//! refreshes hold on to the token they were started with and check
//! [`PlaybackController::is_current`] before doing any work, so `pause` wins
//! over callbacks that were already queued.

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_SCROLL_TIME_MULTIPLIER: f64 = 5.0;
pub const DEFAULT_REFRESH_DIVISIONS: u32 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackToken(u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing(PlaybackToken),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("timeline has no blocks to play through")]
    EmptyTimeline,
}

/// Timing for one run, derived from the scroll distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaybackPlan {
    pub token: PlaybackToken,
    /// Scroll target: the offset of the last timeline block.
    pub distance_px: f64,
    pub duration_ms: f64,
    pub refresh_interval_ms: f64,
}

impl PlaybackPlan {
    /// Duration rounded for a host timer.
    pub fn duration_ms_u32(&self) -> u32 {
        self.duration_ms.round().clamp(0.0, u32::MAX as f64) as u32
    }

    /// Refresh period rounded for a host timer, never zero.
    pub fn refresh_interval_ms_u32(&self) -> u32 {
        self.refresh_interval_ms.round().clamp(1.0, u32::MAX as f64) as u32
    }
}

#[derive(Debug)]
pub struct PlaybackController {
    state: PlaybackState,
    next_token: u64,
    scroll_time_multiplier: f64,
    refresh_divisions: u32,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_TIME_MULTIPLIER, DEFAULT_REFRESH_DIVISIONS)
    }
}

impl PlaybackController {
    pub fn new(scroll_time_multiplier: f64, refresh_divisions: u32) -> Self {
        Self {
            state: PlaybackState::Paused,
            next_token: 0,
            scroll_time_multiplier: scroll_time_multiplier.max(0.0),
            refresh_divisions: refresh_divisions.max(1),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing(_))
    }

    /// Start a run towards `last_block_offset`.
    ///
    /// Calling `play` while already playing replaces the running token, which
    /// stops the previous run's callbacks.
    pub fn play(&mut self, last_block_offset: Option<f64>) -> Result<PlaybackPlan, PlaybackError> {
        let distance_px = last_block_offset.ok_or(PlaybackError::EmptyTimeline)?;
        let distance_px = if distance_px.is_finite() {
            distance_px.max(0.0)
        } else {
            0.0
        };

        self.next_token = self.next_token.wrapping_add(1);
        let token = PlaybackToken(self.next_token);
        self.state = PlaybackState::Playing(token);

        let duration_ms = distance_px * self.scroll_time_multiplier;
        let plan = PlaybackPlan {
            token,
            distance_px,
            duration_ms,
            refresh_interval_ms: duration_ms / self.refresh_divisions as f64,
        };
        debug!(distance_px, duration_ms, "playback started");
        Ok(plan)
    }

    /// Returns `true` if a run was stopped.
    pub fn pause(&mut self) -> bool {
        let was_playing = self.is_playing();
        self.state = PlaybackState::Paused;
        if was_playing {
            debug!("playback paused");
        }
        was_playing
    }

    /// Mark the run identified by `token` as complete. Stale tokens are ignored.
    pub fn finish(&mut self, token: PlaybackToken) -> bool {
        if self.is_current(token) {
            self.state = PlaybackState::Paused;
            debug!("playback finished");
            true
        } else {
            false
        }
    }

    pub fn is_current(&self, token: PlaybackToken) -> bool {
        self.state == PlaybackState::Playing(token)
    }
}
