//! Frame counting and tick-based countdown timers
//!
//! The shell simulates in whole frames, so time here is discrete: one tick
//! per frame, decremented by [`FrameClock::advance`]. Timers are identified
//! by caller-chosen ids and live until they are explicitly deleted, even
//! after reaching zero.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Identifier for a countdown timer registered with a [`FrameClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Timer bookkeeping errors
///
/// These indicate caller bugs (wrong id, double registration), not runtime
/// conditions. The engine propagates them as fatal rather than ignoring them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// A timer with this id is already registered
    #[error("timer {0} is already running")]
    DuplicateTimer(TimerId),

    /// No timer with this id is registered
    #[error("unknown timer {0}")]
    UnknownTimer(TimerId),
}

#[derive(Debug, Clone, Copy)]
struct Countdown {
    total: u32,
    remaining: u32,
}

/// Per-frame clock: a frame counter plus named countdown timers
///
/// Invariant: every registered timer satisfies `remaining <= total`, and a
/// timer that reaches zero stays registered (reporting zero) until
/// [`FrameClock::delete_timer`] removes it.
#[derive(Debug, Default)]
pub struct FrameClock {
    frame_count: u64,
    timers: HashMap<TimerId, Countdown>,
}

impl FrameClock {
    /// Create a clock with no elapsed frames and no timers
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame
    ///
    /// Increments the frame counter and ticks every registered timer down by
    /// one, never below zero. Call exactly once per frame.
    pub fn advance(&mut self) {
        self.frame_count += 1;
        for countdown in self.timers.values_mut() {
            countdown.remaining = countdown.remaining.saturating_sub(1);
        }
    }

    /// Number of frames elapsed since the clock was created
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Register a countdown of `ticks` ticks under `id`
    ///
    /// Fails with [`TimerError::DuplicateTimer`] if `id` is already
    /// registered; use [`FrameClock::restart_timer`] to replace a running
    /// timer instead.
    pub fn start_timer(&mut self, id: TimerId, ticks: u32) -> Result<(), TimerError> {
        if self.timers.contains_key(&id) {
            return Err(TimerError::DuplicateTimer(id));
        }
        self.timers.insert(
            id,
            Countdown {
                total: ticks,
                remaining: ticks,
            },
        );
        Ok(())
    }

    /// Register a countdown of `ticks` ticks under `id`, replacing any
    /// existing timer with that id
    pub fn restart_timer(&mut self, id: TimerId, ticks: u32) {
        self.timers.insert(
            id,
            Countdown {
                total: ticks,
                remaining: ticks,
            },
        );
    }

    /// Whether a timer with this id is registered
    ///
    /// A timer that has counted down to zero is still running until deleted.
    pub fn is_running(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Ticks left on the timer, zero once it has expired
    pub fn remaining(&self, id: TimerId) -> Result<u32, TimerError> {
        self.timers
            .get(&id)
            .map(|countdown| countdown.remaining)
            .ok_or(TimerError::UnknownTimer(id))
    }

    /// Total duration the timer was registered with
    pub fn duration(&self, id: TimerId) -> Result<u32, TimerError> {
        self.timers
            .get(&id)
            .map(|countdown| countdown.total)
            .ok_or(TimerError::UnknownTimer(id))
    }

    /// Remove the timer
    ///
    /// Deleting an id that was never registered (or already deleted) is an
    /// [`TimerError::UnknownTimer`] error.
    pub fn delete_timer(&mut self, id: TimerId) -> Result<(), TimerError> {
        self.timers
            .remove(&id)
            .map(|_| ())
            .ok_or(TimerError::UnknownTimer(id))
    }
}
