//! One-second tick source for the interview timer
//!
//! Wraps a `crossbeam_channel::tick` receiver as a scoped resource: the
//! session controller holds one exactly while an interview is running, and
//! dropping it releases the timer. Ticks are polled from the frame loop,
//! never pushed, so nothing can fire after the holder is gone.

use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};

/// Periodic tick source owned by the session controller
#[derive(Debug, Clone)]
pub struct SecondTicker {
    ticks: Receiver<Instant>,
    period: Duration,
}

impl SecondTicker {
    /// Create a ticker that fires once per second
    pub fn new() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    /// Create a ticker with a custom period (shortened in tests)
    pub(crate) fn with_period(period: Duration) -> Self {
        Self {
            ticks: crossbeam_channel::tick(period),
            period,
        }
    }

    /// Drain pending ticks, returning how many had fired
    ///
    /// The underlying channel holds at most one undelivered tick, so a
    /// stalled frame loop observes time no faster than it polls.
    pub fn drain(&self) -> u64 {
        let mut fired = 0;
        while self.ticks.try_recv().is_ok() {
            fired += 1;
        }
        fired
    }

    /// The configured tick period
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for SecondTicker {
    fn default() -> Self {
        Self::new()
    }
}
