//! Interview session state machine
//!
//! A session is either idle or actively running with a seconds counter.
//! The counter lives inside the `Active` variant, so a ticking idle session
//! is unrepresentable. The mic flag is orthogonal to the phase.

use crate::session::ticker::SecondTicker;
use tracing::{debug, info};

/// Interview session phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No interview running
    #[default]
    Idle,
    /// Interview running, with seconds elapsed since start
    Active { elapsed_seconds: u64 },
}

impl SessionPhase {
    /// Check if no interview is running
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionPhase::Idle)
    }

    /// Check if an interview is running
    pub fn is_active(&self) -> bool {
        matches!(self, SessionPhase::Active { .. })
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Idle => write!(f, "Idle"),
            SessionPhase::Active { .. } => write!(f, "Active"),
        }
    }
}

/// Format elapsed seconds as MM:SS
///
/// Minutes are unbounded: 3661 seconds renders as "61:01", not "1:01:01".
pub fn format_elapsed(elapsed_seconds: u64) -> String {
    format!("{:02}:{:02}", elapsed_seconds / 60, elapsed_seconds % 60)
}

/// Interview session controller
///
/// Owns the phase, the mic flag, and the tick source. The ticker is held
/// exactly while the phase is `Active`; ending the interview or dropping
/// the controller (screen teardown) releases it, and since ticks are
/// polled rather than pushed nothing can advance the counter afterwards.
#[derive(Debug, Default)]
pub struct InterviewSession {
    phase: SessionPhase,
    mic_on: bool,
    ticker: Option<SecondTicker>,
}

impl InterviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Seconds elapsed in the current interview, 0 while idle
    pub fn elapsed_seconds(&self) -> u64 {
        match self.phase {
            SessionPhase::Idle => 0,
            SessionPhase::Active { elapsed_seconds } => elapsed_seconds,
        }
    }

    /// Check if an interview is running
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn mic_on(&self) -> bool {
        self.mic_on
    }

    /// Check whether a tick source is currently held
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Start the interview, always from zero regardless of prior state
    pub fn start(&mut self) {
        self.phase = SessionPhase::Active { elapsed_seconds: 0 };
        self.ticker = Some(SecondTicker::new());
        info!("[SESSION] Interview started");
    }

    /// End the interview, discarding elapsed time and releasing the ticker
    pub fn end(&mut self) {
        self.phase = SessionPhase::Idle;
        self.ticker = None;
        info!("[SESSION] Interview ended");
    }

    /// Flip the mic, independent of the interview phase
    pub fn toggle_mic(&mut self) {
        self.mic_on = !self.mic_on;
        debug!("[SESSION] Mic {}", if self.mic_on { "on" } else { "off" });
    }

    /// Advance elapsed time by one second; no-op while idle
    pub fn record_tick(&mut self) {
        if let SessionPhase::Active { elapsed_seconds } = &mut self.phase {
            *elapsed_seconds += 1;
        }
    }

    /// Drain the tick source and apply the fired ticks
    ///
    /// Called once per frame by the UI. Returns how many seconds were
    /// applied.
    pub fn poll_ticks(&mut self) -> u64 {
        let fired = match &self.ticker {
            Some(ticker) => ticker.drain(),
            None => 0,
        };
        for _ in 0..fired {
            self.record_tick();
        }
        fired
    }

    /// Timer text for the sidebar, "00:00" while idle
    pub fn timer_text(&self) -> String {
        format_elapsed(self.elapsed_seconds())
    }
}
