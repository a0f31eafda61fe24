//! Application state management
//!
//! This module provides the central state for the Mockly UI: which
//! screen is mounted and the per-screen state that lives only while
//! that screen is showing.

use crate::intake::{validate, IntakeError, ResumeSubmission};
use crate::nav::Route;
use crate::session::InterviewSession;
use crate::transcript::Transcript;
use tracing::{debug, info};

/// State for the resume intake screen
#[derive(Debug, Default)]
pub struct IntakeScreen {
    /// Form fields being edited
    pub submission: ResumeSubmission,
    /// Validation error from the last rejected submit, if any
    pub error: Option<IntakeError>,
}

impl IntakeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form. On success the error is cleared and the
    /// caller should move on to the interview session; on failure the
    /// first failing check is stored for display.
    pub fn submit(&mut self) -> bool {
        match validate(&self.submission) {
            Ok(()) => {
                self.error = None;
                info!(
                    "[INTAKE] Submission accepted for role '{}'",
                    self.submission.role_trimmed()
                );
                true
            }
            Err(err) => {
                debug!("[INTAKE] Submission rejected: {}", err);
                self.error = Some(err);
                false
            }
        }
    }

    /// Clear the validation error. Called whenever any field changes.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// State for the interview session screen
#[derive(Debug)]
pub struct SessionScreen {
    /// Timer and mic state
    pub session: InterviewSession,
    /// Conversation shown in the transcript box
    pub transcript: Transcript,
    /// Answer being typed
    pub draft_answer: String,
}

impl SessionScreen {
    pub fn new() -> Self {
        Self {
            session: InterviewSession::new(),
            transcript: Transcript::opening(),
            draft_answer: String::new(),
        }
    }

    /// Append the drafted answer to the transcript. Whitespace-only
    /// drafts are ignored.
    pub fn send_answer(&mut self) {
        let text = self.draft_answer.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.transcript.add_answer(text);
        self.draft_answer.clear();
    }
}

impl Default for SessionScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Which screen is mounted on top of the landing page
#[derive(Debug, Default)]
pub enum Screen {
    /// Landing page only, no overlay
    #[default]
    Landing,
    /// Resume intake overlay
    Intake(IntakeScreen),
    /// Interview session overlay
    Session(SessionScreen),
}

impl Screen {
    /// The route this screen is mounted at
    pub fn route(&self) -> Route {
        match self {
            Screen::Landing => Route::Landing,
            Screen::Intake(_) => Route::Resume,
            Screen::Session(_) => Route::Session,
        }
    }
}

/// Central application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently mounted screen
    pub screen: Screen,
}

impl AppState {
    /// Create a new application state showing the landing page
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
        }
    }

    /// The route currently showing
    pub fn route(&self) -> Route {
        self.screen.route()
    }

    /// Switch to another route, mounting a fresh screen for it.
    ///
    /// Navigating to the route already showing is a no-op so that a
    /// repeated click does not wipe in-progress edits. Everything else
    /// swaps the screen out wholesale: leaving the session drops its
    /// timer along with the screen.
    pub fn navigate(&mut self, route: Route) {
        if self.route() == route {
            return;
        }
        info!("[NAV] {} -> {}", self.route(), route);
        self.screen = match route {
            Route::Landing => Screen::Landing,
            Route::Resume => Screen::Intake(IntakeScreen::new()),
            Route::Session => Screen::Session(SessionScreen::new()),
        };
    }

    /// Submit the intake form, moving to the session screen when it
    /// validates. Does nothing unless the intake screen is mounted.
    pub fn submit_intake(&mut self) {
        let accepted = match &mut self.screen {
            Screen::Intake(intake) => intake.submit(),
            _ => false,
        };
        if accepted {
            self.navigate(Route::Session);
        }
    }

    /// Apply timer ticks that fired since the last frame
    pub fn poll_session(&mut self) {
        if let Screen::Session(screen) = &mut self.screen {
            screen.session.poll_ticks();
        }
    }

    /// Whether an interview timer is currently running
    pub fn session_running(&self) -> bool {
        match &self.screen {
            Screen::Session(screen) => screen.session.is_active(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::ResumeFile;
    use crate::transcript::Speaker;

    fn intake_mut(state: &mut AppState) -> &mut IntakeScreen {
        match &mut state.screen {
            Screen::Intake(intake) => intake,
            other => panic!("expected intake screen, got {}", other.route()),
        }
    }

    fn session_mut(state: &mut AppState) -> &mut SessionScreen {
        match &mut state.screen {
            Screen::Session(session) => session,
            other => panic!("expected session screen, got {}", other.route()),
        }
    }

    #[test]
    fn test_initial_state_shows_landing() {
        let state = AppState::new();
        assert_eq!(state.route(), Route::Landing);
        assert!(!state.session_running());
    }

    #[test]
    fn test_navigate_mounts_fresh_intake() {
        let mut state = AppState::new();
        state.navigate(Route::Resume);
        intake_mut(&mut state).submission.role = "Engineer".to_string();

        state.navigate(Route::Landing);
        state.navigate(Route::Resume);
        assert!(intake_mut(&mut state).submission.role.is_empty());
    }

    #[test]
    fn test_navigate_to_current_route_preserves_edits() {
        let mut state = AppState::new();
        state.navigate(Route::Resume);
        intake_mut(&mut state).submission.role = "Engineer".to_string();

        state.navigate(Route::Resume);
        assert_eq!(intake_mut(&mut state).submission.role, "Engineer");
    }

    #[test]
    fn test_leaving_session_drops_timer() {
        let mut state = AppState::new();
        state.navigate(Route::Session);
        {
            let screen = session_mut(&mut state);
            screen.session.start();
            screen.session.record_tick();
            screen.session.record_tick();
            assert_eq!(screen.session.elapsed_seconds(), 2);
        }

        state.navigate(Route::Landing);
        state.navigate(Route::Session);
        let screen = session_mut(&mut state);
        assert!(!screen.session.is_active());
        assert_eq!(screen.session.elapsed_seconds(), 0);
        assert_eq!(screen.transcript.len(), 1);
        assert!(!screen.transcript.has_answer());
    }

    #[test]
    fn test_submit_with_empty_form_stays_on_intake() {
        let mut state = AppState::new();
        state.navigate(Route::Resume);
        state.submit_intake();

        assert_eq!(state.route(), Route::Resume);
        assert_eq!(
            intake_mut(&mut state).error,
            Some(IntakeError::MissingResume)
        );
    }

    #[test]
    fn test_submit_with_complete_form_opens_session() {
        let mut state = AppState::new();
        state.navigate(Route::Resume);
        {
            let intake = intake_mut(&mut state);
            intake.submission.resume = Some(ResumeFile::new("resume.pdf"));
            intake.submission.role = "Software Engineer".to_string();
        }
        state.submit_intake();

        assert_eq!(state.route(), Route::Session);
        let screen = session_mut(&mut state);
        assert!(!screen.session.is_active());
        assert_eq!(screen.session.elapsed_seconds(), 0);
        assert_eq!(screen.transcript.len(), 1);
    }

    #[test]
    fn test_submit_ignored_outside_intake() {
        let mut state = AppState::new();
        state.submit_intake();
        assert_eq!(state.route(), Route::Landing);

        state.navigate(Route::Session);
        state.submit_intake();
        assert_eq!(state.route(), Route::Session);
    }

    #[test]
    fn test_error_cleared_on_field_change() {
        let mut state = AppState::new();
        state.navigate(Route::Resume);
        state.submit_intake();
        assert!(intake_mut(&mut state).error.is_some());

        let intake = intake_mut(&mut state);
        intake.submission.resume = Some(ResumeFile::new("resume.pdf"));
        intake.clear_error();
        assert!(intake.error.is_none());
    }

    #[test]
    fn test_send_answer_appends_and_clears_draft() {
        let mut screen = SessionScreen::new();
        screen.draft_answer = "I led the migration to Rust.".to_string();
        screen.send_answer();

        assert!(screen.draft_answer.is_empty());
        assert!(screen.transcript.has_answer());
        let last = screen.transcript.entries().last().unwrap();
        assert_eq!(last.speaker, Speaker::Candidate);
        assert_eq!(last.text, "I led the migration to Rust.");
    }

    #[test]
    fn test_whitespace_answer_not_sent() {
        let mut screen = SessionScreen::new();
        screen.draft_answer = "   ".to_string();
        screen.send_answer();

        assert!(!screen.transcript.has_answer());
        assert_eq!(screen.transcript.len(), 1);
    }

    #[test]
    fn test_session_running_reflects_timer() {
        let mut state = AppState::new();
        state.navigate(Route::Session);
        assert!(!state.session_running());

        session_mut(&mut state).session.start();
        assert!(state.session_running());

        session_mut(&mut state).session.end();
        assert!(!state.session_running());
    }

    #[test]
    fn test_poll_session_noop_on_landing() {
        let mut state = AppState::new();
        state.poll_session();
        assert_eq!(state.route(), Route::Landing);
    }
}
