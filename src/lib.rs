//! Mockly - mock interview practice
//!
//! A desktop app with a landing page, a resume intake form, and a simulated
//! live interview session. All interview behavior is local UI state; nothing
//! is persisted or sent anywhere.

pub mod intake;
pub mod nav;
pub mod session;
pub mod transcript;
pub mod ui;

pub use intake::{ExperienceLevel, IntakeError, ResumeFile, ResumeSubmission};
pub use nav::Route;
pub use session::{format_elapsed, InterviewSession, SessionPhase};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
