pub mod controller;
pub mod ticker;

pub use controller::{format_elapsed, InterviewSession, SessionPhase};
pub use ticker::SecondTicker;
