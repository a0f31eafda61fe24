pub mod form;
pub mod validation;

pub use form::{has_accepted_extension, ExperienceLevel, ResumeFile, ResumeSubmission};
pub use validation::{validate, IntakeError};
