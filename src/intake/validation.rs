//! Intake form validation
//!
//! A submission must carry a resume file and a non-blank role before the
//! interview screen opens. The experience level always has a value and can
//! never block submission.

use crate::intake::form::ResumeSubmission;
use thiserror::Error;

/// Why an intake submission was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeError {
    /// No resume file attached
    #[error("missing resume")]
    MissingResume,
    /// Role field blank after trimming
    #[error("missing role")]
    MissingRole,
}

impl IntakeError {
    /// Message shown inline in the form
    pub fn user_message(&self) -> &'static str {
        match self {
            IntakeError::MissingResume => "Please upload your resume",
            IntakeError::MissingRole => "Please enter your role",
        }
    }
}

/// Check a submission for completeness
///
/// The resume is checked before the role, so a form missing both reports
/// the missing resume first.
pub fn validate(submission: &ResumeSubmission) -> Result<(), IntakeError> {
    if submission.resume.is_none() {
        return Err(IntakeError::MissingResume);
    }
    if submission.role_trimmed().is_empty() {
        return Err(IntakeError::MissingRole);
    }
    Ok(())
}
