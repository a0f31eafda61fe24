//! Resume intake form state
//!
//! Holds what the form collects before a session can begin: a resume file
//! handle, the target role, and a self-reported experience level.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File extensions the resume drop zone accepts
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Check a file name against the accepted resume formats (case-insensitive)
pub fn has_accepted_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted)),
        None => false,
    }
}

/// Handle to a dropped resume file
///
/// Only the name and (when available) path are kept. The bytes are never
/// read; presence is all the intake ever checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    pub name: String,
    pub path: Option<PathBuf>,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

/// Self-reported experience level for the interview
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    /// All levels in display order
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything the intake form collects
///
/// Created fresh each time the form mounts and discarded on navigation;
/// nothing here survives leaving the screen.
#[derive(Debug, Clone, Default)]
pub struct ResumeSubmission {
    /// Attached resume file, if any
    pub resume: Option<ResumeFile>,
    /// Target role, free text
    pub role: String,
    /// Experience level, defaults to Beginner
    pub experience: ExperienceLevel,
}

impl ResumeSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Role with surrounding whitespace removed
    pub fn role_trimmed(&self) -> &str {
        self.role.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let submission = ResumeSubmission::new();
        assert!(submission.resume.is_none());
        assert!(submission.role.is_empty());
        assert_eq!(submission.experience, ExperienceLevel::Beginner);
    }

    #[test]
    fn test_accepted_extensions() {
        assert!(has_accepted_extension("resume.pdf"));
        assert!(has_accepted_extension("resume.doc"));
        assert!(has_accepted_extension("resume.docx"));
        assert!(has_accepted_extension("RESUME.PDF"));
        assert!(has_accepted_extension("my.latest.resume.Docx"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!has_accepted_extension("resume.txt"));
        assert!(!has_accepted_extension("resume.pdf.png"));
        assert!(!has_accepted_extension("resume"));
        assert!(!has_accepted_extension("resume."));
        assert!(!has_accepted_extension(""));
    }

    #[test]
    fn test_role_trimmed() {
        let mut submission = ResumeSubmission::new();
        submission.role = "  Software Engineer  ".to_string();
        assert_eq!(submission.role_trimmed(), "Software Engineer");
    }

    #[test]
    fn test_experience_labels() {
        for level in ExperienceLevel::ALL {
            assert_eq!(level.to_string(), level.label());
        }
        assert_eq!(ExperienceLevel::Intermediate.label(), "Intermediate");
    }

    #[test]
    fn test_resume_file_builder() {
        let file = ResumeFile::new("resume.pdf").with_path(PathBuf::from("/tmp/resume.pdf"));
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.path.as_deref(), Some(std::path::Path::new("/tmp/resume.pdf")));
    }
}
