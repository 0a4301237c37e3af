//! Bundle and project precondition errors

use super::SkillportError;

/// Creates a bundle incomplete error
pub fn incomplete(path: impl Into<String>, missing: impl Into<String>) -> SkillportError {
    SkillportError::BundleIncomplete {
        path: path.into(),
        missing: missing.into(),
    }
}

/// Creates a source not found error
pub fn source_not_found(path: impl Into<String>) -> SkillportError {
    SkillportError::SourceNotFound { path: path.into() }
}

/// Creates a project not found error
pub fn project_not_found(path: impl Into<String>) -> SkillportError {
    SkillportError::ProjectNotFound { path: path.into() }
}

/// Creates a link conflict error
pub fn link_conflict(path: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::LinkConflict {
        path: path.into(),
        reason: reason.into(),
    }
}
