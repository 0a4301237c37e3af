//! Git operation errors

use super::SkillportError;

/// Creates a clone failed error
pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::GitCloneFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a fetch failed error for a cached clone
pub fn fetch_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::GitFetchFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an open failed error
pub fn open_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::GitOpenFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
