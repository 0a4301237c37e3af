//! Configuration errors

use super::SkillportError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> SkillportError {
    SkillportError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid skill pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::InvalidSkillPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
