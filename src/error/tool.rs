//! External tool errors

use super::SkillportError;

/// Creates a command failed error
pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::CommandFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates a tool registration failed error
pub fn registration_failed(tool: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::ToolRegistrationFailed {
        tool: tool.into(),
        reason: reason.into(),
    }
}
