//! File system errors

use std::path::Path;

use super::SkillportError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillportError {
    SkillportError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a mirror whose destination overlaps its source
pub fn overlapping_paths(source: &Path, destination: &Path) -> SkillportError {
    SkillportError::OverlappingPaths {
        source_path: source.display().to_string(),
        destination: destination.display().to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SkillportError {
    SkillportError::IoError {
        message: message.into(),
    }
}

/// Maps an `io::Error` raised while reading `path`
pub fn read_error(path: &Path, e: std::io::Error) -> SkillportError {
    read_failed(path.display().to_string(), e.to_string())
}

/// Maps an `io::Error` raised while writing `path`
pub fn write_error(path: &Path, e: std::io::Error) -> SkillportError {
    write_failed(path.display().to_string(), e.to_string())
}
