//! Error types and handling for Skillport
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle and project precondition errors
//! - [`config`]: Settings errors
//! - [`fs`]: File system errors
//! - [`git`]: Git operation errors
//! - [`tool`]: External tool errors

pub mod bundle;
pub mod config;
pub mod fs;
pub mod git;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Skillport operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillportError {
    // Bundle and project errors
    #[error("Bundle at '{path}' is incomplete: missing {missing}")]
    #[diagnostic(
        code(skillport::bundle::incomplete),
        help("A bundle must contain AGENTS.md, skills/ and scripts/. Pass --bundle to point at it.")
    )]
    BundleIncomplete { path: String, missing: String },

    #[error("Source not found: {path}")]
    #[diagnostic(
        code(skillport::bundle::source_not_found),
        help("Run 'skillport install' first so the install target is populated")
    )]
    SourceNotFound { path: String },

    #[error("Project directory not found: {path}")]
    #[diagnostic(code(skillport::bundle::project_not_found))]
    ProjectNotFound { path: String },

    #[error("Refusing to replace '{path}': {reason}")]
    #[diagnostic(
        code(skillport::link::conflict),
        help("Move or delete the existing path yourself, then run the command again")
    )]
    LinkConflict { path: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(skillport::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(skillport::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(skillport::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid skill pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(skillport::config::invalid_pattern),
        help("Skill patterns are globs matched against entry names, e.g. \"sdd-*\"")
    )]
    InvalidSkillPattern { pattern: String, reason: String },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(skillport::git::clone_failed),
        help("Check that URL is correct and you have access to repository")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Failed to pull '{path}': {reason}")]
    #[diagnostic(
        code(skillport::git::fetch_failed),
        help("Delete the cached clone to force a fresh clone on the next --update")
    )]
    GitFetchFailed { path: String, reason: String },

    #[error("Failed to open repository at '{path}': {reason}")]
    #[diagnostic(code(skillport::git::open_failed))]
    GitOpenFailed { path: String, reason: String },

    // External tool errors
    #[error("Command '{command}' failed: {reason}")]
    #[diagnostic(code(skillport::tool::command_failed))]
    CommandFailed { command: String, reason: String },

    #[error("Failed to register {tool} with OpenCode: {reason}")]
    #[diagnostic(
        code(skillport::tool::registration_failed),
        help("Run the tool's setup command manually once the problem is fixed")
    )]
    ToolRegistrationFailed { tool: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(skillport::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(skillport::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Refusing to mirror '{source_path}' into '{destination}': one contains the other")]
    #[diagnostic(
        code(skillport::fs::overlapping_paths),
        help("Pick a project directory outside the installed tree")
    )]
    OverlappingPaths {
        source_path: String,
        destination: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillport::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SkillportError {
    fn from(err: std::io::Error) -> Self {
        SkillportError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SkillportError {
    fn from(err: serde_yaml::Error) -> Self {
        SkillportError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillportError>;
