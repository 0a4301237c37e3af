//! External tool discovery and invocation
//!
//! The package manager, the Go toolchain and the memory-tool binary are
//! opaque collaborators. Components only talk to them through these two
//! traits, so tests can swap in a scripted system.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::Result;
use crate::error::tool::command_failed;

/// Answers "is this executable available, and where?"
pub trait ToolLocator {
    fn locate(&self, name: &str) -> Option<PathBuf>;

    fn is_available(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }
}

/// Runs an external program to completion.
///
/// Output goes straight to the user's terminal; only the exit status is
/// interpreted.
pub trait CommandRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<()>;
}

/// Looks tools up on the real `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Spawns real processes with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<()> {
        let line = render_command(program, args);
        debug!(command = %line, "running");

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| command_failed(&line, e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(command_failed(line, status.to_string()))
        }
    }
}

/// Render a command line for messages
pub fn render_command(program: &Path, args: &[String]) -> String {
    std::iter::once(program.display().to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}
