//! CLI definitions using clap derive API
//!
//! One submodule per command's argument types:
//! - install: Install command arguments
//! - project: Link and sync command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod project;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use project::{LinkArgs, SyncArgs};

/// Skillport - OpenCode config bundle deployer
#[derive(Parser, Debug)]
#[command(
    name = "skillport",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Deploy an OpenCode config bundle (router, skills, scripts)",
    long_about = "Skillport installs a bundle of AGENTS.md, skills/ and scripts/ into the \
                  OpenCode configuration directory, keeping a timestamped backup of whatever \
                  was there before, and mirrors the result into projects.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skillport install                     \x1b[90m# Install the bundle in the current directory\x1b[0m\n   \
                  skillport install --update            \x1b[90m# Refresh from upstream, then install\x1b[0m\n   \
                  skillport install --sync ~/src/app    \x1b[90m# Install and mirror into a project\x1b[0m\n   \
                  skillport link ~/src/app              \x1b[90m# Symlink the global AGENTS.md into a project\x1b[0m\n   \
                  skillport sync ~/src/app              \x1b[90m# Copy AGENTS.md and skills/ into a project\x1b[0m\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the bundle into the OpenCode config directory
    Install(InstallArgs),

    /// Symlink the installed AGENTS.md into a project
    Link(LinkArgs),

    /// Copy the installed AGENTS.md and skills/ into a project and its .agent/
    Sync(SyncArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Install target override shared by every command that touches it
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Install target directory [default: ~/.config/opencode]
    #[arg(long = "target", value_name = "TARGET_DIR", env = "SKILLPORT_TARGET_DIR")]
    pub dir: Option<PathBuf>,
}
