use clap::Parser;
use std::path::PathBuf;

use super::TargetArgs;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install the bundle in the current directory:\n    skillport install\n\n\
                   Refresh skills and the memory tool from upstream first:\n    skillport install --update\n\n\
                   Install and mirror into the current directory:\n    skillport install --sync\n\n\
                   Install into a custom target:\n    skillport install --target /tmp/opencode")]
pub struct InstallArgs {
    /// Refresh the bundle from its upstream repositories before installing
    #[arg(long)]
    pub update: bool,

    /// After installing, copy AGENTS.md and skills/ into PROJECT_PATH and its .agent/
    /// [default when given without a value: current directory]
    #[arg(
        long,
        value_name = "PROJECT_PATH",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    pub sync: Option<PathBuf>,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Bundle directory [default: current directory]
    #[arg(long, value_name = "DIR", env = "SKILLPORT_BUNDLE_DIR")]
    pub bundle: Option<PathBuf>,
}
