use clap::Parser;
use std::path::PathBuf;

use super::TargetArgs;

/// Arguments for the link command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Link into the current directory:\n    skillport link\n\n\
                   Link into another project:\n    skillport link ~/src/app")]
pub struct LinkArgs {
    /// Project directory
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub project: PathBuf,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Sync into the current directory:\n    skillport sync\n\n\
                   Sync from a custom install target:\n    skillport sync ~/src/app --target /srv/opencode")]
pub struct SyncArgs {
    /// Project directory
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub project: PathBuf,

    #[command(flatten)]
    pub target: TargetArgs,
}
