//! Skillport - OpenCode config bundle deployer
//!
//! Installs a bundle (router document, skills tree, scripts tree) into the
//! OpenCode configuration directory with timestamped backups, and mirrors
//! the installed files into projects by symlink or by copy.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod backup;
mod cli;
mod commands;
mod config;
mod error;
mod fs_ops;
mod git;
mod installer;
mod link;
mod logging;
mod sync;
#[cfg(test)]
mod test_fixtures;
mod tools;
mod ui;
mod upstream;

use cli::{Cli, Commands};
use error::SkillportError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args),
        Commands::Link(args) => commands::link::run(args),
        Commands::Sync(args) => commands::sync::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

fn report_error(e: &SkillportError) {
    if matches!(e, SkillportError::LinkConflict { .. }) {
        ui::warn(e);
    } else {
        eprintln!("Error: {e}");
    }
    if let Some(help) = e.help() {
        eprintln!("  {} {help}", Style::new().dim().apply_to("help:"));
    }
}
