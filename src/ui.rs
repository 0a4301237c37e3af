//! Terminal output
//!
//! Results and progress go to stdout, warnings to stderr. Diagnostics for
//! `--verbose` go through `tracing` instead (see `logging`).

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// A finished step, e.g. "Installed AGENTS.md"
pub fn success(message: impl std::fmt::Display) {
    println!("{} {message}", Style::new().green().bold().apply_to("✓"));
}

/// A step that is about to run
pub fn step(message: impl std::fmt::Display) {
    println!("{} {message}", Style::new().cyan().bold().apply_to("→"));
}

/// Secondary detail under a step
pub fn note(message: impl std::fmt::Display) {
    println!("  {}", Style::new().dim().apply_to(message));
}

/// Something went wrong but the command carries on
pub fn warn(message: impl std::fmt::Display) {
    eprintln!(
        "{} {message}",
        Style::new().yellow().bold().apply_to("warning:")
    );
}

/// Spinner for network operations (clone, pull)
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
