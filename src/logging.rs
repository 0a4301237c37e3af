//! Diagnostic logging
//!
//! `tracing` events go to stderr so they never mix with command output.
//! `RUST_LOG` wins when set; otherwise `--verbose` turns on debug events for
//! this crate and everything else stays at `warn`.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset
fn default_directives(verbose: bool) -> &'static str {
    if verbose { "skillport=debug,warn" } else { "warn" }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
