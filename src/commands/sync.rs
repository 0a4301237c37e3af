//! Sync command implementation

use crate::cli::SyncArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::sync::sync_project;
use crate::ui;

/// Copy the installed router and skills into the project and its `.agent/`
pub fn run(args: SyncArgs) -> Result<()> {
    let settings = Settings::resolve(args.target.dir.as_deref())?;

    let report = sync_project(
        &settings.router_path(),
        &settings.skills_dir(),
        &args.project,
    )?;

    ui::success(format!("Synced into {}", args.project.display()));
    for path in report.paths() {
        ui::note(path.display());
    }

    Ok(())
}
