//! Install command implementation
//!
//! Resolves the bundle and the install target, runs the installer against
//! the real `PATH` and process runner, then prints a summary.

use crate::cli::InstallArgs;
use crate::commands::helpers::resolve_dir;
use crate::config::Settings;
use crate::error::Result;
use crate::installer::{Bundle, InstallOptions, InstallReport, Installer, Registration};
use crate::tools::{PathLocator, SystemRunner};
use crate::ui;

/// Run install command
pub fn run(args: InstallArgs) -> Result<()> {
    let settings = Settings::resolve(args.target.dir.as_deref())?;
    let bundle = Bundle::new(resolve_dir(args.bundle.as_deref())?);
    let options = InstallOptions {
        update: args.update,
        sync: args
            .sync
            .as_deref()
            .map(|project| resolve_dir(Some(project)))
            .transpose()?,
    };

    ui::step(format!(
        "Installing {} into {}",
        bundle.root().display(),
        settings.target_dir.display()
    ));

    let report = Installer::new(&settings, &PathLocator, &SystemRunner).run(&bundle, &options)?;
    print_summary(&report);

    Ok(())
}

fn print_summary(report: &InstallReport) {
    match &report.backup {
        Some(dir) => ui::success(format!("Backed up previous install to {}", dir.display())),
        None => ui::note("Nothing to back up"),
    }
    ui::success(format!(
        "Installed AGENTS.md, skills/ and scripts/ into {}",
        report.target.display()
    ));
    if report.scripts_marked > 0 {
        ui::note(format!("{} script(s) marked executable", report.scripts_marked));
    }
    if report.runtime_config_created {
        ui::success("Created opencode.json from the bundle template");
    }

    if let Some(refresh) = &report.refresh {
        ui::note(format!(
            "{} upstream repo(s) refreshed, {} skill(s) imported",
            refresh.repos.len(),
            refresh.imported_skills.len()
        ));
        ui::note(format!("memory tool: {}", refresh.memory_tool));
    }
    match report.registration {
        Registration::Registered => ui::success("Registered the memory tool with OpenCode"),
        Registration::NotInstalled => ui::note("Memory tool not found, registration skipped"),
        Registration::Failed => {}
    }

    if let Some(sync) = &report.sync {
        ui::success("Synced into project:");
        for path in sync.paths() {
            ui::note(path.display());
        }
    }
}
