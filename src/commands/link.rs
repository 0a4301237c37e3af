//! Link command implementation

use crate::cli::LinkArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::link::{LinkOutcome, link_into_project};
use crate::ui;

/// Symlink the installed router document into the project
pub fn run(args: LinkArgs) -> Result<()> {
    let settings = Settings::resolve(args.target.dir.as_deref())?;
    let router = settings.router_path();

    match link_into_project(&router, &args.project)? {
        LinkOutcome::Created(link) => ui::success(format!(
            "Linked {} -> {}",
            link.display(),
            router.display()
        )),
        LinkOutcome::AlreadyLinked(link) => {
            ui::success(format!("{} already links to {}", link.display(), router.display()));
        }
    }

    Ok(())
}
