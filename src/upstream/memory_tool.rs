//! Making sure the memory-tool binary is installed
//!
//! Tried in order, first success wins:
//! 1. the binary is already on `PATH`
//! 2. the package manager (bootstrapped first when missing)
//! 3. a source build with the language toolchain
//!
//! Nothing here fails the install. When every route fails the user gets
//! manual instructions instead.

use std::fmt;

use tracing::debug;

use crate::config::MemoryToolSettings;
use crate::error::Result;
use crate::tools::{CommandRunner, ToolLocator};
use crate::ui;

/// Where the memory tool stands after `ensure_memory_tool`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryToolStatus {
    AlreadyInstalled,
    Installed { via: String },
    Unavailable,
}

impl fmt::Display for MemoryToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInstalled => write!(f, "already installed"),
            Self::Installed { via } => write!(f, "installed with {via}"),
            Self::Unavailable => write!(f, "not installed"),
        }
    }
}

type Attempt = fn(&MemoryToolSettings, &dyn ToolLocator, &dyn CommandRunner) -> Result<bool>;

/// Install the memory tool if it is missing
pub fn ensure_memory_tool(
    tool: &MemoryToolSettings,
    locator: &dyn ToolLocator,
    runner: &dyn CommandRunner,
) -> MemoryToolStatus {
    if locator.is_available(&tool.binary) {
        debug!(binary = %tool.binary, "memory tool already on PATH");
        return MemoryToolStatus::AlreadyInstalled;
    }

    let attempts: [(&str, Attempt); 2] = [
        (tool.package_manager.as_str(), via_package_manager),
        (tool.source_builder.as_str(), via_source_build),
    ];
    for (via, attempt) in attempts {
        // Best-effort: a failed route falls through to the next one
        match attempt(tool, locator, runner) {
            Ok(true) => {
                return MemoryToolStatus::Installed {
                    via: via.to_string(),
                };
            }
            Ok(false) => debug!(via, "route not available"),
            Err(e) => ui::warn(format!("Installing {} with {via} failed: {e}", tool.binary)),
        }
    }

    ui::warn(manual_instructions(tool));
    MemoryToolStatus::Unavailable
}

/// `Ok(false)` when the package manager is missing and cannot be bootstrapped
fn via_package_manager(
    tool: &MemoryToolSettings,
    locator: &dyn ToolLocator,
    runner: &dyn CommandRunner,
) -> Result<bool> {
    if !locator.is_available(&tool.package_manager) {
        let Some(bootstrap) = &tool.package_manager_bootstrap else {
            return Ok(false);
        };
        let Some(shell) = locator.locate("sh") else {
            return Ok(false);
        };
        ui::step(format!("Installing {}", tool.package_manager));
        runner.run(&shell, &["-c".to_string(), bootstrap.clone()])?;
    }

    let Some(package_manager) = locator.locate(&tool.package_manager) else {
        return Ok(false);
    };
    ui::step(format!("Installing {} with {}", tool.binary, tool.package_manager));
    runner.run(
        &package_manager,
        &["install".to_string(), tool.package.clone()],
    )?;
    Ok(true)
}

/// `Ok(false)` when the toolchain is missing
fn via_source_build(
    tool: &MemoryToolSettings,
    locator: &dyn ToolLocator,
    runner: &dyn CommandRunner,
) -> Result<bool> {
    let Some(builder) = locator.locate(&tool.source_builder) else {
        return Ok(false);
    };
    ui::step(format!("Building {} with {}", tool.binary, tool.source_builder));
    runner.run(&builder, &["install".to_string(), tool.source_module.clone()])?;
    Ok(true)
}

fn manual_instructions(tool: &MemoryToolSettings) -> String {
    format!(
        "{binary} could not be installed. Install it manually with `{pm} install {package}` \
         or `{builder} install {module}`, then run `{binary} {register}`.",
        binary = tool.binary,
        pm = tool.package_manager,
        package = tool.package,
        builder = tool.source_builder,
        module = tool.source_module,
        register = tool.register.join(" "),
    )
}
