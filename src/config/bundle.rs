//! Bundle settings (skillport.yaml)
//!
//! Every key is optional. A bundle without `skillport.yaml` gets the
//! defaults below, which describe the stock OpenCode bundle: two upstream
//! repositories, the `engram` memory tool and the `opencode.json` runtime
//! config template.

use std::path::Path;

use serde::Deserialize;

use crate::error::config::{invalid, invalid_pattern, parse_failed, read_failed};
use crate::error::{Result, SkillportError};

/// Bundle settings from skillport.yaml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleSettings {
    /// Repositories refreshed by `install --update`, in order
    pub upstream: Vec<UpstreamRepo>,

    /// The external memory tool
    pub memory_tool: MemoryToolSettings,

    /// Runtime config file seeded from a template on first install
    pub runtime_config: RuntimeConfigSettings,
}

/// An upstream repository cloned into the cache
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamRepo {
    /// Cache subdirectory name
    pub name: String,

    /// Clone URL
    pub url: String,

    /// Glob matched against entry names of the repository's `skills/`
    /// directory; matching entries are copied into the bundle
    #[serde(default)]
    pub skills: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryToolSettings {
    /// Executable name looked up on PATH
    pub binary: String,

    /// Arguments of the self-registration subcommand
    pub register: Vec<String>,

    /// Package manager used to install the binary
    pub package_manager: String,

    /// Shell snippet that installs the package manager itself
    pub package_manager_bootstrap: Option<String>,

    /// Package name passed to `<package_manager> install`
    pub package: String,

    /// Toolchain used for the source build fallback
    pub source_builder: String,

    /// Module passed to `<source_builder> install`
    pub source_module: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfigSettings {
    /// File name inside the install target
    pub file: String,

    /// Template file name inside the bundle
    pub template: String,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            upstream: vec![
                UpstreamRepo {
                    name: "engram".to_string(),
                    url: "https://github.com/Gentleman-Programming/engram.git".to_string(),
                    skills: None,
                },
                UpstreamRepo {
                    name: "agent-teams-lite".to_string(),
                    url: "https://github.com/Gentleman-Programming/agent-teams-lite.git"
                        .to_string(),
                    skills: Some("sdd-*".to_string()),
                },
            ],
            memory_tool: MemoryToolSettings::default(),
            runtime_config: RuntimeConfigSettings::default(),
        }
    }
}

impl Default for MemoryToolSettings {
    fn default() -> Self {
        Self {
            binary: "engram".to_string(),
            register: vec!["setup".to_string(), "opencode".to_string()],
            package_manager: "brew".to_string(),
            package_manager_bootstrap: Some(
                "NONINTERACTIVE=1 /bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\""
                    .to_string(),
            ),
            package: "gentleman-programming/tap/engram".to_string(),
            source_builder: "go".to_string(),
            source_module: "github.com/Gentleman-Programming/engram/cmd/engram@latest".to_string(),
        }
    }
}

impl Default for RuntimeConfigSettings {
    fn default() -> Self {
        Self {
            file: "opencode.json".to_string(),
            template: "opencode.template.json".to_string(),
        }
    }
}

impl BundleSettings {
    /// Parse bundle settings from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would only fail halfway through an install
    pub fn validate(&self) -> Result<()> {
        let mut names = std::collections::HashSet::new();

        for repo in &self.upstream {
            let mut components = Path::new(&repo.name).components();
            let single_component = matches!(
                (components.next(), components.next()),
                (Some(std::path::Component::Normal(_)), None)
            );
            if !single_component {
                return Err(invalid(format!(
                    "upstream name '{}' must be a plain directory name",
                    repo.name
                )));
            }
            if !names.insert(repo.name.as_str()) {
                return Err(invalid(format!("upstream '{}' is listed twice", repo.name)));
            }
            if let Some(pattern) = &repo.skills {
                wax::Glob::new(pattern).map_err(|e| invalid_pattern(pattern, e.to_string()))?;
            }
        }

        if self.memory_tool.binary.trim().is_empty() {
            return Err(invalid("memory_tool.binary must not be empty"));
        }

        Ok(())
    }

    /// Load `path` if it exists, otherwise return the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content).map_err(|e| match e {
            SkillportError::ConfigParseFailed { reason, .. } => {
                parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }
}
