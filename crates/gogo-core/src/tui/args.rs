use crate::config::ProjectConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Module path assigned when only a project name is given
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/username";

/// Options for the `new` command
#[derive(Debug, Clone)]
pub struct NewArgs {
    /// Project name; also the directory created under `output`
    pub name: Option<String>,

    /// Directory the project directory is created in
    pub output: PathBuf,

    /// Generate straight from flags/config without prompting
    pub skip_wizard: bool,

    /// Flat YAML config to start from; `project_type` is ignored when set
    pub config: Option<PathBuf>,

    /// Project type preset (cli, api, library, default)
    pub project_type: Option<String>,

    /// Go module path, applied after everything else
    pub module: Option<String>,

    /// List the planned files without writing anything
    pub dry_run: bool,

    /// Persist the final config here before generating
    pub save_config: Option<PathBuf>,
}

impl Default for NewArgs {
    fn default() -> Self {
        Self {
            name: None,
            output: PathBuf::from("."),
            skip_wizard: false,
            config: None,
            project_type: None,
            module: None,
            dry_run: false,
            save_config: None,
        }
    }
}

impl NewArgs {
    /// Build the starting config: file or preset, then name and module overrides
    pub fn resolve_config(&self) -> Result<ProjectConfig> {
        let mut cfg = match (&self.config, &self.project_type) {
            (Some(path), project_type) => {
                if let Some(project_type) = project_type {
                    crate::warn(format!(
                        "Ignoring --type {} because a config file was given",
                        project_type
                    ));
                }
                ProjectConfig::load(path)?
            }
            (None, Some(project_type)) => ProjectConfig::for_type_name(project_type),
            (None, None) => ProjectConfig::default(),
        };

        if let Some(name) = &self.name {
            cfg.name = name.clone();
            if self.config.is_none() {
                cfg.module = format!("{}/{}", DEFAULT_MODULE_PREFIX, name);
            }
        }

        if let Some(module) = &self.module {
            cfg.module = module.clone();
        }

        Ok(cfg)
    }
}

/// Commands to run once the project exists
pub fn next_steps(cfg: &ProjectConfig, project_dir: &Path) -> Vec<String> {
    let build = if cfg.create_makefile {
        "make build"
    } else {
        "go build ./..."
    };

    vec![
        format!("cd {}", project_dir.display()),
        "git init".to_string(),
        "go mod tidy".to_string(),
        build.to_string(),
    ]
}
