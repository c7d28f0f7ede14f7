//! Project configuration model
//!
//! A [`ProjectConfig`] captures everything the generator needs to know about the
//! project being scaffolded. It is built once per run from the baseline, from a
//! project type preset, or from a saved config file, then adjusted by the wizard
//! or command-line overrides and handed read-only to the generator.

pub mod file;
pub mod metadata;

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

pub use metadata::ProjectMetadata;

/// License choices offered by the wizard
pub const LICENSE_OPTIONS: &[&str] = &["MIT", "Apache-2.0", "GPL-3.0", "BSD-3-Clause", "None"];

/// License value that suppresses the LICENSE file
pub const LICENSE_NONE: &str = "None";

/// Whether a license value is one the wizard offers
pub fn is_known_license(license: &str) -> bool {
    LICENSE_OPTIONS.contains(&license)
}

/// Kind of project to scaffold
///
/// Selects which initial code is generated and which preset is applied.
/// Unknown names coming from files or flags degrade to [`ProjectType::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    #[default]
    Default,
    Cli,
    Api,
    Library,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Default,
        ProjectType::Cli,
        ProjectType::Api,
        ProjectType::Library,
    ];

    /// Parse a type tag, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "cli" => Some(Self::Cli),
            "api" => Some(Self::Api),
            "library" | "lib" => Some(Self::Library),
            _ => None,
        }
    }

    /// Parse a type tag, warning and falling back to `default` when unknown
    pub fn from_name_lossy(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            crate::warn(format!(
                "Unknown project type '{}', using '{}'",
                name,
                Self::Default
            ));
            Self::Default
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Default => "default",
            ProjectType::Cli => "cli",
            ProjectType::Api => "api",
            ProjectType::Library => "library",
        }
    }

    /// One-line hint shown next to the type in the wizard
    pub fn description(&self) -> &'static str {
        match self {
            ProjectType::Default => "Generic Go project",
            ProjectType::Cli => "Command-line application (includes Cobra and Viper)",
            ProjectType::Api => "API/Web service (includes Gin)",
            ProjectType::Library => "Library/Package (no cmd directory)",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ProjectType {
    fn from(name: String) -> Self {
        Self::from_name_lossy(&name)
    }
}

impl From<ProjectType> for String {
    fn from(project_type: ProjectType) -> Self {
        project_type.as_str().to_string()
    }
}

/// Configuration for a generated project
///
/// Serialized with flat field names; this is the format read by `--config`.
/// Fields absent from a file take their zero value rather than the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "ProjectConfig::zeroed")]
pub struct ProjectConfig {
    // General project information
    pub name: String,
    pub module: String,
    pub description: String,
    pub license: String,
    pub author: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,

    // Project structure options
    pub use_cmd: bool,
    pub use_internal: bool,
    pub use_pkg: bool,
    pub use_test: bool,
    pub use_docs: bool,
    pub create_readme: bool,
    pub create_license: bool,
    pub create_makefile: bool,

    // Code quality tools
    pub use_linters: bool,
    pub use_pre_commit_hooks: bool,
    pub use_git_hooks: bool,

    // Dependencies
    pub use_cobra: bool,
    pub use_viper: bool,
    pub use_gin: bool,

    // CI/CD
    pub use_github_actions: bool,
}

impl Default for ProjectConfig {
    /// Baseline configuration: every structural, file and tooling option on,
    /// no framework dependencies, MIT license
    fn default() -> Self {
        Self {
            name: "my-project".to_string(),
            module: "github.com/username/my-project".to_string(),
            description: "A Go project".to_string(),
            license: "MIT".to_string(),
            author: String::new(),
            project_type: ProjectType::Default,
            use_cmd: true,
            use_internal: true,
            use_pkg: true,
            use_test: true,
            use_docs: true,
            create_readme: true,
            create_license: true,
            create_makefile: true,
            use_linters: true,
            use_pre_commit_hooks: true,
            use_git_hooks: true,
            use_cobra: false,
            use_viper: false,
            use_gin: false,
            use_github_actions: true,
        }
    }
}

impl ProjectConfig {
    /// All strings empty, all flags off
    pub fn zeroed() -> Self {
        Self {
            name: String::new(),
            module: String::new(),
            description: String::new(),
            license: String::new(),
            author: String::new(),
            project_type: ProjectType::Default,
            use_cmd: false,
            use_internal: false,
            use_pkg: false,
            use_test: false,
            use_docs: false,
            create_readme: false,
            create_license: false,
            create_makefile: false,
            use_linters: false,
            use_pre_commit_hooks: false,
            use_git_hooks: false,
            use_cobra: false,
            use_viper: false,
            use_gin: false,
            use_github_actions: false,
        }
    }

    /// Baseline configuration with the preset for `project_type` applied
    pub fn for_type(project_type: ProjectType) -> Self {
        let mut cfg = Self::default();
        cfg.apply_preset(project_type);
        cfg
    }

    /// Like [`ProjectConfig::for_type`], but from a type tag; unknown tags
    /// yield the baseline
    pub fn for_type_name(name: &str) -> Self {
        Self::for_type(ProjectType::from_name_lossy(name))
    }

    /// Set the project type and apply its preset deltas
    ///
    /// Presets are only applied here, at selection time. Assigning
    /// `project_type` directly never touches the dependent flags.
    pub fn apply_preset(&mut self, project_type: ProjectType) {
        self.project_type = project_type;
        match project_type {
            ProjectType::Cli => {
                self.use_cobra = true;
                self.use_viper = true;
            }
            ProjectType::Api => {
                self.use_gin = true;
            }
            ProjectType::Library => {
                self.use_cmd = false;
            }
            ProjectType::Default => {}
        }
    }

    /// Lower-cased name, used for the binary and derived identifiers
    pub fn binary_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Name reduced to a valid Go package identifier
    pub fn package_name(&self) -> String {
        let ident: String = self
            .name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match ident.chars().next() {
            None => "app".to_string(),
            Some(c) if c.is_ascii_digit() => format!("pkg{}", ident),
            Some(_) => ident,
        }
    }

    /// Whether a LICENSE file will be written
    pub fn wants_license_file(&self) -> bool {
        self.create_license && self.license != LICENSE_NONE
    }

    /// Presence checks run before generation
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ScaffoldError::Validation(
                "project name is required".to_string(),
            ));
        }
        // The name becomes exactly one directory under the output root
        let mut components = Path::new(&self.name).components();
        let single_dir = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_dir || self.name.contains('/') || self.name.contains('\\') {
            return Err(ScaffoldError::Validation(format!(
                "project name '{}' must be a single directory name",
                self.name
            )));
        }
        Ok(())
    }
}
