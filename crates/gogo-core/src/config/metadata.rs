//! The `gogo.yaml` record written into every generated project
//!
//! Unlike the flat config file, the metadata document groups fields by
//! concern. It is write-only: nothing reads it back automatically.

use super::{ProjectConfig, ProjectType};
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// File name of the metadata document inside a generated project
pub const METADATA_FILE: &str = "gogo.yaml";

#[derive(Debug, Serialize)]
pub struct ProjectMetadata<'a> {
    pub project: ProjectSection<'a>,
    pub structure: StructureSection,
    pub files: FilesSection,
    pub quality: QualitySection,
    pub dependencies: DependenciesSection,
    pub cicd: CicdSection,
}

#[derive(Debug, Serialize)]
pub struct ProjectSection<'a> {
    pub name: &'a str,
    pub module: &'a str,
    pub description: &'a str,
    pub license: &'a str,
    pub author: &'a str,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
}

#[derive(Debug, Serialize)]
pub struct StructureSection {
    pub use_cmd: bool,
    pub use_internal: bool,
    pub use_pkg: bool,
    pub use_test: bool,
    pub use_docs: bool,
}

#[derive(Debug, Serialize)]
pub struct FilesSection {
    pub create_readme: bool,
    pub create_license: bool,
    pub create_makefile: bool,
}

#[derive(Debug, Serialize)]
pub struct QualitySection {
    pub use_linters: bool,
    pub use_pre_commit_hooks: bool,
    pub use_git_hooks: bool,
}

#[derive(Debug, Serialize)]
pub struct DependenciesSection {
    pub use_cobra: bool,
    pub use_viper: bool,
    pub use_gin: bool,
}

#[derive(Debug, Serialize)]
pub struct CicdSection {
    pub use_github_actions: bool,
}

impl<'a> From<&'a ProjectConfig> for ProjectMetadata<'a> {
    fn from(cfg: &'a ProjectConfig) -> Self {
        Self {
            project: ProjectSection {
                name: &cfg.name,
                module: &cfg.module,
                description: &cfg.description,
                license: &cfg.license,
                author: &cfg.author,
                project_type: cfg.project_type,
            },
            structure: StructureSection {
                use_cmd: cfg.use_cmd,
                use_internal: cfg.use_internal,
                use_pkg: cfg.use_pkg,
                use_test: cfg.use_test,
                use_docs: cfg.use_docs,
            },
            files: FilesSection {
                create_readme: cfg.create_readme,
                create_license: cfg.create_license,
                create_makefile: cfg.create_makefile,
            },
            quality: QualitySection {
                use_linters: cfg.use_linters,
                use_pre_commit_hooks: cfg.use_pre_commit_hooks,
                use_git_hooks: cfg.use_git_hooks,
            },
            dependencies: DependenciesSection {
                use_cobra: cfg.use_cobra,
                use_viper: cfg.use_viper,
                use_gin: cfg.use_gin,
            },
            cicd: CicdSection {
                use_github_actions: cfg.use_github_actions,
            },
        }
    }
}

impl ProjectMetadata<'_> {
    /// Render the document, headed by a generation timestamp comment
    pub fn render(&self, generated_at: DateTime<Utc>) -> Result<String> {
        let body = serde_yaml::to_string(self)?;
        Ok(format!(
            "# gogo project configuration\n# Generated by gogo on {}\n\n{}",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            body
        ))
    }
}
