//! Project generation
//!
//! Generation happens in two phases. [`resolve`] turns a [`ProjectConfig`]
//! into an ordered [`ProjectPlan`] without touching the filesystem, then
//! [`writer::write_plan`] materializes it under `<output_root>/<name>`.

pub mod kinds;
pub mod plan;
pub mod writer;

use crate::config::ProjectConfig;
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

pub use plan::{resolve, GeneratedFile, PlanEntry, ProjectPlan, PLACEHOLDER_FILE};

/// Outcome of a successful generation run
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    /// `<output_root>/<name>`
    pub project_dir: PathBuf,
    /// Files written, relative to `project_dir`, in write order
    pub files: Vec<PathBuf>,
}

/// Generate the project described by `cfg` under `output_root`
pub async fn generate(cfg: &ProjectConfig, output_root: impl AsRef<Path>) -> Result<GeneratedProject> {
    generate_at(cfg, output_root, Utc::now()).await
}

/// Like [`generate`], with a fixed timestamp for the metadata header and license year
pub async fn generate_at(
    cfg: &ProjectConfig,
    output_root: impl AsRef<Path>,
    generated_at: DateTime<Utc>,
) -> Result<GeneratedProject> {
    let plan = resolve(cfg, generated_at)?;
    let project_dir = output_root.as_ref().join(&cfg.name);
    let files = writer::write_plan(&plan, &project_dir).await?;

    Ok(GeneratedProject { project_dir, files })
}
