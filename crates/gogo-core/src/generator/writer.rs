//! Writing a resolved plan to disk

use super::plan::{GeneratedFile, PlanEntry, ProjectPlan};
use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write every plan entry under `project_dir`, in plan order
///
/// Existing files are overwritten. The first failure aborts the run and
/// leaves earlier writes in place. Returns the relative paths written.
pub async fn write_plan(plan: &ProjectPlan, project_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(plan.file_count());

    for entry in plan.entries() {
        match entry {
            PlanEntry::Directory(dir) => {
                let target = project_dir.join(dir);
                fs::create_dir_all(&target)
                    .await
                    .map_err(|e| ScaffoldError::io(&target, e))?;
            }
            PlanEntry::File(file) => {
                write_file(file, project_dir).await?;
                written.push(file.path.clone());
            }
        }
    }

    Ok(written)
}

async fn write_file(file: &GeneratedFile, project_dir: &Path) -> Result<()> {
    let target = project_dir.join(&file.path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::io(parent, e))?;
    }

    fs::write(&target, &file.contents)
        .await
        .map_err(|e| ScaffoldError::io(&target, e))?;

    if file.executable {
        make_executable(&target).await?;
    }
    Ok(())
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .map_err(|e| ScaffoldError::io(path, e))
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
