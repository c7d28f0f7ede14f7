//! Resolution of a project config into an ordered plan of directories and files

use super::kinds;
use crate::config::metadata::METADATA_FILE;
use crate::config::{is_known_license, ProjectConfig, ProjectMetadata};
use crate::error::{Result, ScaffoldError};
use crate::templates::{embedded, TemplateContext, TemplateRenderer};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Placeholder dropped into otherwise empty structural directories
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// Optional top-level directories, in creation order
const STRUCTURE: &[(&str, fn(&ProjectConfig) -> bool)] = &[
    ("cmd", |cfg: &ProjectConfig| cfg.use_cmd),
    ("internal", |cfg: &ProjectConfig| cfg.use_internal),
    ("pkg", |cfg: &ProjectConfig| cfg.use_pkg),
    ("docs", |cfg: &ProjectConfig| cfg.use_docs),
    ("test", |cfg: &ProjectConfig| cfg.use_test),
];

/// A file to write, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
    pub executable: bool,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            executable: false,
        }
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    /// Directory relative to the project directory; empty for the root itself
    Directory(PathBuf),
    File(GeneratedFile),
}

/// Ordered list of everything a generation run writes
///
/// No two files share a path.
#[derive(Debug, Default)]
pub struct ProjectPlan {
    entries: Vec<PlanEntry>,
    file_paths: HashSet<PathBuf>,
}

impl ProjectPlan {
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(PlanEntry::Directory(path.into()));
    }

    pub fn add_file(&mut self, file: GeneratedFile) -> Result<()> {
        if !self.file_paths.insert(file.path.clone()) {
            return Err(ScaffoldError::Validation(format!(
                "duplicate output path: {}",
                file.path.display()
            )));
        }
        self.entries.push(PlanEntry::File(file));
        Ok(())
    }

    pub fn extend(&mut self, files: impl IntoIterator<Item = GeneratedFile>) -> Result<()> {
        for file in files {
            self.add_file(file)?;
        }
        Ok(())
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.entries.iter().filter_map(|entry| match entry {
            PlanEntry::File(file) => Some(file),
            PlanEntry::Directory(_) => None,
        })
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        let path = path.as_ref();
        self.files().find(|f| f.path == path)
    }

    pub fn contains_file(&self, path: impl AsRef<Path>) -> bool {
        self.file_paths.contains(path.as_ref())
    }

    pub fn file_count(&self) -> usize {
        self.file_paths.len()
    }
}

/// Resolve `cfg` into the full plan for one project
///
/// Pure apart from warnings: the same config and timestamp always yield the
/// same plan.
pub fn resolve(cfg: &ProjectConfig, generated_at: DateTime<Utc>) -> Result<ProjectPlan> {
    cfg.validate()?;

    let renderer = TemplateRenderer::new()?;
    let ctx = TemplateContext::new(cfg, generated_at);
    let mut plan = ProjectPlan::default();

    plan.add_dir(PathBuf::new());
    plan.add_file(GeneratedFile::new(
        METADATA_FILE,
        ProjectMetadata::from(cfg).render(generated_at)?,
    ))?;
    plan.extend(root_files(cfg, &renderer, &ctx)?)?;

    // Everything below structural directories is known before they are
    // created, so placeholders only go where nothing else will
    let mut later = kinds::generator_for(cfg.project_type)(cfg, &renderer, &ctx)?;
    later.push(render(&renderer, &ctx, embedded::GO_MOD, "go.mod")?);
    later.extend(workflow_files(cfg, &renderer, &ctx)?);
    later.extend(quality_files(cfg, &renderer, &ctx)?);

    for (dir, enabled) in STRUCTURE {
        if !enabled(cfg) {
            continue;
        }
        plan.add_dir(*dir);
        if !later.iter().any(|f| f.path.starts_with(dir)) {
            plan.add_file(GeneratedFile::new(
                Path::new(dir).join(PLACEHOLDER_FILE),
                "",
            ))?;
        }
    }

    plan.extend(later)?;
    Ok(plan)
}

pub(crate) fn render(
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
    template: &str,
    path: impl Into<PathBuf>,
) -> Result<GeneratedFile> {
    Ok(GeneratedFile::new(path, renderer.render(template, ctx)?))
}

fn root_files(
    cfg: &ProjectConfig,
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::new();

    if cfg.create_readme {
        files.push(render(renderer, ctx, embedded::README, "README.md")?);
    }

    if cfg.wants_license_file() {
        if !is_known_license(&cfg.license) {
            crate::warn(format!(
                "Unrecognized license '{}', writing a generic LICENSE",
                cfg.license
            ));
        }
        let template = match cfg.license.as_str() {
            "MIT" => embedded::LICENSE_MIT,
            _ => embedded::LICENSE_GENERIC,
        };
        files.push(render(renderer, ctx, template, "LICENSE")?);
    }

    files.push(render(renderer, ctx, embedded::GITIGNORE, ".gitignore")?);

    if cfg.create_makefile {
        files.push(render(renderer, ctx, embedded::MAKEFILE, "Makefile")?);
    }

    Ok(files)
}

fn workflow_files(
    cfg: &ProjectConfig,
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
) -> Result<Vec<GeneratedFile>> {
    if !cfg.use_github_actions {
        return Ok(Vec::new());
    }

    let workflows = Path::new(".github").join("workflows");
    let mut files = vec![render(
        renderer,
        ctx,
        embedded::CI_WORKFLOW,
        workflows.join("ci.yml"),
    )?];
    if cfg.use_linters {
        files.push(render(
            renderer,
            ctx,
            embedded::LINT_WORKFLOW,
            workflows.join("lint.yml"),
        )?);
    }
    Ok(files)
}

fn quality_files(
    cfg: &ProjectConfig,
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::new();

    if cfg.use_linters {
        files.push(render(renderer, ctx, embedded::GOLANGCI, ".golangci.yml")?);
    }

    if cfg.use_pre_commit_hooks {
        files.push(render(
            renderer,
            ctx,
            embedded::PRE_COMMIT,
            ".pre-commit-config.yaml",
        )?);
        files.push(render(
            renderer,
            ctx,
            embedded::COMMITLINT,
            ".commitlintrc.yaml",
        )?);
    }

    if cfg.use_git_hooks {
        let hooks = Path::new(".githooks");
        files.push(
            render(
                renderer,
                ctx,
                embedded::GITHOOK_PRE_COMMIT,
                hooks.join("pre-commit"),
            )?
            .executable(),
        );
        files.push(
            render(
                renderer,
                ctx,
                embedded::GITHOOK_COMMIT_MSG,
                hooks.join("commit-msg"),
            )?
            .executable(),
        );
    }

    Ok(files)
}
