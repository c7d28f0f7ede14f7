//! Per-type source code generators

use super::plan::{render, GeneratedFile};
use crate::config::{ProjectConfig, ProjectType};
use crate::error::Result;
use crate::templates::{embedded, TemplateContext, TemplateRenderer};
use std::path::Path;

/// Produces the type-specific source files for a project
pub type CodeGenerator =
    fn(&ProjectConfig, &TemplateRenderer, &TemplateContext) -> Result<Vec<GeneratedFile>>;

pub fn generator_for(project_type: ProjectType) -> CodeGenerator {
    match project_type {
        ProjectType::Cli => cli_files,
        ProjectType::Api => api_files,
        ProjectType::Library => library_files,
        ProjectType::Default => default_files,
    }
}

/// `cmd/<name>/main.go` plus a cobra root and version command
///
/// CLI projects always get cobra code; `use_cobra` only controls go.mod.
fn cli_files(
    cfg: &ProjectConfig,
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
) -> Result<Vec<GeneratedFile>> {
    let app_dir = Path::new("cmd").join(&cfg.name);
    let cmd_dir = app_dir.join("cmd");

    Ok(vec![
        render(renderer, ctx, embedded::CLI_MAIN, app_dir.join("main.go"))?,
        render(renderer, ctx, embedded::CLI_ROOT, cmd_dir.join("root.go"))?,
        render(renderer, ctx, embedded::CLI_VERSION, cmd_dir.join("version.go"))?,
    ])
}

fn api_files(
    cfg: &ProjectConfig,
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
) -> Result<Vec<GeneratedFile>> {
    let server = if cfg.use_gin {
        embedded::API_SERVER_GIN
    } else {
        embedded::API_SERVER_HTTP
    };

    Ok(vec![
        render(
            renderer,
            ctx,
            embedded::API_MAIN,
            Path::new("cmd").join(&cfg.name).join("main.go"),
        )?,
        render(
            renderer,
            ctx,
            embedded::API_CONFIG,
            Path::new("internal").join("config").join("config.go"),
        )?,
        render(
            renderer,
            ctx,
            server,
            Path::new("internal").join("api").join("server.go"),
        )?,
    ])
}

fn library_files(
    cfg: &ProjectConfig,
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
) -> Result<Vec<GeneratedFile>> {
    let pkg_dir = Path::new("pkg").join(&cfg.name);

    Ok(vec![
        render(
            renderer,
            ctx,
            embedded::LIBRARY_SOURCE,
            pkg_dir.join(format!("{}.go", cfg.name)),
        )?,
        render(
            renderer,
            ctx,
            embedded::LIBRARY_TEST,
            pkg_dir.join(format!("{}_test.go", cfg.name)),
        )?,
    ])
}

fn default_files(
    _cfg: &ProjectConfig,
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
) -> Result<Vec<GeneratedFile>> {
    Ok(vec![render(renderer, ctx, embedded::DEFAULT_MAIN, "main.go")?])
}
