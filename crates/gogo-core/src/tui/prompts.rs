//! Charm-style wizard for `gogo new` using cliclack

use super::args::{next_steps, NewArgs};
use crate::config::{ProjectConfig, ProjectType, LICENSE_OPTIONS};
use crate::error::ScaffoldError;
use crate::generator::{self, GeneratedProject};
use crate::toolchain;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::Path;

/// Run the `new` command: optional wizard, then generation
pub async fn run(args: NewArgs) -> Result<()> {
    cliclack::intro("gogo")?;

    let mut cfg = args.resolve_config()?;

    if !args.skip_wizard {
        match run_wizard(&mut cfg) {
            Ok(()) => {}
            Err(e) if is_cancelled(&e) => {
                cliclack::outro_cancel("Project generation cancelled")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }

    cfg.validate()?;

    if let Some(path) = &args.save_config {
        cfg.save(path)
            .with_context(|| format!("Failed to save config to {}", path.display()))?;
        cliclack::log::info(format!("Saved configuration to {}", path.display()))?;
    }

    if args.dry_run {
        print_plan(&cfg, &args.output)?;
        cliclack::outro("Dry run complete, nothing was written")?;
        return Ok(());
    }

    let project = create_project(&cfg, &args.output).await?;
    report_toolchains()?;
    print_next_steps(&cfg, &project)?;

    Ok(())
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ScaffoldError>()
        .is_some_and(ScaffoldError::is_cancelled)
}

/// Esc or Ctrl-C inside a prompt surfaces as `Interrupted`
fn interact<T>(result: io::Result<T>) -> Result<T> {
    result.map_err(|e| match e.kind() {
        io::ErrorKind::Interrupted => ScaffoldError::Cancelled.into(),
        _ => anyhow::Error::new(e).context("Prompt failed"),
    })
}

fn run_wizard(cfg: &mut ProjectConfig) -> Result<()> {
    cfg.name = interact(
        cliclack::input("Project name")
            .default_input(&cfg.name)
            .interact(),
    )?;

    cfg.module = interact(
        cliclack::input("Go module path")
            .default_input(&cfg.module)
            .interact(),
    )?;

    cfg.description = interact(
        cliclack::input("Description")
            .default_input(&cfg.description)
            .required(false)
            .interact(),
    )?;

    cfg.author = interact(
        cliclack::input("Author")
            .default_input(&cfg.author)
            .required(false)
            .interact(),
    )?;

    select_license(cfg)?;
    select_type(cfg)?;

    toggle_group(
        "Project structure",
        &mut [
            ("cmd", "cmd/", &mut cfg.use_cmd),
            ("internal", "internal/", &mut cfg.use_internal),
            ("pkg", "pkg/", &mut cfg.use_pkg),
            ("test", "test/", &mut cfg.use_test),
            ("docs", "docs/", &mut cfg.use_docs),
        ],
    )?;

    toggle_group(
        "Files",
        &mut [
            ("readme", "README.md", &mut cfg.create_readme),
            ("license", "LICENSE", &mut cfg.create_license),
            ("makefile", "Makefile", &mut cfg.create_makefile),
        ],
    )?;

    toggle_group(
        "Code quality",
        &mut [
            ("linters", "golangci-lint config", &mut cfg.use_linters),
            ("pre-commit", "pre-commit hooks", &mut cfg.use_pre_commit_hooks),
            ("git-hooks", "git hooks (.githooks)", &mut cfg.use_git_hooks),
        ],
    )?;

    toggle_group(
        "Dependencies",
        &mut [
            ("cobra", "Cobra (CLI framework)", &mut cfg.use_cobra),
            ("viper", "Viper (configuration)", &mut cfg.use_viper),
            ("gin", "Gin (HTTP framework)", &mut cfg.use_gin),
        ],
    )?;

    cfg.use_github_actions = interact(
        cliclack::confirm("Add GitHub Actions workflows?")
            .initial_value(cfg.use_github_actions)
            .interact(),
    )?;

    cliclack::note("Summary", summary(cfg))?;

    let confirmed = interact(
        cliclack::confirm("Generate project?")
            .initial_value(true)
            .interact(),
    )?;
    if !confirmed {
        return Err(ScaffoldError::Cancelled.into());
    }

    Ok(())
}

fn select_license(cfg: &mut ProjectConfig) -> Result<()> {
    let mut select = cliclack::select("License");
    for license in LICENSE_OPTIONS {
        select = select.item(license.to_string(), *license, "");
    }
    if !LICENSE_OPTIONS.contains(&cfg.license.as_str()) {
        select = select.item(cfg.license.clone(), &cfg.license, "from config");
    }

    cfg.license = interact(select.initial_value(cfg.license.clone()).interact())?;
    Ok(())
}

/// A different type counts as a new selection and applies its preset
fn select_type(cfg: &mut ProjectConfig) -> Result<()> {
    let mut select = cliclack::select("Project type");
    for project_type in ProjectType::ALL {
        select = select.item(project_type, project_type.as_str(), project_type.description());
    }

    let selected = interact(select.initial_value(cfg.project_type).interact())?;
    if selected != cfg.project_type {
        cfg.apply_preset(selected);
        cliclack::log::info(format!("Applied {} preset", selected))?;
    }
    Ok(())
}

fn toggle_group(prompt: &str, options: &mut [(&'static str, &'static str, &mut bool)]) -> Result<()> {
    let initial: Vec<&'static str> = options
        .iter()
        .filter(|(_, _, enabled)| **enabled)
        .map(|(key, _, _)| *key)
        .collect();

    let mut multi = cliclack::multiselect(prompt).required(false);
    for (key, label, _) in options.iter() {
        multi = multi.item(*key, *label, "");
    }

    let selected = interact(multi.initial_values(initial).interact())?;
    for (key, _, enabled) in options.iter_mut() {
        **enabled = selected.contains(&*key);
    }
    Ok(())
}

fn summary(cfg: &ProjectConfig) -> String {
    let on_off = |flag: bool| if flag { "yes" } else { "no" };
    let structure: Vec<&str> = [
        ("cmd", cfg.use_cmd),
        ("internal", cfg.use_internal),
        ("pkg", cfg.use_pkg),
        ("test", cfg.use_test),
        ("docs", cfg.use_docs),
    ]
    .into_iter()
    .filter_map(|(dir, enabled)| enabled.then_some(dir))
    .collect();

    format!(
        "Name:         {}\nModule:       {}\nType:         {}\nLicense:      {}\n\
         Directories:  {}\nLinters:      {}\nCobra/Viper:  {}/{}\nGin:          {}\n\
         CI:           {}",
        cfg.name,
        cfg.module,
        cfg.project_type,
        cfg.license,
        if structure.is_empty() {
            "none".to_string()
        } else {
            structure.join(", ")
        },
        on_off(cfg.use_linters),
        on_off(cfg.use_cobra),
        on_off(cfg.use_viper),
        on_off(cfg.use_gin),
        on_off(cfg.use_github_actions),
    )
}

fn print_plan(cfg: &ProjectConfig, output: &Path) -> Result<()> {
    let plan = generator::resolve(cfg, chrono::Utc::now())?;
    let project_dir = output.join(&cfg.name);

    println!();
    println!(
        "  {} {}",
        "Would create".bold(),
        project_dir.display().to_string().cyan()
    );
    for file in plan.files() {
        println!("    {}", file.path.display());
    }
    println!();

    Ok(())
}

async fn create_project(cfg: &ProjectConfig, output: &Path) -> Result<GeneratedProject> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match generator::generate(cfg, output).await {
        Ok(project) => {
            spinner.stop(format!(
                "Created {} files in {}",
                project.files.len(),
                project.project_dir.display()
            ));
            Ok(project)
        }
        Err(e) => {
            spinner.error("Project generation failed");
            Err(e).context("Failed to generate project")
        }
    }
}

fn report_toolchains() -> Result<()> {
    for tool in toolchain::check_toolchains() {
        if tool.available {
            cliclack::log::success(tool.to_string())?;
        } else {
            cliclack::log::warning(tool.to_string())?;
        }
    }
    Ok(())
}

fn print_next_steps(cfg: &ProjectConfig, project: &GeneratedProject) -> Result<()> {
    let steps = next_steps(cfg, &project.project_dir);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
