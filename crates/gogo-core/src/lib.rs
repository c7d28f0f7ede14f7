//! gogo core - scaffolding for Go projects
//!
//! This library turns a [`ProjectConfig`] into a ready-to-build Go project
//! tree. It backs the `gogo` binary but can be driven directly.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Model** - `ProjectConfig`, presets, flat config files and the `gogo.yaml` record
//! - **Layer 2: Engine** - template rendering, plan resolution and the plan writer
//! - **Layer 3: CLI/TUI Interface** - `new` command options and the cliclack wizard (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based wizard
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use gogo_core::{generate, ProjectConfig, ProjectType};
//!
//! let mut cfg = ProjectConfig::for_type(ProjectType::Cli);
//! cfg.name = "demo".to_string();
//! cfg.module = "github.com/acme/demo".to_string();
//!
//! let project = generate(&cfg, ".").await?;
//! println!("created {}", project.project_dir.display());
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod templates;
pub mod toolchain;
pub mod tui;

use colored::Colorize;
use std::fmt::Display;

// Re-export main types for convenience
pub use config::{ProjectConfig, ProjectType};
pub use error::{Result, ScaffoldError};
pub use generator::{generate, generate_at, resolve, GeneratedProject, ProjectPlan};
pub use tui::NewArgs;

#[cfg(feature = "tui")]
pub use tui::run;

/// Soft failure on stderr; generation carries on
pub(crate) fn warn(message: impl Display) {
    eprintln!("{} {}", "Warning:".yellow(), message);
}
