//! Named parameters available to every template

use crate::config::ProjectConfig;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Go toolchain version targeted by go.mod and CI
pub const GO_VERSION: &str = "1.21";

pub const COBRA_MODULE: &str = "github.com/spf13/cobra";
pub const COBRA_VERSION: &str = "v1.9.1";
pub const VIPER_MODULE: &str = "github.com/spf13/viper";
pub const VIPER_VERSION: &str = "v1.19.0";
pub const GIN_MODULE: &str = "github.com/gin-gonic/gin";
pub const GIN_VERSION: &str = "v1.10.0";

/// A `require` line in go.mod
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub path: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub name: String,
    /// `name` escaped for use inside a Go string literal
    pub name_escaped: String,
    pub module: String,
    pub description: String,
    /// `description` as a quoted Go string literal
    pub description_literal: String,
    pub author: String,
    pub license: String,
    pub year: i32,
    pub binary_name: String,
    pub package_name: String,
    pub go_version: &'static str,

    pub create_makefile: bool,
    pub use_git_hooks: bool,
    pub use_cobra: bool,
    pub use_viper: bool,
    pub use_gin: bool,

    pub requires: Vec<Requirement>,
}

impl TemplateContext {
    pub fn new(cfg: &ProjectConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            name: cfg.name.clone(),
            name_escaped: go_string_escape(&cfg.name),
            module: cfg.module.clone(),
            description: cfg.description.clone(),
            description_literal: go_string_literal(&cfg.description),
            author: cfg.author.clone(),
            license: cfg.license.clone(),
            year: generated_at.year(),
            binary_name: cfg.binary_name(),
            package_name: cfg.package_name(),
            go_version: GO_VERSION,
            create_makefile: cfg.create_makefile,
            use_git_hooks: cfg.use_git_hooks,
            use_cobra: cfg.use_cobra,
            use_viper: cfg.use_viper,
            use_gin: cfg.use_gin,
            requires: requirements(cfg),
        }
    }
}

/// Dependency pins for the enabled frameworks, in go.mod order
pub fn requirements(cfg: &ProjectConfig) -> Vec<Requirement> {
    [
        (cfg.use_cobra, COBRA_MODULE, COBRA_VERSION),
        (cfg.use_viper, VIPER_MODULE, VIPER_VERSION),
        (cfg.use_gin, GIN_MODULE, GIN_VERSION),
    ]
    .into_iter()
    .filter(|(enabled, _, _)| *enabled)
    .map(|(_, path, version)| Requirement { path, version })
    .collect()
}

fn go_string_literal(value: &str) -> String {
    format!("\"{}\"", go_string_escape(value))
}

fn go_string_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
