//! Detection of the Go and git toolchains on PATH
//!
//! Advisory only: a missing tool is reported, never fatal.

use std::fmt;
use std::process::Command;

/// Toolchain detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl ToolchainInfo {
    fn missing(name: &'static str) -> Self {
        Self {
            name,
            version: None,
            available: false,
        }
    }
}

impl fmt::Display for ToolchainInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.version, self.available) {
            (Some(version), true) => write!(f, "{} ({})", self.name, version),
            (None, true) => write!(f, "{} (unknown version)", self.name),
            (_, false) => write!(f, "{} (not installed)", self.name),
        }
    }
}

fn probe(name: &'static str, program: &str, arg: &str) -> ToolchainInfo {
    match Command::new(program).arg(arg).output() {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            let version = parse_version(&stdout);
            ToolchainInfo {
                name,
                version,
                available: true,
            }
        }
        _ => ToolchainInfo::missing(name),
    }
}

/// First token that looks like a version number, without a leading `go`/`v`
///
/// Handles `go version go1.22.3 linux/amd64` and `git version 2.43.0`.
fn parse_version(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .map(|token| {
            token
                .strip_prefix("go")
                .or_else(|| token.strip_prefix('v'))
                .unwrap_or(token)
        })
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()) && token.contains('.'))
        .map(str::to_string)
}

/// Check if the Go toolchain is available
pub fn check_go() -> ToolchainInfo {
    probe("Go", "go", "version")
}

/// Check if git is available
pub fn check_git() -> ToolchainInfo {
    probe("git", "git", "--version")
}

/// Detect every toolchain a generated project uses
pub fn check_toolchains() -> Vec<ToolchainInfo> {
    vec![check_go(), check_git()]
}
