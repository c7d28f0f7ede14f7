//! Error type shared by the configuration model and the generator

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by loading configs, resolving plans and writing projects
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The requested config file does not exist
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The config file is not well-formed YAML
    #[error("failed to parse config file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Missing or inconsistent input
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// A read, mkdir or write failed
    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Encode(#[from] serde_yaml::Error),

    #[error("failed to render template '{name}': {message}")]
    Template { name: String, message: String },

    /// The user backed out of the wizard
    #[error("project generation cancelled")]
    Cancelled,
}

impl ScaffoldError {
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether the error means "stop quietly" rather than "report a failure"
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
