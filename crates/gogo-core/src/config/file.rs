//! Loading and saving project configs with flat field names

use super::ProjectConfig;
use crate::error::{Result, ScaffoldError};
use std::io::ErrorKind;
use std::path::Path;

impl ProjectConfig {
    /// Read a config file
    ///
    /// The file is decoded as-is: fields it does not mention are left at their
    /// zero value, not merged with [`ProjectConfig::default`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ScaffoldError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ScaffoldError::io(path, e),
        })?;

        Self::from_yaml(&content).map_err(|source| ScaffoldError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config to `path`, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }

        let content = self.to_yaml()?;
        std::fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document decodes to nothing at all; treat it as all-zero
        if content.trim().is_empty() {
            return Ok(Self::zeroed());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
