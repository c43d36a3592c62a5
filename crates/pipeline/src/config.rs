// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Toolkit configuration.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the build pipeline, loaded from TOML.
///
/// Everything has a working default; a config file only overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Scratch directory for temporary package artifacts. Defaults to
    /// the per-user local data directory.
    pub scratch_dir: Option<PathBuf>,
}

impl ToolkitConfig {
    /// Parse from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// The effective scratch directory.
    pub fn scratch_dir(&self) -> PathBuf {
        if let Some(dir) = &self.scratch_dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("slate")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
