// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The current script source unit.
//!
//! A script is either backed by a file on disk or held purely in memory
//! (an unnamed buffer). The build pipeline needs read-after-write
//! consistency: a dirty file-backed script is persisted and then read
//! back from disk, so the on-disk source and the compiled artifact can
//! never drift apart.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from script persistence and reads.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("can't save script to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("can't read script from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One editable source unit.
#[derive(Debug, Clone, Default)]
pub struct Script {
    path: Option<PathBuf>,
    buffer: String,
    dirty: bool,
}

impl Script {
    /// An unnamed in-memory script.
    pub fn unnamed(source: impl Into<String>) -> Self {
        Self {
            path: None,
            buffer: source.into(),
            dirty: false,
        }
    }

    /// A file-backed script with the given buffer contents.
    ///
    /// The buffer starts clean; call [`Script::set_source`] to make it
    /// dirty.
    pub fn file_backed(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            buffer: source.into(),
            dirty: false,
        }
    }

    pub fn has_file(&self) -> bool {
        self.path.is_some()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the buffer contents, marking the script dirty.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.buffer = source.into();
        self.dirty = true;
    }

    /// A copy of the in-memory buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Write the buffer to the backing file and clear the dirty flag.
    ///
    /// No-op for unnamed scripts.
    pub fn persist(&mut self) -> Result<(), ScriptError> {
        if let Some(path) = &self.path {
            fs::write(path, &self.buffer).map_err(|source| ScriptError::Save {
                path: path.clone(),
                source,
            })?;
        }
        self.dirty = false;
        Ok(())
    }

    /// Source text for assembly.
    ///
    /// File-backed scripts are persisted first if dirty, then read back
    /// from disk; unnamed scripts yield a copy of the buffer.
    pub fn read_for_build(&mut self) -> Result<String, ScriptError> {
        match self.path.clone() {
            Some(path) => {
                if self.dirty {
                    self.persist()?;
                }
                fs::read_to_string(&path).map_err(|source| ScriptError::Read { path, source })
            }
            None => Ok(self.buffer.clone()),
        }
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
