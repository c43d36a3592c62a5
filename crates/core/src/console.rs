// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console sink for build and deploy diagnostics.
//!
//! The pipeline reports to the user exclusively through this sink. Text is
//! tagged as standard or error output, though a sink may render both the
//! same way.

/// Where pipeline diagnostics go.
pub trait Console {
    /// Write standard (informational) output.
    fn write_std(&mut self, text: &str);

    /// Write error output.
    fn write_err(&mut self, text: &str);
}

/// Console that accumulates lines in memory.
///
/// Used by embedding UIs that render the transcript themselves, and by
/// tests asserting on diagnostics.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    std: String,
    err: String,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written as standard output so far.
    pub fn std(&self) -> &str {
        &self.std
    }

    /// Everything written as error output so far.
    pub fn err(&self) -> &str {
        &self.err
    }

    /// Clear both transcripts.
    pub fn clear(&mut self) {
        self.std.clear();
        self.err.clear();
    }
}

impl Console for MemoryConsole {
    fn write_std(&mut self, text: &str) {
        self.std.push_str(text);
    }

    fn write_err(&mut self, text: &str) {
        self.err.push_str(text);
    }
}

/// Console that prints to the process's stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioConsole;

impl Console for StdioConsole {
    fn write_std(&mut self, text: &str) {
        print!("{text}");
    }

    fn write_err(&mut self, text: &str) {
        eprint!("{text}");
    }
}
