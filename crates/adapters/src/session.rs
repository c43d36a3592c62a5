// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Embedded interpreter session.
//!
//! One session is opened per build attempt and dropped when the attempt
//! ends; dropping the session releases the interpreter's resources, so
//! teardown runs exactly once on every exit path.

use slate_core::Value;
use std::path::Path;
use thiserror::Error;

/// Errors from interpreter sessions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The interpreter could not be initialized.
    #[error("can't start interpreter: {0}")]
    Init(String),

    /// The submitted source failed to compile or run.
    ///
    /// Not pipeline-fatal: the interpreter is expected to have written
    /// the details to its error output channel.
    #[error("script execution failed: {0}")]
    Execution(String),

    /// A message send to a global object failed.
    #[error("can't send '{selector}' to '{receiver}': {reason}")]
    Send {
        receiver: String,
        selector: String,
        reason: String,
    },
}

/// Output captured during interpreter execution, split into the two
/// channels the interpreter accumulates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputChunk {
    pub out: String,
    pub err: String,
}

impl OutputChunk {
    pub fn is_empty(&self) -> bool {
        self.out.is_empty() && self.err.is_empty()
    }
}

/// Factory for interpreter sessions.
pub trait Interpreter {
    type Session: InterpreterSession;

    /// Initialize a fresh interpreter instance.
    fn open(&self) -> Result<Self::Session, SessionError>;
}

/// One live interpreter instance.
///
/// Implementations backed by interpreters that accumulate output in
/// global bindings should read and reset those bindings in
/// [`InterpreterSession::drain_output`]; the pipeline itself never
/// touches interpreter globals for output capture.
pub trait InterpreterSession {
    /// Submit a complete compilation unit for execution.
    ///
    /// `base_dir` is the directory relative paths inside the program
    /// resolve against (the script's directory, when it has one). The
    /// process working directory is never changed.
    fn execute(&mut self, source: &str, base_dir: Option<&Path>) -> Result<(), SessionError>;

    /// Read a global binding. `None` when unbound.
    fn global(&self, name: &str) -> Option<Value>;

    /// Bind a global to a value.
    fn set_global(&mut self, name: &str, value: Value);

    /// Send a unary message to the object bound to the global `receiver`.
    fn send(&mut self, receiver: &str, selector: &str) -> Result<(), SessionError>;

    /// Take everything written to the output channels since the last
    /// drain, leaving both channels empty.
    fn drain_output(&mut self) -> OutputChunk;
}
