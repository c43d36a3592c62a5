// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted fakes for pipeline tests.
//!
//! [`FakeInterpreter`] stands in for the embedded interpreter: it is
//! configured with the result graph a build should observe and with the
//! output the run should produce, and it records everything the pipeline
//! asks of it. [`FakeTarget`] records remote transmissions and installs.

use crate::session::{Interpreter, InterpreterSession, OutputChunk, SessionError};
use crate::target::TargetController;
use slate_core::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Name of the root global the build pipeline inspects.
const ROOT_GLOBAL: &str = "slate";

#[derive(Debug, Default)]
struct FakeState {
    graph: Option<Value>,
    exec_error: Option<String>,
    send_error: Option<String>,
    execute_output: OutputChunk,
    send_output: OutputChunk,
    pending: OutputChunk,
    executed: Vec<(String, Option<PathBuf>)>,
    sends: Vec<(String, String)>,
    written: Vec<PathBuf>,
    opened: usize,
    closed: usize,
}

/// Interpreter fake whose sessions share one scripted state.
///
/// Clone the fake before handing it to the pipeline to keep a handle for
/// assertions.
#[derive(Debug, Clone, Default)]
pub struct FakeInterpreter {
    state: Rc<RefCell<FakeState>>,
}

impl FakeInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value the `slate` root global holds after execution.
    pub fn set_graph(&self, graph: Value) {
        self.state.borrow_mut().graph = Some(graph);
    }

    /// Make `execute` fail with an interpreter-level error. The message
    /// is also appended to the error output channel, the way a real
    /// interpreter reports script failures.
    pub fn set_exec_error(&self, message: impl Into<String>) {
        self.state.borrow_mut().exec_error = Some(message.into());
    }

    /// Output the channels accumulate during `execute`.
    pub fn set_execute_output(&self, out: impl Into<String>, err: impl Into<String>) {
        let mut state = self.state.borrow_mut();
        state.execute_output = OutputChunk {
            out: out.into(),
            err: err.into(),
        };
    }

    /// Make `writePkg` sends fail. The message is also appended to the
    /// error output channel, the way a real interpreter reports a
    /// materialization failure before raising it.
    pub fn set_send_error(&self, message: impl Into<String>) {
        self.state.borrow_mut().send_error = Some(message.into());
    }

    /// Output the channels accumulate during a `writePkg` send.
    pub fn set_send_output(&self, out: impl Into<String>, err: impl Into<String>) {
        let mut state = self.state.borrow_mut();
        state.send_output = OutputChunk {
            out: out.into(),
            err: err.into(),
        };
    }

    /// Sources submitted to `execute`, in order.
    pub fn executed_sources(&self) -> Vec<String> {
        self.state.borrow().executed.iter().map(|(s, _)| s.clone()).collect()
    }

    /// Base directories passed to `execute`, in order.
    pub fn base_dirs(&self) -> Vec<Option<PathBuf>> {
        self.state.borrow().executed.iter().map(|(_, d)| d.clone()).collect()
    }

    /// Messages sent, as (receiver, selector) pairs.
    pub fn sends(&self) -> Vec<(String, String)> {
        self.state.borrow().sends.clone()
    }

    /// Paths the fake materialized packages at.
    pub fn written_packages(&self) -> Vec<PathBuf> {
        self.state.borrow().written.clone()
    }

    pub fn sessions_opened(&self) -> usize {
        self.state.borrow().opened
    }

    pub fn sessions_closed(&self) -> usize {
        self.state.borrow().closed
    }
}

impl Interpreter for FakeInterpreter {
    type Session = FakeSession;

    fn open(&self) -> Result<FakeSession, SessionError> {
        self.state.borrow_mut().opened += 1;
        Ok(FakeSession {
            state: Rc::clone(&self.state),
            globals: HashMap::new(),
        })
    }
}

/// Session spawned by [`FakeInterpreter`].
#[derive(Debug)]
pub struct FakeSession {
    state: Rc<RefCell<FakeState>>,
    globals: HashMap<String, Value>,
}

/// Pull the generated `slate.pkgPath := "...";` assignment out of an
/// assembled compilation unit, mimicking what the default-package
/// template does with it at runtime.
fn pkg_path_assignment(source: &str) -> Option<String> {
    let rest = source.split("slate.pkgPath := \"").nth(1)?;
    rest.split('"').next().map(str::to_string)
}

impl InterpreterSession for FakeSession {
    fn execute(&mut self, source: &str, base_dir: Option<&Path>) -> Result<(), SessionError> {
        let mut state = self.state.borrow_mut();
        state
            .executed
            .push((source.to_string(), base_dir.map(Path::to_path_buf)));

        if let Some(graph) = state.graph.clone() {
            // The default-package template copies the generated path
            // assignment into the root frame unless user code set its own.
            let graph = match graph {
                Value::Frame(mut slots) => {
                    if !slots.contains_key("pkgPath") {
                        if let Some(path) = pkg_path_assignment(source) {
                            slots.insert("pkgPath".to_string(), Value::String(path));
                        }
                    }
                    Value::Frame(slots)
                }
                other => other,
            };
            self.globals.insert(ROOT_GLOBAL.to_string(), graph);
        }

        let chunk = state.execute_output.clone();
        state.pending.out.push_str(&chunk.out);
        state.pending.err.push_str(&chunk.err);

        if let Some(message) = state.exec_error.clone() {
            state.pending.err.push_str(&message);
            state.pending.err.push('\n');
            return Err(SessionError::Execution(message));
        }
        Ok(())
    }

    fn global(&self, name: &str) -> Option<Value> {
        self.globals.get(name).cloned()
    }

    fn set_global(&mut self, name: &str, value: Value) {
        self.globals.insert(name.to_string(), value);
    }

    fn send(&mut self, receiver: &str, selector: &str) -> Result<(), SessionError> {
        self.state
            .borrow_mut()
            .sends
            .push((receiver.to_string(), selector.to_string()));

        if receiver == ROOT_GLOBAL && selector == "writePkg" {
            let send_error = self.state.borrow().send_error.clone();
            if let Some(message) = send_error {
                let mut state = self.state.borrow_mut();
                state.pending.err.push_str(&message);
                state.pending.err.push('\n');
                return Err(SessionError::Send {
                    receiver: receiver.to_string(),
                    selector: selector.to_string(),
                    reason: message,
                });
            }
            let path = self
                .globals
                .get(ROOT_GLOBAL)
                .and_then(|root| root.slot("pkgPath"))
                .and_then(Value::as_string)
                .map(PathBuf::from)
                .ok_or_else(|| SessionError::Send {
                    receiver: receiver.to_string(),
                    selector: selector.to_string(),
                    reason: "no pkgPath in root frame".to_string(),
                })?;
            fs::write(&path, b"SLATEPKG").map_err(|e| SessionError::Send {
                receiver: receiver.to_string(),
                selector: selector.to_string(),
                reason: e.to_string(),
            })?;
            let mut state = self.state.borrow_mut();
            state.written.push(path);
            let chunk = state.send_output.clone();
            state.pending.out.push_str(&chunk.out);
            state.pending.err.push_str(&chunk.err);
        }
        Ok(())
    }

    fn drain_output(&mut self) -> OutputChunk {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.state.borrow_mut().closed += 1;
    }
}

/// One recorded interaction with the target, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetEvent {
    /// A command transmitted through the evaluation channel.
    Eval(String),
    /// An artifact handed to the host installer.
    Install(PathBuf),
}

/// Target controller fake recording every command and install in one
/// ordered log, so tests can assert relative order across the two
/// channels.
#[derive(Debug, Clone, Default)]
pub struct FakeTarget {
    events: Rc<RefCell<Vec<TargetEvent>>>,
}

impl FakeTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything the target saw, in order.
    pub fn events(&self) -> Vec<TargetEvent> {
        self.events.borrow().clone()
    }

    /// Commands transmitted so far, in order.
    pub fn transmissions(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                TargetEvent::Eval(command) => Some(command.clone()),
                TargetEvent::Install(_) => None,
            })
            .collect()
    }

    /// Artifact paths handed to the host installer, in order.
    pub fn installs(&self) -> Vec<PathBuf> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                TargetEvent::Eval(_) => None,
                TargetEvent::Install(path) => Some(path.clone()),
            })
            .collect()
    }
}

impl TargetController for FakeTarget {
    fn eval_remote(&mut self, command: &str) {
        self.events
            .borrow_mut()
            .push(TargetEvent::Eval(command.to_string()));
    }

    fn install_artifact(&mut self, path: &Path) {
        self.events
            .borrow_mut()
            .push(TargetEvent::Install(path.to_path_buf()));
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
