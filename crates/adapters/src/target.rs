// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote target controller.

use std::path::Path;

/// Control channel to the running target process (the emulated device).
///
/// Transmission is fire-and-forget by design: there is no acknowledgment,
/// return value, or structured error. Diagnostics produced on the target
/// surface only through the interpreter's output channels on a later
/// build/run cycle.
pub trait TargetController {
    /// Send one script command line to the target for evaluation.
    fn eval_remote(&mut self, command: &str);

    /// Ask the host application to install the package artifact at `path`
    /// into the target.
    fn install_artifact(&mut self, path: &Path);
}
