// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The toolkit façade.
//!
//! Ties the pipeline stages together behind the four user operations:
//! build, install, run, stop. Everything runs synchronously on the
//! calling thread; `&mut self` keeps at most one build in flight.
//!
//! Failure policy: every failure is written to the console sink before
//! the `Result` crosses this boundary, so embedding UIs only have to
//! render the transcript. Nothing here panics or unwinds.

use crate::assemble::assemble;
use crate::config::ToolkitConfig;
use crate::deploy::{DeployController, DeployError};
use crate::error::BuildError;
use crate::extract::extract_descriptor;
use crate::paths::package_path_for;
use slate_adapters::{Interpreter, InterpreterSession, OutputChunk, TargetController};
use slate_core::{Console, PackageDescriptor, Script};
use std::path::PathBuf;

/// Name of the root global the build pipeline inspects.
const ROOT_GLOBAL: &str = "slate";

/// Selector sent to the root global to materialize the package.
const WRITE_PKG: &str = "writePkg";

/// The integrated build-and-deploy pipeline.
pub struct Toolkit<I, T, C>
where
    I: Interpreter,
    T: TargetController,
    C: Console,
{
    interpreter: I,
    target: T,
    console: C,
    config: ToolkitConfig,
    script: Script,
    /// Descriptor from the last successful build; deploy operations
    /// address the target through it.
    package: Option<PackageDescriptor>,
}

impl<I, T, C> Toolkit<I, T, C>
where
    I: Interpreter,
    T: TargetController,
    C: Console,
{
    pub fn new(interpreter: I, target: T, console: C, config: ToolkitConfig) -> Self {
        Self {
            interpreter,
            target,
            console,
            config,
            script: Script::default(),
            package: None,
        }
    }

    /// The current script.
    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn script_mut(&mut self) -> &mut Script {
        &mut self.script
    }

    /// Replace the current script, dropping any built descriptor.
    pub fn set_script(&mut self, script: Script) {
        self.script = script;
        self.package = None;
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Descriptor from the last successful build, if any.
    pub fn package(&self) -> Option<&PackageDescriptor> {
        self.package.as_ref()
    }

    /// Build the current script into a package.
    ///
    /// Assembles the compilation unit, runs it in a fresh interpreter
    /// session, validates the result graph, and triggers package
    /// materialization. An interpreter-level execution error is not
    /// fatal by itself; its text reaches the console through the error
    /// output channel and extraction still runs.
    pub fn build(&mut self) -> Result<(), BuildError> {
        tracing::info!("build");
        self.package = None;
        match self.try_build() {
            Ok(descriptor) => {
                tracing::debug!(name = %descriptor.name, symbol = %descriptor.symbol, "built");
                self.package = Some(descriptor);
                Ok(())
            }
            Err(e) => {
                self.console.write_err(&format!("Error: {e}!\n"));
                Err(e)
            }
        }
    }

    fn try_build(&mut self) -> Result<PackageDescriptor, BuildError> {
        let pkg_path = package_path_for(&self.script, &self.config.scratch_dir())?;

        if self.script.has_file() {
            self.console.write_std("Compiling file...\n");
        } else {
            self.console.write_std("Compiling inline...\n");
        }
        let unit = assemble(&mut self.script, &pkg_path)?;

        // Relative paths in the user program resolve against the
        // script's directory.
        let base_dir: Option<PathBuf> = self
            .script
            .file_path()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf());

        // One session per attempt; dropping it at the end of this scope
        // is the teardown, on every exit path.
        let mut session = self.interpreter.open()?;

        if let Err(e) = session.execute(&unit.source, base_dir.as_deref()) {
            // Expected to have populated the error channel already.
            tracing::debug!(error = %e, "script execution failed");
        }
        let chunk = session.drain_output();
        self.forward(chunk);

        let root = session.global(ROOT_GLOBAL);
        let result = match extract_descriptor(root.as_ref(), &pkg_path) {
            Ok(descriptor) => {
                self.console.write_std("Info: package compiled.\n");
                // A failed send must not skip the second drain below:
                // whatever the interpreter wrote while materialization
                // fell over is exactly what the user needs to see.
                match session.send(ROOT_GLOBAL, WRITE_PKG) {
                    Ok(()) => Ok(descriptor),
                    Err(e) => Err(BuildError::from(e)),
                }
            }
            Err(e) => Err(BuildError::from(e)),
        };

        // Extraction and materialization run inside the session and may
        // have produced further output.
        let chunk = session.drain_output();
        self.forward(chunk);

        result
    }

    /// Build, then install the package into the target, replacing any
    /// previously installed package with the same symbol.
    pub fn install(&mut self) -> Result<(), BuildError> {
        self.build()?;
        self.console.write_std("Installing...\n");
        let descriptor = self.descriptor()?;
        self.deploy(|controller, d| controller.install(d), &descriptor)
    }

    /// Install, then open the app on the target.
    pub fn run(&mut self) -> Result<(), BuildError> {
        self.install()?;
        self.console.write_std("Run...\n");
        let descriptor = self.descriptor()?;
        self.deploy(|controller, d| controller.open(d), &descriptor)
    }

    /// Close the app on the target if it is running.
    ///
    /// Uses the symbol from the last successful build.
    pub fn stop(&mut self) -> Result<(), BuildError> {
        self.console.write_std("Stop...\n");
        let descriptor = self.descriptor()?;
        self.deploy(|controller, d| controller.close(d), &descriptor)
    }

    /// Send one raw script command line to the target.
    pub fn command(&mut self, raw: &str) -> Result<(), BuildError> {
        let result = DeployController::new(&mut self.target).command(raw);
        self.report_deploy(result)
    }

    fn descriptor(&mut self) -> Result<PackageDescriptor, BuildError> {
        match self.package.clone() {
            Some(d) => Ok(d),
            None => {
                let e = DeployError::NoPackage;
                self.console.write_err(&format!("Error: {e}!\n"));
                Err(e.into())
            }
        }
    }

    fn deploy(
        &mut self,
        op: impl FnOnce(&mut DeployController<'_, T>, &PackageDescriptor) -> Result<(), DeployError>,
        descriptor: &PackageDescriptor,
    ) -> Result<(), BuildError> {
        let result = op(&mut DeployController::new(&mut self.target), descriptor);
        self.report_deploy(result)
    }

    fn report_deploy(&mut self, result: Result<(), DeployError>) -> Result<(), BuildError> {
        if let Err(e) = result {
            self.console.write_err(&format!("Error: {e}!\n"));
            return Err(e.into());
        }
        Ok(())
    }

    fn forward(&mut self, chunk: OutputChunk) {
        if !chunk.out.is_empty() {
            self.console.write_std(&chunk.out);
        }
        if !chunk.err.is_empty() {
            self.console.write_err(&chunk.err);
        }
    }
}

#[cfg(test)]
#[path = "toolkit_tests.rs"]
mod tests;
