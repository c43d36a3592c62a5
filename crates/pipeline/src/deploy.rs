// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment command rendering and transmission.
//!
//! Commands are script text evaluated on the running target. The
//! channel carries at most [`MAX_REMOTE_COMMAND_LEN`] bytes per command;
//! rendering checks the bound and fails loudly instead of truncating.
//! Transmission itself is fire-and-forget (see
//! [`slate_adapters::TargetController`]).

use slate_adapters::TargetController;
use slate_core::PackageDescriptor;
use thiserror::Error;

/// Practical limit of the remote evaluation channel, in bytes.
pub const MAX_REMOTE_COMMAND_LEN: usize = 256;

/// Errors from deployment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeployError {
    /// The rendered command exceeds the channel limit.
    #[error("remote command is {len} bytes, limit is {MAX_REMOTE_COMMAND_LEN}")]
    CommandTooLong { len: usize },

    /// A deploy operation was requested before any successful build.
    #[error("no package built yet")]
    NoPackage,
}

/// What a rendered command does on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Close the running app (if present) and remove its package from
    /// the first store.
    Uninstall,
    /// Open the installed app.
    Open,
    /// Close the running app if present; keep the package installed.
    Close,
}

slate_core::simple_display! {
    Verb {
        Uninstall => "uninstall",
        Open => "open",
        Close => "close",
    }
}

/// A deployment command before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    pub verb: Verb,
    /// Package symbol addressing the app's root object on the target.
    pub symbol: String,
    /// Package name addressing the package in the target's storage.
    /// Only [`Verb::Uninstall`] uses it.
    pub name: Option<String>,
}

impl RemoteCommand {
    pub fn uninstall(descriptor: &PackageDescriptor) -> Self {
        Self {
            verb: Verb::Uninstall,
            symbol: descriptor.symbol.clone(),
            name: Some(descriptor.name.clone()),
        }
    }

    pub fn open(descriptor: &PackageDescriptor) -> Self {
        Self {
            verb: Verb::Open,
            symbol: descriptor.symbol.clone(),
            name: None,
        }
    }

    pub fn close(descriptor: &PackageDescriptor) -> Self {
        Self {
            verb: Verb::Close,
            symbol: descriptor.symbol.clone(),
            name: None,
        }
    }

    /// Render the command text.
    ///
    /// Uninstall and close are conditional on the app actually being
    /// present under the target's root, so they are safe no-ops when
    /// nothing with the symbol is installed.
    pub fn render(&self) -> String {
        let sym = &self.symbol;
        match self.verb {
            Verb::Uninstall => {
                let name = self.name.as_deref().unwrap_or_default();
                format!(
                    "if HasSlot(GetRoot(), '|{sym}|) then begin\n\
                     \x20 GetRoot().|{sym}|:Close();\n\
                     \x20 SafeRemovePackage(GetPkgRef(\"{name}\", GetStores()[0]))\n\
                     end;\n"
                )
            }
            Verb::Open => format!("GetRoot().|{sym}|:Open();\n"),
            Verb::Close => format!(
                "if HasSlot(GetRoot(), '|{sym}|) then begin\n\
                 \x20 GetRoot().|{sym}|:Close();\n\
                 end;\n"
            ),
        }
    }

    /// Render and enforce the channel limit.
    pub fn render_checked(&self) -> Result<String, DeployError> {
        check_len(self.render())
    }
}

fn check_len(command: String) -> Result<String, DeployError> {
    if command.len() > MAX_REMOTE_COMMAND_LEN {
        return Err(DeployError::CommandTooLong { len: command.len() });
    }
    Ok(command)
}

/// Sequences deployment commands over a target controller.
pub struct DeployController<'a, T: TargetController> {
    target: &'a mut T,
}

impl<'a, T: TargetController> DeployController<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self { target }
    }

    /// Uninstall any previous package with this symbol, then install the
    /// freshly built artifact.
    pub fn install(&mut self, descriptor: &PackageDescriptor) -> Result<(), DeployError> {
        let command = RemoteCommand::uninstall(descriptor).render_checked()?;
        tracing::debug!(symbol = %descriptor.symbol, verb = %Verb::Uninstall, "transmit");
        self.target.eval_remote(&command);
        self.target.install_artifact(&descriptor.output_path);
        Ok(())
    }

    /// Open the installed app.
    pub fn open(&mut self, descriptor: &PackageDescriptor) -> Result<(), DeployError> {
        let command = RemoteCommand::open(descriptor).render_checked()?;
        tracing::debug!(symbol = %descriptor.symbol, verb = %Verb::Open, "transmit");
        self.target.eval_remote(&command);
        Ok(())
    }

    /// Close the app if it is running.
    pub fn close(&mut self, descriptor: &PackageDescriptor) -> Result<(), DeployError> {
        let command = RemoteCommand::close(descriptor).render_checked()?;
        tracing::debug!(symbol = %descriptor.symbol, verb = %Verb::Close, "transmit");
        self.target.eval_remote(&command);
        Ok(())
    }

    /// Send one raw command line, subject to the same channel limit.
    pub fn command(&mut self, raw: &str) -> Result<(), DeployError> {
        let command = check_len(raw.to_string())?;
        self.target.eval_remote(&command);
        Ok(())
    }
}

#[cfg(test)]
#[path = "deploy_tests.rs"]
mod tests;
