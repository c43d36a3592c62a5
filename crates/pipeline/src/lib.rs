// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! slate-pipeline: Build-and-deploy pipeline for the Slate Toolkit.
//!
//! Assembles a complete program image from canonical prelude fragments
//! plus one user script, drives the embedded interpreter to compile it,
//! validates the resulting package metadata, triggers package
//! materialization, and issues remote commands to install, launch, and
//! stop the package on the running target.

pub mod assemble;
pub mod config;
pub mod deploy;
pub mod error;
pub mod extract;
pub mod paths;
pub mod prototypes;
pub mod toolkit;

pub use assemble::{assemble, CompilationUnit};
pub use config::ToolkitConfig;
pub use deploy::{DeployError, RemoteCommand, Verb, MAX_REMOTE_COMMAND_LEN};
pub use error::BuildError;
pub use extract::{extract_descriptor, ValidationError};
pub use paths::package_path_for;
pub use toolkit::Toolkit;
