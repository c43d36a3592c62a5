// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline-level errors.

use crate::deploy::DeployError;
use crate::extract::ValidationError;
use slate_adapters::SessionError;
use slate_core::ScriptError;
use thiserror::Error;

/// Why a build (or a deploy that depends on one) failed.
///
/// Every variant has already been written to the console sink by the
/// time it crosses the [`crate::Toolkit`] boundary; callers may branch
/// on it but never need to re-report it.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The user source could not be assembled.
    #[error(transparent)]
    Assemble(#[from] ScriptError),

    /// The package output path could not be resolved.
    #[error("can't resolve package path: {0}")]
    OutputPath(#[from] std::io::Error),

    /// The interpreter could not be started or a message send failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The result graph failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A deployment command could not be issued.
    #[error(transparent)]
    Deploy(#[from] DeployError),
}
