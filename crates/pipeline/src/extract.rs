// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metadata extraction and validation.
//!
//! Walks the `slate` root frame the user program left behind and
//! recovers the package descriptor. Validation is strictly ordered and
//! short-circuits on the first unmet condition; nothing past the failing
//! step is read. The display label is the only soft step.

use slate_core::{PackageDescriptor, Value, LABEL_PLACEHOLDER};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One variant per ordered validation step, each with the exact
/// diagnostic shown on the console.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("can't build package, 'slate' not defined")]
    RootNotDefined,

    #[error("can't build package, 'slate.app' not defined")]
    AppNotDefined,

    #[error("can't build package, 'slate.app.name' not defined")]
    NameNotDefined,

    #[error("can't build package, 'slate.app.parts' not defined")]
    PartsNotDefined,

    #[error("can't build package, 'slate.app.parts[0]' not defined")]
    FirstPartNotDefined,

    #[error("can't build package, 'slate.app.parts[0].data' not defined")]
    DataNotDefined,

    #[error("can't build package, package symbol not defined (expected in 'slate.app.parts[0].data')")]
    SymbolNotDefined,
}

/// Extract a package descriptor from the root global.
///
/// `root` is the value bound to `slate` after execution (`None` when
/// unbound). `default_output` is the path resolved before the build; a
/// string `pkgPath` slot on the root overrides it unconditionally.
pub fn extract_descriptor(
    root: Option<&Value>,
    default_output: &Path,
) -> Result<PackageDescriptor, ValidationError> {
    let root = root
        .filter(|v| v.as_frame().is_some())
        .ok_or(ValidationError::RootNotDefined)?;

    let output_path = match root.slot("pkgPath").and_then(Value::as_string) {
        Some(path) => PathBuf::from(path),
        None => default_output.to_path_buf(),
    };

    let app = root
        .slot("app")
        .filter(|v| v.as_frame().is_some())
        .ok_or(ValidationError::AppNotDefined)?;

    let name = app
        .slot("name")
        .and_then(Value::as_string)
        .ok_or(ValidationError::NameNotDefined)?
        .to_string();

    let parts = app
        .slot("parts")
        .filter(|v| v.as_array().is_some())
        .ok_or(ValidationError::PartsNotDefined)?;

    let first_part = parts
        .element(0)
        .filter(|v| v.as_frame().is_some())
        .ok_or(ValidationError::FirstPartNotDefined)?;

    let data = first_part
        .slot("data")
        .filter(|v| v.as_frame().is_some())
        .ok_or(ValidationError::DataNotDefined)?;

    let symbol = data
        .slot("app")
        .and_then(Value::as_symbol)
        .ok_or(ValidationError::SymbolNotDefined)?
        .to_string();

    // Soft step: a missing or wrong-typed label never aborts the build.
    let label = data
        .slot("text")
        .and_then(Value::as_string)
        .unwrap_or(LABEL_PLACEHOLDER)
        .to_string();

    Ok(PackageDescriptor {
        output_path,
        name,
        symbol,
        label,
    })
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
