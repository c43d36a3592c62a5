// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Packaging metadata recovered from a build.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Label substituted when the result graph carries no usable `text` slot.
pub const LABEL_PLACEHOLDER: &str = "<unknown>";

/// Metadata for one built package, extracted from the interpreter's
/// result graph.
///
/// A descriptor only exists once `name` and `symbol` both resolved; the
/// label is the one soft field and falls back to [`LABEL_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Where the package artifact is (or will be) materialized.
    pub output_path: PathBuf,
    /// Package name, from `app.name`; addresses the package in the
    /// target's storage.
    pub name: String,
    /// Package symbol, from `app.parts[0].data.app`; addresses the
    /// installed package's root object on the target.
    pub symbol: String,
    /// Display label, from `app.parts[0].data.text`.
    pub label: String,
}
