// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source assembly.
//!
//! Concatenates the canonical fragments, the generated package-path
//! assignment, and the user script into one compilation unit. Pure
//! concatenation: user source is embedded verbatim, no escaping.
//!
//! Order is fixed and load-bearing. The path assignment comes after the
//! default-package template (so it lands in the `slate` frame the
//! template defines) and before the user source (so user code may
//! override it while later stages can always rely on it being set).

use crate::prototypes;
use slate_core::{Script, ScriptError};
use std::path::Path;

/// One assembled program image, ready for submission to the interpreter.
///
/// Owned transiently by a build; discarded after submission.
#[derive(Debug)]
pub struct CompilationUnit {
    pub source: String,
}

/// Render the package-path assignment fragment.
fn pkg_path_fragment(pkg_path: &Path) -> String {
    format!("slate.pkgPath := \"{}\";\n", pkg_path.display())
}

/// Assemble the complete compilation unit for `script`.
///
/// A dirty file-backed script is persisted first and read back from
/// disk; an unnamed script contributes a copy of its buffer.
pub fn assemble(script: &mut Script, pkg_path: &Path) -> Result<CompilationUnit, ScriptError> {
    let user_source = script.read_for_build()?;

    let mut source = String::new();
    source.push_str(prototypes::PRELUDE_DEFS);
    source.push_str(prototypes::BYTECODE_DEFS);
    source.push_str(prototypes::TOOLKIT_DEFS);
    source.push_str(prototypes::DEFAULT_PACKAGE);
    source.push_str(&pkg_path_fragment(pkg_path));
    source.push_str(prototypes::LAUNCH);
    source.push_str(&user_source);
    source.push_str(prototypes::DONE);

    Ok(CompilationUnit { source })
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
