// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Package output path resolution.

use slate_core::Script;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name used for packages built from unnamed scripts.
const TEMP_PKG_NAME: &str = "tmp.pkg";

/// Resolve where the package for `script` is materialized.
///
/// File-backed scripts build next to their source, with the extension
/// swapped to `pkg`. Unnamed scripts build to a deterministic per-user
/// temp path under `scratch_dir`; a stale file from an earlier build is
/// removed before the path is reused, so a failed build can never leave
/// yesterday's artifact looking current.
pub fn package_path_for(script: &Script, scratch_dir: &Path) -> io::Result<PathBuf> {
    match script.file_path() {
        Some(path) => Ok(path.with_extension("pkg")),
        None => {
            fs::create_dir_all(scratch_dir)?;
            let path = scratch_dir.join(TEMP_PKG_NAME);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
            Ok(path)
        }
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
