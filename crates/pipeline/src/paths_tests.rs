// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    slt_extension = { "project/app.slt", "project/app.pkg" },
    no_extension  = { "project/app",     "project/app.pkg" },
    other_ext     = { "a/b/script.txt",  "a/b/script.pkg" },
)]
fn file_backed_scripts_build_next_to_source(script_path: &str, expected: &str) {
    let script = Script::file_backed(script_path, "");
    let path = package_path_for(&script, Path::new("/unused")).unwrap();
    assert_eq!(path, PathBuf::from(expected));
}

#[test]
fn unnamed_scripts_build_under_scratch_dir() {
    let scratch = tempfile::tempdir().unwrap();
    let script = Script::unnamed("");
    let path = package_path_for(&script, scratch.path()).unwrap();
    assert_eq!(path, scratch.path().join("tmp.pkg"));
}

#[test]
fn temp_path_is_deterministic_across_builds() {
    let scratch = tempfile::tempdir().unwrap();
    let script = Script::unnamed("");
    let first = package_path_for(&script, scratch.path()).unwrap();
    let second = package_path_for(&script, scratch.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn stale_temp_file_is_removed_before_reuse() {
    let scratch = tempfile::tempdir().unwrap();
    let stale = scratch.path().join("tmp.pkg");
    fs::write(&stale, b"stale artifact").unwrap();

    let script = Script::unnamed("");
    let path = package_path_for(&script, scratch.path()).unwrap();
    assert_eq!(path, stale);
    assert!(!stale.exists());
}

#[test]
fn missing_scratch_dir_is_created() {
    let scratch = tempfile::tempdir().unwrap();
    let nested = scratch.path().join("deep/scratch");
    let script = Script::unnamed("");
    let path = package_path_for(&script, &nested).unwrap();
    assert_eq!(path, nested.join("tmp.pkg"));
    assert!(nested.is_dir());
}
