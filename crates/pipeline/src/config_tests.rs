// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_config_uses_defaults() {
    let config = ToolkitConfig::from_toml("").unwrap();
    assert!(config.scratch_dir.is_none());
    assert!(config.scratch_dir().ends_with("slate"));
}

#[test]
fn scratch_dir_override() {
    let config = ToolkitConfig::from_toml("scratch_dir = \"/var/tmp/slate\"").unwrap();
    assert_eq!(config.scratch_dir(), PathBuf::from("/var/tmp/slate"));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(ToolkitConfig::from_toml("scratch_drr = \"/tmp\"").is_err());
}

#[test]
fn load_reports_missing_file_with_path() {
    let err = ToolkitConfig::load("/nonexistent/slate.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/slate.toml"));
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slate.toml");
    fs::write(&path, "scratch_dir = \"/scratch\"").unwrap();
    let config = ToolkitConfig::load(&path).unwrap();
    assert_eq!(config.scratch_dir(), PathBuf::from("/scratch"));
}
