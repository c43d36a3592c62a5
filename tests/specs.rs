// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level pipeline scenarios.
//!
//! End-to-end runs of the build/install/run/stop operations against the
//! scripted interpreter and target fakes.

use slate_adapters::{FakeInterpreter, FakeTarget, TargetEvent};
use slate_core::{MemoryConsole, Script, Value, LABEL_PLACEHOLDER};
use slate_pipeline::{Toolkit, ToolkitConfig};
use std::fs;
use std::path::Path;

fn valid_graph() -> Value {
    Value::frame([(
        "app",
        Value::frame([
            ("name", Value::string("Mines")),
            (
                "parts",
                Value::Array(vec![Value::frame([(
                    "data",
                    Value::frame([
                        ("app", Value::symbol("Mines:Slate")),
                        ("text", Value::string("Mines")),
                    ]),
                )])]),
            ),
        ]),
    )])
}

/// Same graph without the `data.text` label slot.
fn graph_without_label() -> Value {
    Value::frame([(
        "app",
        Value::frame([
            ("name", Value::string("Mines")),
            (
                "parts",
                Value::Array(vec![Value::frame([(
                    "data",
                    Value::frame([("app", Value::symbol("Mines:Slate"))]),
                )])]),
            ),
        ]),
    )])
}

fn toolkit(
    fake: &FakeInterpreter,
    scratch: &Path,
) -> Toolkit<FakeInterpreter, FakeTarget, MemoryConsole> {
    let config = ToolkitConfig {
        scratch_dir: Some(scratch.to_path_buf()),
    };
    Toolkit::new(fake.clone(), FakeTarget::new(), MemoryConsole::new(), config)
}

// Scenario A: root binding absent.
#[test]
fn build_without_root_reports_root_not_defined() {
    let scratch = tempfile::tempdir().unwrap();
    let fake = FakeInterpreter::new();
    // The fake leaves `slate` unbound when no graph is configured.

    let mut tk = toolkit(&fake, scratch.path());
    tk.set_script(Script::unnamed("x := 1;"));
    assert!(tk.build().is_err());

    assert!(tk
        .console()
        .err()
        .contains("can't build package, 'slate' not defined"));
    assert!(fake.written_packages().is_empty());
    assert!(!scratch.path().join("tmp.pkg").exists());
}

// Scenario B: root present, `app` absent.
#[test]
fn build_without_app_reports_app_not_defined() {
    let scratch = tempfile::tempdir().unwrap();
    let fake = FakeInterpreter::new();
    fake.set_graph(Value::frame([("version", Value::string("1.0"))]));

    let mut tk = toolkit(&fake, scratch.path());
    tk.set_script(Script::unnamed("x := 1;"));
    assert!(tk.build().is_err());

    assert!(tk
        .console()
        .err()
        .contains("can't build package, 'slate.app' not defined"));
    assert!(fake.written_packages().is_empty());
}

// Scenario C: valid chain, label slot absent.
#[test]
fn build_without_label_uses_placeholder_and_writes_package() {
    let scratch = tempfile::tempdir().unwrap();
    let fake = FakeInterpreter::new();
    fake.set_graph(graph_without_label());

    let mut tk = toolkit(&fake, scratch.path());
    tk.set_script(Script::unnamed("x := 1;"));
    tk.build().unwrap();

    let descriptor = tk.package().unwrap();
    assert_eq!(descriptor.label, LABEL_PLACEHOLDER);
    assert!(descriptor.output_path.exists());
}

// Scenario D: unnamed script builds to the scratch temp path; a stale
// artifact there is removed before the build.
#[test]
fn unnamed_script_builds_to_fresh_temp_path() {
    let scratch = tempfile::tempdir().unwrap();
    let temp_pkg = scratch.path().join("tmp.pkg");
    fs::write(&temp_pkg, b"stale").unwrap();

    let fake = FakeInterpreter::new();
    fake.set_graph(valid_graph());

    let mut tk = toolkit(&fake, scratch.path());
    tk.set_script(Script::unnamed("x := 1;"));
    tk.build().unwrap();

    assert_eq!(tk.package().unwrap().output_path, temp_pkg);
    assert_eq!(fs::read(&temp_pkg).unwrap(), b"SLATEPKG");
}

// Scenario E: install with nothing previously installed still transmits
// the conditional uninstall, then installs.
#[test]
fn install_transmits_conditional_uninstall_then_install() {
    let scratch = tempfile::tempdir().unwrap();
    let fake = FakeInterpreter::new();
    fake.set_graph(valid_graph());

    let mut tk = toolkit(&fake, scratch.path());
    tk.set_script(Script::unnamed("x := 1;"));
    tk.install().unwrap();

    let events = tk.target().events();
    assert_eq!(events.len(), 2);
    let TargetEvent::Eval(uninstall) = &events[0] else {
        panic!("expected uninstall eval first, got {events:?}");
    };
    assert!(uninstall.starts_with("if HasSlot(GetRoot(), '|Mines:Slate|)"));
    assert_eq!(
        events[1],
        TargetEvent::Install(scratch.path().join("tmp.pkg"))
    );
}

// Scenario F: run sends install's transmissions strictly before open.
#[test]
fn run_orders_uninstall_install_open() {
    let scratch = tempfile::tempdir().unwrap();
    let fake = FakeInterpreter::new();
    fake.set_graph(valid_graph());

    let mut tk = toolkit(&fake, scratch.path());
    tk.set_script(Script::unnamed("x := 1;"));
    tk.run().unwrap();

    let events = tk.target().events();
    assert_eq!(events.len(), 3);
    let TargetEvent::Eval(uninstall) = &events[0] else {
        panic!("expected uninstall eval first, got {events:?}");
    };
    assert!(uninstall.contains("SafeRemovePackage"));
    assert_eq!(
        events[1],
        TargetEvent::Install(scratch.path().join("tmp.pkg"))
    );
    assert_eq!(
        events[2],
        TargetEvent::Eval("GetRoot().|Mines:Slate|:Open();\n".to_string())
    );
}

// Stop is independent of a fresh build but needs a prior one for the
// symbol.
#[test]
fn stop_after_run_sends_conditional_close() {
    let scratch = tempfile::tempdir().unwrap();
    let fake = FakeInterpreter::new();
    fake.set_graph(valid_graph());

    let mut tk = toolkit(&fake, scratch.path());
    tk.set_script(Script::unnamed("x := 1;"));
    tk.run().unwrap();
    tk.stop().unwrap();

    let sent = tk.target().transmissions();
    let last = sent.last().unwrap();
    assert!(last.contains("HasSlot"));
    assert!(last.contains("|Mines:Slate|:Close()"));
    assert!(!last.contains("SafeRemovePackage"));
}

// A file-backed script builds next to its source file.
#[test]
fn file_backed_script_builds_sibling_package() {
    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("mines.slt");
    fs::write(&script_path, "// source").unwrap();

    let fake = FakeInterpreter::new();
    fake.set_graph(valid_graph());

    let scratch = tempfile::tempdir().unwrap();
    let mut tk = toolkit(&fake, scratch.path());
    tk.set_script(Script::file_backed(&script_path, "// source"));
    tk.build().unwrap();

    assert_eq!(
        tk.package().unwrap().output_path,
        dir.path().join("mines.pkg")
    );
    assert!(dir.path().join("mines.pkg").exists());
}
