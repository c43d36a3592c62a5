// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical source fragments prepended and appended to every build.
//!
//! The fragments are concatenated in a fixed order; later fragments
//! reference symbols defined by earlier ones, so the order is
//! load-bearing (see [`crate::assemble`]).

/// Platform definitions for the target OS.
pub const PRELUDE_DEFS: &str = r#"// --- Slate platform definitions (target OS 2.1) ---
constant kTargetOSVersion := 2.1;
constant kPartTypeForm := 'form;
DefGlobalFn('|Slate:MakeRect|, func(top, left, bottom, right)
    { top: top, left: left, bottom: bottom, right: right });
"#;

/// Bytecode support definitions.
pub const BYTECODE_DEFS: &str = r#"// --- bytecode support ---
DefGlobalFn('|Slate:MakeBinaryFromHex|, func(hex, class)
    begin
        local bin := MakeBinary(StrLen(hex) div 2, class);
        StuffHex(bin, hex);
        bin
    end);
"#;

/// Toolkit helper definitions.
pub const TOOLKIT_DEFS: &str = r#"// --- toolkit helpers ---
DefGlobalFn('|Slate:Log|, func(text)
    Write(text));
DefGlobalFn('|Slate:LogErr|, func(text)
    WriteErr(text));
"#;

/// The default package template.
///
/// Defines the `slate` root frame the user script fills in and the
/// `writePkg` entry point the emitter triggers. User code runs after
/// this fragment and may override any slot.
pub const DEFAULT_PACKAGE: &str = r#"// --- default package template ---
slate := {
    pkgPath: nil,
    app: nil,
    writePkg: func()
        begin
            local pkg := MakePkg(self.app);
            SaveBinary(pkg, self.pkgPath);
        end,
};
"#;

/// Fragment run immediately before the user source.
pub const LAUNCH: &str = r#"// --- launch ---
|Slate:Log|("Compiling for target OS " & NumberStr(kTargetOSVersion) & "\n");
// user source follows
"#;

/// Fragment appended after the user source.
pub const DONE: &str = r#"// --- done ---
nil;
"#;
