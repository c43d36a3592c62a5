// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! slate-core: Domain types for the Slate Toolkit build pipeline.

pub mod macros;

pub mod console;
pub mod descriptor;
pub mod script;
pub mod value;

pub use console::{Console, MemoryConsole, StdioConsole};
pub use descriptor::{PackageDescriptor, LABEL_PLACEHOLDER};
pub use script::{Script, ScriptError};
pub use value::{Value, ValueKind};
