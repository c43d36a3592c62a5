// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! slate-adapters: Traits at the pipeline's external seams.
//!
//! The build pipeline treats the embedded interpreter and the running
//! target process as collaborators reached only through the traits in
//! this crate. The `test-support` feature exports scripted fakes for
//! other crates' tests.

pub mod session;
pub mod target;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeInterpreter, FakeSession, FakeTarget, TargetEvent};
pub use session::{Interpreter, InterpreterSession, OutputChunk, SessionError};
pub use target::TargetController;
