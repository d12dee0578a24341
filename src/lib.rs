// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

#![cfg_attr(not(feature = "std"), no_std)]

//! Minimal unit test framework for resource-constrained environments.
//!
//! The framework is built around test suites, test cases and assertions.
//! A suite groups the cases for one source unit, a case groups the
//! assertions for one behavior, and each assertion compares an expected
//! value against an actual one. Results are written as plain text lines to
//! the registered [`Sink`]s, typically the console plus a log file.
//!
//! All state lives in a [`TestHarness`] owned by the caller; there are no
//! globals. Misuse of the suite/case pairing is reported in the output and
//! ignored, never returned as an error; [`TestHarness::all_passed`] gives
//! the overall verdict for a run.
//!
//! # Example
//!
//! ```
//! use microtest::{BufferSink, TestHarness};
//!
//! let capture = BufferSink::new();
//! let mut t = TestHarness::new();
//! t.log_on(Some(Box::new(capture.clone())));
//!
//! t.suite_start("packet builder");
//! t.case_start("config frame correctly built");
//! t.assert_u16_eq(0x1234, 0x1234, file!(), line!());
//! t.case_end();
//! t.suite_end();
//! t.log_off();
//!
//! assert!(t.all_passed());
//! ```
//!
//! # Features
//!
//! - `std` (default): console output via stdout and the [`FileSink`]
//!   adapter. Without it the crate is `no_std` (plus `alloc`) and console
//!   output is routed through the [`ConsoleWrite`] interface the embedder
//!   implements.
//! - `int64`: 64-bit integer assertion kinds.
//! - `floating-point`: f32/f64 assertion kinds and the [`float64_eq`]
//!   comparator. When a feature is off, its kinds are absent from the API
//!   entirely.

#[macro_use]
extern crate log;
extern crate alloc;

mod assert;
pub mod harness;
mod msgbuf;
pub mod sink;

#[cfg(feature = "floating-point")]
pub mod float;

pub use harness::TestHarness;
pub use msgbuf::MAX_MSG_LEN;
#[cfg(not(feature = "std"))]
pub use sink::ConsoleWrite;
#[cfg(feature = "std")]
pub use sink::FileSink;
pub use sink::{BufferSink, ConsoleSink, Sink};

#[cfg(feature = "floating-point")]
pub use float::{MAX_ABSOLUTE_ERROR, MAX_RELATIVE_ERROR, float64_eq, float64_eq_with};
