// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Typed equality and inequality assertions.
//!
//! One `_eq`/`_not_eq` pair per value kind. Passing assertions have no
//! side effects; failing ones build a bounded diagnostic and route it
//! through [`TestHarness::assert_failed`], then execution continues.
//! Failure is the normal test outcome here, not an error.

use core::fmt::Write;

use crate::TestHarness;
use crate::msgbuf::MsgBuf;

macro_rules! assert_pair {
    ($($(#[$meta:meta])* ($eq:ident, $not_eq:ident): $ty:ty;)*) => {
        impl TestHarness {
            $(
                $(#[$meta])*
                #[doc = concat!("Assert that the `", stringify!($ty), "` values are equal.")]
                pub fn $eq(&mut self, expected: $ty, actual: $ty, file: &str, line: u32) {
                    if expected != actual {
                        let mut msg = MsgBuf::new();
                        let _ = write!(msg, " expected: {expected}, got: {actual}");
                        self.assert_failed(file, line, msg.as_str());
                    }
                }

                $(#[$meta])*
                #[doc = concat!("Assert that the `", stringify!($ty), "` values are not equal.")]
                pub fn $not_eq(&mut self, expected: $ty, actual: $ty, file: &str, line: u32) {
                    if expected == actual {
                        let mut msg = MsgBuf::new();
                        let _ = write!(msg, " should not be: {expected}");
                        self.assert_failed(file, line, msg.as_str());
                    }
                }
            )*
        }
    };
}

assert_pair! {
    (assert_bool_eq, assert_bool_not_eq): bool;
    (assert_i8_eq, assert_i8_not_eq): i8;
    (assert_u8_eq, assert_u8_not_eq): u8;
    (assert_i16_eq, assert_i16_not_eq): i16;
    (assert_u16_eq, assert_u16_not_eq): u16;
    (assert_i32_eq, assert_i32_not_eq): i32;
    (assert_u32_eq, assert_u32_not_eq): u32;
    #[cfg(feature = "int64")]
    (assert_i64_eq, assert_i64_not_eq): i64;
    #[cfg(feature = "int64")]
    (assert_u64_eq, assert_u64_not_eq): u64;
}

#[cfg(feature = "floating-point")]
impl TestHarness {
    /// Assert that the `f32` values are equal within the framework
    /// tolerances.
    ///
    /// Both operands are widened to `f64` first, so the tolerances behave
    /// identically across both float widths.
    pub fn assert_f32_eq(&mut self, expected: f32, actual: f32, file: &str, line: u32) {
        self.assert_f64_eq(f64::from(expected), f64::from(actual), file, line);
    }

    /// Assert that the `f32` values are not equal within the framework
    /// tolerances.
    pub fn assert_f32_not_eq(&mut self, expected: f32, actual: f32, file: &str, line: u32) {
        self.assert_f64_not_eq(f64::from(expected), f64::from(actual), file, line);
    }

    /// Assert that the `f64` values are equal within the framework
    /// tolerances. See [`crate::float::float64_eq`].
    pub fn assert_f64_eq(&mut self, expected: f64, actual: f64, file: &str, line: u32) {
        if !crate::float::float64_eq(expected, actual) {
            let mut msg = MsgBuf::new();
            let _ = write!(msg, " expected: {expected:e}, got: {actual:e}");
            self.assert_failed(file, line, msg.as_str());
        }
    }

    /// Assert that the `f64` values are not equal within the framework
    /// tolerances.
    pub fn assert_f64_not_eq(&mut self, expected: f64, actual: f64, file: &str, line: u32) {
        if crate::float::float64_eq(expected, actual) {
            let mut msg = MsgBuf::new();
            let _ = write!(msg, " should not be: {expected:e}");
            self.assert_failed(file, line, msg.as_str());
        }
    }
}
