// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Suite and case execution tracking.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::sink::{ConsoleSink, FmtSink, Sink};

/// Tracks the execution state of a test run.
///
/// A harness owns everything the framework needs: which suite and case are
/// active, whether any assertion has failed, and the sinks output is
/// written to. The intended lifecycle is [`log_on`](Self::log_on), then
/// suites with nested cases, then [`log_off`](Self::log_off).
///
/// At most one suite and one case can be active at a time. Breaking the
/// start/end pairing is a usage error: it is reported as a diagnostic in
/// the output and the offending call is ignored. No error values are
/// returned and nothing is fatal.
pub struct TestHarness {
    sinks: Vec<Box<dyn Sink>>,
    suite_active: bool,
    case_active: bool,
    current_case_pass: bool,
    failed_assert: bool,
    suite_num: u16,
}

impl TestHarness {
    pub const fn new() -> Self {
        Self {
            sinks: Vec::new(),
            suite_active: false,
            case_active: false,
            current_case_pass: true,
            failed_assert: false,
            suite_num: 0,
        }
    }

    /// Enable logging for a run.
    ///
    /// With a target, output is duplicated to the console and the target.
    /// With `None`, no sinks are registered and all output is suppressed;
    /// assertions and suite/case tracking still function, only the text is
    /// lost.
    ///
    /// Resets the run summary, so [`all_passed`](Self::all_passed) reports
    /// on everything after this call. The suite counter is deliberately
    /// not reset; suite numbers stay unique across sessions.
    pub fn log_on(&mut self, target: Option<Box<dyn Sink>>) {
        self.log_off();
        self.failed_assert = false;
        if let Some(target) = target {
            self.sinks.push(Box::new(ConsoleSink));
            self.sinks.push(target);
        }
    }

    /// Enable logging to the console plus the given log file.
    ///
    /// A path of `None`, or a file that cannot be created, leaves the run
    /// without sinks, the same as `log_on(None)`; the open failure is
    /// reported through the `log` facade.
    #[cfg(feature = "std")]
    pub fn log_on_file(&mut self, path: Option<&std::path::Path>) {
        match path {
            Some(path) => match crate::sink::FileSink::create(path) {
                Ok(sink) => self.log_on(Some(Box::new(sink))),
                Err(err) => {
                    warn!("cannot open log file {}: {err}", path.display());
                    self.log_on(None);
                }
            },
            None => self.log_on(None),
        }
    }

    /// Flush and release all sinks. Idempotent.
    pub fn log_off(&mut self) {
        for sink in &mut self.sinks {
            sink.flush();
        }
        self.sinks.clear();
    }

    /// Mark the start of a new test suite.
    ///
    /// Each suite gets a unique number so output is easy to cross-reference
    /// when analyzing a run. Starting a suite while another is active is a
    /// usage error: the new suite is rejected and the active one stays
    /// active.
    pub fn suite_start(&mut self, name: &str) {
        if !self.suite_active {
            self.suite_num = self.suite_num.wrapping_add(1);
            let suite_num = self.suite_num;
            self.emit(format_args!("\n\nTest Suite Number: {suite_num}"));
            self.emit(format_args!("\nTest Suite Name: {name}"));
            self.suite_active = true;
        } else {
            warn!("suite_start({name:?}) while a suite is active");
            self.emit(format_args!("\n\nERROR: A test suite is already active."));
            self.emit(format_args!("\nCannot execute \"{name}\""));
            self.emit(format_args!(
                "\nOnly one test suite can be executed at a time.\n"
            ));
        }
    }

    /// Mark the active test suite as complete.
    pub fn suite_end(&mut self) {
        if self.suite_active {
            self.emit(format_args!("\n\nTest Suite Complete\n"));
            self.suite_active = false;
        } else {
            warn!("suite_end() with no suite active");
            self.emit(format_args!("\n\nERROR: A test suite is not active."));
            self.emit(format_args!("\nCall 'suite_start' first.\n"));
        }
    }

    /// Mark the start of a new test case.
    ///
    /// If any assertion fails before the matching
    /// [`case_end`](Self::case_end), the whole case fails. Starting a case
    /// while another is active is a usage error: the new case is rejected
    /// and the active case's pass state is untouched.
    pub fn case_start(&mut self, name: &str) {
        if !self.case_active {
            self.emit(format_args!("\n\nTest Case: {name}"));
            self.current_case_pass = true;
            self.case_active = true;
        } else {
            warn!("case_start({name:?}) while a case is active");
            self.emit(format_args!("\n\nERROR: A test case is already active."));
            self.emit(format_args!("\nCannot execute \"{name}\""));
            self.emit(format_args!(
                "\nOnly one test case can be executed at a time.\n"
            ));
        }
    }

    /// Mark the active test case as complete and report its verdict.
    pub fn case_end(&mut self) {
        if self.case_active {
            if self.current_case_pass {
                self.emit(format_args!("\nTest Case Passed"));
            } else {
                self.emit(format_args!("\nTest Case Failed"));
            }
            self.case_active = false;
        } else {
            warn!("case_end() with no case active");
            self.emit(format_args!("\n\nERROR: A test case is not active."));
            self.emit(format_args!("\nCall 'case_start' first.\n"));
        }
    }

    /// Whether every assertion since the last [`log_on`](Self::log_on) has
    /// passed. Valid to call at any time.
    pub fn all_passed(&self) -> bool {
        !self.failed_assert
    }

    /// Shared failure path for all assertion kinds.
    ///
    /// The failure is recorded even when no case is active: the run
    /// summary still reflects it, it is just attributed to no case.
    pub(crate) fn assert_failed(&mut self, file: &str, line: u32, msg: &str) {
        let file = if file.is_empty() { "<unknown>" } else { file };
        self.emit(format_args!(
            "\n    Assert Failed in File: {file}, Line {line}:{msg}"
        ));
        self.current_case_pass = false;
        self.failed_assert = true;
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        for sink in &mut self.sinks {
            let _ = fmt::Write::write_fmt(&mut FmtSink(sink.as_mut()), args);
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::TestHarness;
    use crate::sink::BufferSink;

    fn harness_with_capture() -> (TestHarness, BufferSink) {
        let capture = BufferSink::new();
        let mut harness = TestHarness::new();
        harness.log_on(Some(Box::new(capture.clone())));
        (harness, capture)
    }

    #[test]
    fn suite_numbers_increase_and_survive_sessions() {
        let (mut t, out) = harness_with_capture();
        t.suite_start("first");
        t.suite_end();
        t.log_off();

        t.log_on(Some(Box::new(out.clone())));
        t.suite_start("second");
        t.suite_end();

        let text = out.contents();
        assert!(text.contains("Test Suite Number: 1"));
        assert!(text.contains("Test Suite Number: 2"));
    }

    #[test]
    fn second_suite_start_is_rejected() {
        let (mut t, out) = harness_with_capture();
        t.suite_start("A");
        t.suite_start("B");

        let text = out.contents();
        assert!(text.contains("ERROR: A test suite is already active."));
        assert!(text.contains("Cannot execute \"B\""));
        // suite A is still the active one; ending it emits the completion
        t.suite_end();
        assert!(out.contents().contains("Test Suite Complete"));
        // and B was never started, so no second suite number was handed out
        assert!(!out.contents().contains("Test Suite Number: 2"));
        assert!(t.all_passed());
    }

    #[test]
    fn suite_end_without_start_is_rejected() {
        let (mut t, out) = harness_with_capture();
        t.suite_end();
        assert!(out.contents().contains("ERROR: A test suite is not active."));
        assert!(t.all_passed());
    }

    #[test]
    fn case_end_reports_the_verdict() {
        let (mut t, out) = harness_with_capture();
        t.case_start("passing");
        t.case_end();
        assert!(out.contents().contains("Test Case Passed"));

        t.case_start("failing");
        t.assert_i32_eq(5, 6, file!(), line!());
        t.case_end();
        assert!(out.contents().contains("Test Case Failed"));
    }

    #[test]
    fn case_failure_is_irreversible() {
        let (mut t, out) = harness_with_capture();
        t.case_start("mixed");
        t.assert_i32_eq(5, 6, file!(), line!());
        t.assert_i32_eq(7, 7, file!(), line!());
        t.case_end();
        assert!(out.contents().contains("Test Case Failed"));
        assert!(!out.contents().contains("Test Case Passed"));
    }

    #[test]
    fn rejected_case_start_keeps_the_failure_state() {
        let (mut t, out) = harness_with_capture();
        t.case_start("outer");
        t.assert_bool_eq(true, false, file!(), line!());
        // rejected; must not reset the pass flag of the active case
        t.case_start("inner");
        t.case_end();
        assert!(out.contents().contains("Test Case Failed"));
    }

    #[test]
    fn case_end_without_start_leaves_state_usable() {
        let (mut t, out) = harness_with_capture();
        t.case_end();
        assert!(out.contents().contains("ERROR: A test case is not active."));
        assert!(t.all_passed());

        t.case_start("after");
        t.case_end();
        assert!(out.contents().contains("Test Case Passed"));
    }

    #[test]
    fn failure_outside_any_case_still_fails_the_run() {
        let (mut t, out) = harness_with_capture();
        t.assert_u8_eq(1, 2, file!(), line!());
        assert!(!t.all_passed());
        assert!(out.contents().contains("Assert Failed in File:"));
        // no case existed to report a verdict for
        assert!(!out.contents().contains("Test Case Failed"));
    }

    #[test]
    fn log_on_resets_the_run_summary() {
        let mut t = TestHarness::new();
        t.log_on(None);
        assert!(t.all_passed());
        t.assert_i16_eq(-1, 1, file!(), line!());
        assert!(!t.all_passed());
        t.log_on(None);
        assert!(t.all_passed());
    }

    #[test]
    fn without_sinks_output_is_suppressed_but_state_tracked() {
        let mut t = TestHarness::new();
        t.log_on(None);
        t.suite_start("silent");
        t.case_start("silent case");
        t.assert_u32_eq(1, 2, file!(), line!());
        t.case_end();
        t.suite_end();
        assert!(!t.all_passed());
    }

    #[test]
    fn log_off_is_idempotent() {
        let (mut t, _) = harness_with_capture();
        t.log_off();
        t.log_off();
    }

    #[test]
    fn empty_file_location_gets_a_placeholder() {
        let (mut t, out) = harness_with_capture();
        t.assert_i8_eq(3, 4, "", 0);
        assert!(
            out.contents()
                .contains("Assert Failed in File: <unknown>, Line 0:")
        );
    }
}
