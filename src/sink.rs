// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Text sinks for test output.
//!
//! The framework never touches the console or the filesystem directly;
//! every line goes through the [`Sink`] capability so output destinations
//! can be tailored to the target environment. The harness registers zero
//! or more sinks and duplicates each emission to all of them.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

/// A destination that accepts formatted test output.
pub trait Sink {
    /// Write a chunk of already-formatted text.
    fn write_str(&mut self, s: &str);

    /// Flush any buffered output. The default does nothing.
    fn flush(&mut self) {}
}

/// Adapter that lets the `core::fmt` machinery drive a [`Sink`].
pub(crate) struct FmtSink<'a>(pub &'a mut dyn Sink);

impl fmt::Write for FmtSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}

/// Interface the embedder implements to route console output when the
/// framework is built without `std`.
///
/// Implement it with `#[crate_interface::impl_interface]` on the side that
/// owns the console device.
#[cfg(not(feature = "std"))]
#[crate_interface::def_interface]
pub trait ConsoleWrite {
    /// Write a chunk of text to the console device.
    fn write_str(s: &str);
}

/// Sink backed by the console.
///
/// With `std` this prints to stdout; without it, output goes through the
/// [`ConsoleWrite`] interface.
#[derive(Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write_str(&mut self, s: &str) {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                std::print!("{s}");
            } else {
                crate_interface::call_interface!(ConsoleWrite::write_str, s);
            }
        }
    }

    #[cfg(feature = "std")]
    fn flush(&mut self) {
        use std::io::Write;
        let _ = std::io::stdout().flush();
    }
}

/// Sink that writes to a log file through a buffered writer.
#[cfg(feature = "std")]
pub struct FileSink {
    writer: std::io::BufWriter<std::fs::File>,
}

#[cfg(feature = "std")]
impl FileSink {
    /// Create the log file, truncating any previous contents.
    pub fn create(path: &std::path::Path) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            writer: std::io::BufWriter::new(file),
        })
    }
}

#[cfg(feature = "std")]
impl Sink for FileSink {
    fn write_str(&mut self, s: &str) {
        use std::io::Write;
        if let Err(err) = self.writer.write_all(s.as_bytes()) {
            warn!("log file write failed: {err}");
        }
    }

    fn flush(&mut self) {
        use std::io::Write;
        if let Err(err) = self.writer.flush() {
            warn!("log file flush failed: {err}");
        }
    }
}

/// Capture sink backed by a shared string buffer.
///
/// Clones share the same buffer, so a caller can hand one clone to
/// [`crate::TestHarness::log_on`] and keep another to inspect what was
/// emitted.
#[derive(Clone, Default)]
pub struct BufferSink {
    buf: Rc<RefCell<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> String {
        self.buf.borrow().clone()
    }
}

impl Sink for BufferSink {
    fn write_str(&mut self, s: &str) {
        self.buf.borrow_mut().push_str(s);
    }
}
