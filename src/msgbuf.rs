// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Fixed-capacity message buffer.

use core::fmt::{self, Write};
use core::str;

/// Maximum length of an assertion failure message, in bytes.
pub const MAX_MSG_LEN: usize = 100;

/// Bounded string builder used to format assertion failure messages.
///
/// Writes past the capacity are truncated at a character boundary instead
/// of reallocating, so building a failure message never allocates and
/// never overflows.
pub(crate) struct MsgBuf {
    buf: [u8; MAX_MSG_LEN],
    len: usize,
}

impl MsgBuf {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; MAX_MSG_LEN],
            len: 0,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        // only complete UTF-8 sequences are ever copied in
        str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl Write for MsgBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let space = MAX_MSG_LEN - self.len;
        let end = if s.len() <= space {
            s.len()
        } else {
            let mut end = space;
            while end > 0 && !s.is_char_boundary(end) {
                end -= 1;
            }
            end
        };
        self.buf[self.len..self.len + end].copy_from_slice(&s.as_bytes()[..end]);
        self.len += end;
        Ok(())
    }
}
