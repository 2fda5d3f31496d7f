//! Line buffering for the output relay.
//!
//! Output is flushed on every newline, whenever the buffer grows past
//! [`FLUSH_LIMIT`], and at the end of every read so an interactive prompt
//! without a trailing newline shows up immediately. Flushes other than
//! [`OutputBuffer::finish`] keep back a trailing escape sequence or UTF-8
//! character that the next read will complete, so neither is ever
//! highlighted in two halves.

use jink_highlight::ansi;

/// Bytes requested from the pseudo-terminal per read.
pub const READ_BUFFER_SIZE: usize = 32 * 1024;

/// Initial capacity of the line buffer.
pub const LINE_BUFFER_CAPACITY: usize = 4096;

/// The buffer is flushed once it holds more than this many bytes.
pub const FLUSH_LIMIT: usize = 4000;

/// Longest open escape sequence carried over to the next read. Anything
/// longer is written as-is.
pub const MAX_PENDING_ESCAPE: usize = 256;

/// Accumulates relay output and hands out chunks ready for highlighting.
#[derive(Debug)]
pub struct OutputBuffer {
    line: Vec<u8>,
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            line: Vec::with_capacity(LINE_BUFFER_CAPACITY),
        }
    }

    /// Bytes held back by the last flush.
    pub fn pending(&self) -> &[u8] {
        &self.line
    }

    /// Append one read, passing every chunk that is ready to `emit`.
    pub fn push(&mut self, data: &[u8], mut emit: impl FnMut(&[u8])) {
        for &b in data {
            self.line.push(b);
            if b == b'\n' || self.line.len() > FLUSH_LIMIT {
                self.flush_pending(&mut emit);
            }
        }
        self.flush_pending(&mut emit);
    }

    /// Flush everything except an incomplete trailing sequence.
    pub fn flush_pending(&mut self, mut emit: impl FnMut(&[u8])) {
        let ready = self.line.len() - held_back_len(&self.line);
        if ready > 0 {
            emit(&self.line[..ready]);
            self.line.drain(..ready);
        }
    }

    /// Flush everything, complete or not. Used at end of stream.
    pub fn finish(&mut self, mut emit: impl FnMut(&[u8])) {
        if !self.line.is_empty() {
            emit(&self.line);
            self.line.clear();
        }
    }
}

/// Length of the tail that must wait for more input.
fn held_back_len(buf: &[u8]) -> usize {
    if let Some(start) = ansi::incomplete_escape_start(buf) {
        let len = buf.len() - start;
        return if len <= MAX_PENDING_ESCAPE { len } else { 0 };
    }
    incomplete_utf8_len(buf)
}

/// Length of a truncated UTF-8 sequence at the end of `buf`.
fn incomplete_utf8_len(buf: &[u8]) -> usize {
    let tail = &buf[buf.len().saturating_sub(3)..];
    for (i, &b) in tail.iter().enumerate().rev() {
        if b & 0xC0 == 0x80 {
            continue;
        }
        let width = match b {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return 0,
        };
        let have = tail.len() - i;
        return if have < width { have } else { 0 };
    }
    0
}
