//! Escape-sequence segmentation and stripping.
//!
//! Splits a byte stream into runs of plain text and terminal control
//! sequences so text can be colorized while the remote device's own cursor
//! control bytes are re-emitted untouched. Recognized forms:
//!
//! - CSI: `ESC [`, parameter/intermediate bytes in `0x20..=0x3F`, one final
//!   byte in `0x40..=0x7E`
//! - Control strings (OSC `ESC ]`, DCS `ESC P`, SOS `ESC X`, PM `ESC ^`,
//!   APC `ESC _`): up to and including `BEL` or `ESC \` when the
//!   terminator is present; otherwise the two-byte introducer alone
//! - Any other escape: intermediate bytes in `0x20..=0x2F`, then one ASCII
//!   final byte
//!
//! A CSI or intermediate-byte sequence cut off by the end of the input is
//! consumed to the end. Every sequence boundary falls on an ASCII byte, so
//! segmenting a `&str` never splits a character.

use std::ops::Range;

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// One run of the segmented input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The exact source bytes of this run.
    pub bytes: &'a [u8],
    /// `true` for a control sequence, `false` for plain text.
    pub is_escape: bool,
}

/// Length of an escape sequence starting at `input[start]` (which must be
/// `ESC`), and whether it was terminated before the end of the input.
fn scan_escape(input: &[u8], start: usize) -> (usize, bool) {
    let mut i = start + 1;
    let Some(&introducer) = input.get(i) else {
        return (1, false);
    };

    match introducer {
        b'[' => {
            i += 1;
            while i < input.len() && (0x20..=0x3F).contains(&input[i]) {
                i += 1;
            }
            if i < input.len() && (0x40..=0x7E).contains(&input[i]) {
                (i + 1 - start, true)
            } else {
                (i - start, i < input.len())
            }
        }
        b']' | b'P' | b'X' | b'^' | b'_' => match string_terminator_end(input, i + 1) {
            Some(end) => (end - start, true),
            // No terminator in sight: just the introducer
            None => (2, true),
        },
        _ => {
            while i < input.len() && (0x20..=0x2F).contains(&input[i]) {
                i += 1;
            }
            match input.get(i) {
                Some(b) if b.is_ascii() => (i + 1 - start, true),
                // Non-ASCII final byte: end the sequence before it
                Some(_) => (i - start, true),
                None => (i - start, false),
            }
        }
    }
}

/// End offset (exclusive) of the first `BEL` or `ESC \` at or after `from`.
fn string_terminator_end(input: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < input.len() {
        match input[i] {
            BEL => return Some(i + 1),
            ESC if input.get(i + 1) == Some(&b'\\') => return Some(i + 2),
            _ => i += 1,
        }
    }
    None
}

/// Byte ranges of the segments, in order.
fn segment_ranges(input: &[u8]) -> Vec<(Range<usize>, bool)> {
    let mut ranges = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < input.len() {
        if input[i] != ESC {
            i += 1;
            continue;
        }
        if text_start < i {
            ranges.push((text_start..i, false));
        }
        let (len, _) = scan_escape(input, i);
        ranges.push((i..i + len, true));
        i += len;
        text_start = i;
    }

    if text_start < input.len() {
        ranges.push((text_start..input.len(), false));
    }
    ranges
}

/// Split `input` into text and escape runs. Concatenating the segments
/// reproduces `input` exactly.
pub fn segments(input: &[u8]) -> Vec<Segment<'_>> {
    segment_ranges(input)
        .into_iter()
        .map(|(range, is_escape)| Segment {
            bytes: &input[range],
            is_escape,
        })
        .collect()
}

/// [`segments`] for text; yields `(text, is_escape)` pairs.
pub fn segments_str(input: &str) -> Vec<(&str, bool)> {
    segment_ranges(input.as_bytes())
        .into_iter()
        .map(|(range, is_escape)| (&input[range], is_escape))
        .collect()
}

/// Remove every escape sequence from `input`.
pub fn strip(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for (range, is_escape) in segment_ranges(input) {
        if !is_escape {
            out.extend_from_slice(&input[range]);
        }
    }
    out
}

/// [`strip`] for text.
pub fn strip_str(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (text, is_escape) in segments_str(input) {
        if !is_escape {
            out.push_str(text);
        }
    }
    out
}

/// Whether `input` contains a CSI introducer.
pub fn has_escapes(input: &str) -> bool {
    input.contains("\x1b[")
}

/// Offset of an escape sequence that is still open at the end of `input`.
///
/// Used by streaming callers to hold back a sequence split across reads.
pub fn incomplete_escape_start(input: &[u8]) -> Option<usize> {
    let (range, is_escape) = segment_ranges(input).pop()?;
    if !is_escape {
        return None;
    }
    let (_, complete) = scan_escape(input, range.start);
    (!complete).then_some(range.start)
}
