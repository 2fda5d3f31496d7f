//! One-shot filter for piped input.
//!
//! Detection is sticky: until some line is recognized, each line goes
//! through the sniffing path. The first line that comes back changed turns
//! on the forced path for the rest of the stream, so lines that carry no
//! marker of their own (a lone `}` or an indented value) are still colored
//! once the payload is known to be device text.

use jink_highlight::Highlighter;
use std::io::{self, BufRead, Write};

/// Copy `reader` to `writer` line by line, highlighting as it goes.
///
/// Lines keep their terminators. A line that is not valid UTF-8 is written
/// unchanged.
pub fn highlight_stream<R: BufRead, W: Write>(
    highlighter: &Highlighter,
    mut reader: R,
    mut writer: W,
    force: bool,
) -> io::Result<()> {
    let mut detected = force;
    let mut line = Vec::new();
    let mut lines = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lines += 1;

        let Ok(text) = std::str::from_utf8(&line) else {
            writer.write_all(&line)?;
            continue;
        };

        if !highlighter.is_enabled() {
            writer.write_all(&line)?;
        } else if detected {
            writer.write_all(highlighter.highlight_forced(text).as_bytes())?;
        } else {
            let out = highlighter.highlight(text);
            if out != text {
                log::debug!("Device text detected at line {}", lines);
                detected = true;
            }
            writer.write_all(out.as_bytes())?;
        }
    }

    log::debug!("Pipe finished after {} lines (detected={})", lines, detected);
    writer.flush()
}
