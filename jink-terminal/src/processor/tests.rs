use super::*;
use jink_highlight::ansi;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;

/// Yields one queued chunk per read, then an optional error, then EOF.
struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
    error: Option<io::Error>,
}

impl ChunkedReader {
    fn new(chunks: &[&[u8]]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| c.to_vec()).collect(),
            error: None,
        }
    }

    fn failing_with(mut self, error: io::Error) -> Self {
        self.error = Some(error);
        self
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(chunk) = self.chunks.pop_front() {
            buf[..chunk.len()].copy_from_slice(&chunk);
            return Ok(chunk.len());
        }
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(0),
        }
    }
}

/// Records each `write_all` as a separate chunk.
#[derive(Default)]
struct RecordingWriter {
    writes: Vec<Vec<u8>>,
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn relay(processor: &StreamProcessor, chunks: &[&[u8]]) -> Vec<Vec<u8>> {
    let mut out = RecordingWriter::default();
    processor.relay_output(ChunkedReader::new(chunks), &mut out);
    out.writes
}

fn plain_processor() -> StreamProcessor {
    let processor = StreamProcessor::new(Highlighter::new());
    processor.set_enabled(false);
    processor
}

#[test]
fn test_disabled_relay_is_byte_exact() {
    let input: &[&[u8]] = &[b"line one\r\n", b"\x1b[K\xff\xfeuser@r> ", b"\x1b[3", b"1m"];
    let writes = relay(&plain_processor(), input);
    assert_eq!(writes.concat(), input.concat());
}

#[test]
fn test_prompt_without_newline_is_written_at_end_of_read() {
    let writes = relay(&plain_processor(), &[b"banner\nuser@router> "]);
    assert_eq!(writes, vec![b"banner\n".to_vec(), b"user@router> ".to_vec()]);
}

#[test]
fn test_unterminated_burst_is_written_in_bounded_pieces() {
    let burst = vec![b'#'; 9000];
    let writes = relay(&plain_processor(), &[&burst]);
    assert!(writes.len() >= 3);
    assert!(writes.iter().all(|w| w.len() <= crate::buffer::FLUSH_LIMIT + 1));
    assert_eq!(writes.concat(), burst);
}

#[test]
fn test_split_escape_is_never_written_split() {
    let processor = StreamProcessor::new(Highlighter::new());
    let writes = relay(&processor, &[b"show route\x1b[3", b"1mdone\x1b", b"[K\n"]);
    for write in &writes {
        assert_eq!(ansi::incomplete_escape_start(write), None, "{write:?}");
    }
    let joined = writes.concat();
    assert!(joined.windows(5).any(|w| w == b"\x1b[31m"));
    assert!(joined.windows(3).any(|w| w == b"\x1b[K"));
    assert_eq!(ansi::strip(&joined), b"show routedone\n".to_vec());
}

#[test]
fn test_highlighted_relay_preserves_text() {
    let processor = StreamProcessor::new(Highlighter::new());
    let input = "\x1b[Kuser@router> show bgp summary\r\nPeer  AS  State\r\n10.0.0.2  65001  Establ\r\n";
    let writes = relay(&processor, &[input.as_bytes()]);
    let joined = writes.concat();
    assert!(joined.starts_with(b"\x1b[K"));
    assert_ne!(joined, input.as_bytes());
    assert_eq!(ansi::strip(&joined), ansi::strip(input.as_bytes()));
}

#[test]
fn test_utf8_split_across_reads_is_rejoined() {
    let processor = StreamProcessor::new(Highlighter::new());
    let writes = relay(&processor, &[b"description caf\xc3", b"\xa9;\n"]);
    for write in &writes {
        assert!(std::str::from_utf8(write).is_ok(), "{write:?}");
    }
    assert_eq!(ansi::strip(&writes.concat()), "description café;\n".as_bytes());
}

#[test]
fn test_read_error_ends_relay_after_flush() {
    let mut out = RecordingWriter::default();
    let reader = ChunkedReader::new(&[b"partial\x1b["])
        .failing_with(io::Error::other("input/output error"));
    plain_processor().relay_output(reader, &mut out);
    assert_eq!(out.writes.concat(), b"partial\x1b[".to_vec());
}

#[test]
fn test_interrupted_read_is_retried() {
    let mut out = RecordingWriter::default();
    let reader = InterruptOnce {
        inner: ChunkedReader::new(&[b"a\n"]),
        interrupted: false,
    };
    plain_processor().relay_output(reader, &mut out);
    assert_eq!(out.writes.concat(), b"a\n".to_vec());
}

struct InterruptOnce {
    inner: ChunkedReader,
    interrupted: bool,
}

impl Read for InterruptOnce {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::from(ErrorKind::Interrupted));
        }
        self.inner.read(buf)
    }
}

#[test]
fn test_set_theme_and_enabled_are_shared_with_clones() {
    let processor = StreamProcessor::new(Highlighter::new()).with_debug(true);
    let clone = processor.clone();
    processor.set_theme(Theme::by_name("nord"));
    processor.set_enabled(false);
    assert_eq!(clone.highlighter().theme().name(), "Nord");
    assert!(!clone.highlighter().is_enabled());
}
