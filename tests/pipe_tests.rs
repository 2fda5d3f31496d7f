//! One-shot pipe filter behavior.

use jink::highlight::Highlighter;
use jink::highlight::ansi::strip;
use jink::pipe::highlight_stream;
use pretty_assertions::assert_eq;

fn run(highlighter: &Highlighter, input: &[u8], force: bool) -> Vec<u8> {
    let mut out = Vec::new();
    highlight_stream(highlighter, input, &mut out, force).expect("in-memory I/O");
    out
}

fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8(output.to_vec())
        .expect("utf-8 output")
        .split_inclusive('\n')
        .map(str::to_string)
        .collect()
}

#[test]
fn test_unrelated_text_passes_through() {
    let h = Highlighter::new();
    let input = b"hello world\ntotal 48\n";
    assert_eq!(run(&h, input, false), input.to_vec());
}

#[test]
fn test_detection_is_sticky() {
    let h = Highlighter::new();
    let input = b"hello world\nset system host-name r1\n}\n";
    let out = lines(&run(&h, input, false));
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], "hello world\n");
    assert_ne!(out[1], "set system host-name r1\n");
    // A lone brace is only colored because detection already fired
    assert_ne!(out[2], "}\n");
}

#[test]
fn test_force_colors_every_line() {
    let h = Highlighter::new();
    let out = lines(&run(&h, b"}\n", true));
    assert_ne!(out[0], "}\n");
    let out = lines(&run(&h, b"}\n", false));
    assert_eq!(out[0], "}\n");
}

#[test]
fn test_output_strips_back_to_input() {
    let h = Highlighter::new();
    let input = include_bytes!("../samples/config.conf");
    let out = run(&h, input, false);
    assert_eq!(strip(&out), input.to_vec());
}

#[test]
fn test_disabled_is_verbatim() {
    let h = Highlighter::new();
    h.disable();
    let input = b"set system host-name r1\n";
    assert_eq!(run(&h, input, true), input.to_vec());
}

#[test]
fn test_invalid_utf8_line_is_verbatim() {
    let h = Highlighter::new();
    let input = b"set system\n\xff\xfe bytes\n";
    let out = run(&h, input, true);
    assert!(out.ends_with(b"\xff\xfe bytes\n"));
}

#[test]
fn test_last_line_without_newline() {
    let h = Highlighter::new();
    let out = run(&h, b"set system", false);
    assert_eq!(strip(&out), b"set system".to_vec());
    assert!(out.len() > b"set system".len());
}
