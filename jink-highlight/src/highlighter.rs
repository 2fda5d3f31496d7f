//! The rendering pipeline.
//!
//! [`Highlighter`] composes the escape segmenter, the content sniffer, the
//! lexer and a [`Theme`]. It is shared between threads: the theme and the
//! enabled flag sit behind one `RwLock` that is held only long enough to
//! copy them out, never across tokenizing or rendering.

use crate::ansi;
use crate::sniffer::looks_like_device_text;
use crate::theme::Theme;
use jink_lexer::{Lexer, ParseMode};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug)]
struct State {
    theme: Arc<Theme>,
    enabled: bool,
}

/// Thread-safe colorizer for Junos text.
#[derive(Debug)]
pub struct Highlighter {
    state: RwLock<State>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Enabled highlighter with the default theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            state: RwLock::new(State {
                theme: Arc::new(theme),
                enabled: true,
            }),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        log::debug!("Switching theme to {}", theme.name());
        self.state.write().theme = Arc::new(theme);
    }

    /// The active theme.
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.state.read().theme)
    }

    pub fn enable(&self) {
        self.state.write().enabled = true;
    }

    pub fn disable(&self) {
        self.state.write().enabled = false;
    }

    /// Flip the enabled flag and return the new value.
    pub fn toggle(&self) -> bool {
        let mut state = self.state.write();
        state.enabled = !state.enabled;
        state.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.state.read().enabled
    }

    /// Theme to render with, or `None` if highlighting is off.
    fn active_theme(&self) -> Option<Arc<Theme>> {
        let state = self.state.read();
        state.enabled.then(|| Arc::clone(&state.theme))
    }

    // ========================================================================
    // Text paths
    // ========================================================================

    /// Highlight `input` if it looks like device text.
    ///
    /// Escape sequences already present are stripped before sniffing and are
    /// not part of the output. Input that is empty, unrecognized, or arrives
    /// while highlighting is disabled is returned unchanged.
    pub fn highlight<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if input.is_empty() {
            return Cow::Borrowed(input);
        }
        let Some(theme) = self.active_theme() else {
            return Cow::Borrowed(input);
        };

        let cleaned = ansi::strip_str(input);
        if !looks_like_device_text(&cleaned) {
            return Cow::Borrowed(input);
        }

        let mut out = String::with_capacity(cleaned.len() * 2);
        render_text(&theme, &cleaned, ParseMode::Auto, &mut out);
        Cow::Owned(out)
    }

    /// Highlight without sniffing. Escape sequences in `input` are passed
    /// through unchanged around the colorized text.
    pub fn highlight_forced<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if input.is_empty() {
            return Cow::Borrowed(input);
        }
        let Some(theme) = self.active_theme() else {
            return Cow::Borrowed(input);
        };

        let mut out = String::with_capacity(input.len() * 2);
        for (text, is_escape) in ansi::segments_str(input) {
            if is_escape {
                out.push_str(text);
            } else {
                render_text(&theme, text, ParseMode::Auto, &mut out);
            }
        }
        Cow::Owned(out)
    }

    /// Byte-level [`Highlighter::highlight_forced`] for raw terminal output.
    ///
    /// Runs of invalid UTF-8 are passed through unchanged.
    pub fn highlight_bytes_forced<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
        if input.is_empty() {
            return Cow::Borrowed(input);
        }
        let Some(theme) = self.active_theme() else {
            return Cow::Borrowed(input);
        };

        let mut out = Vec::with_capacity(input.len() * 2);
        let mut rendered = String::new();
        for segment in ansi::segments(input) {
            if segment.is_escape {
                out.extend_from_slice(segment.bytes);
                continue;
            }
            for chunk in segment.bytes.utf8_chunks() {
                if !chunk.valid().is_empty() {
                    rendered.clear();
                    render_text(&theme, chunk.valid(), ParseMode::Auto, &mut rendered);
                    out.extend_from_slice(rendered.as_bytes());
                }
                out.extend_from_slice(chunk.invalid());
            }
        }
        Cow::Owned(out)
    }

    /// Highlight with the lexer pinned to command-output classification.
    pub fn highlight_show_output<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if input.is_empty() {
            return Cow::Borrowed(input);
        }
        let Some(theme) = self.active_theme() else {
            return Cow::Borrowed(input);
        };

        let mut out = String::with_capacity(input.len() * 2);
        render_text(&theme, input, ParseMode::Show, &mut out);
        Cow::Owned(out)
    }

    /// Same as [`Highlighter::highlight`]; one line at a time.
    pub fn highlight_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.highlight(line)
    }

    pub fn highlight_lines(&self, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.highlight(line).into_owned())
            .collect()
    }
}

fn render_text(theme: &Theme, text: &str, mode: ParseMode, out: &mut String) {
    let tokens = Lexer::with_mode(text, mode).tokenize();
    theme.render(&tokens, out);
}

/// Highlight with a fresh default highlighter.
pub fn highlight(input: &str) -> String {
    Highlighter::new().highlight(input).into_owned()
}
