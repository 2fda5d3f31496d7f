//! The tokenizer.
//!
//! A [`Lexer`] scans one chunk (a line or a buffer) and is then discarded.
//! Scanning never fails: unterminated strings, comments and wildcards run to
//! the end of the input, and every byte of the input lands in exactly one
//! token, so joining the token values reproduces the chunk.

use crate::keywords::{self, ConfigClass};
use crate::mode::{ParseMode, detect_parse_mode};
use crate::patterns;
use crate::prompt;
use crate::token::{Token, TokenKind};

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes that end a bare word.
fn is_word_break(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b'{' | b'}' | b';' | b'"' | b'\'' | b'#')
}

/// Per-scan tokenizer state.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    mode: ParseMode,
    mode_latched: bool,
    /// Next word or quoted string is the argument of a value-taking keyword
    expecting_value: bool,
    /// Next all-digit word is a logical unit number
    expecting_unit: bool,
    last_word: Option<&'a str>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer that detects its parse mode from the input.
    pub fn new(input: &'a str) -> Self {
        Self::with_mode(input, ParseMode::Auto)
    }

    /// Create a lexer with an explicit parse mode.
    ///
    /// [`ParseMode::Config`] and [`ParseMode::Show`] are used as-is and the
    /// detector never runs.
    pub fn with_mode(input: &'a str, mode: ParseMode) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            mode,
            mode_latched: mode != ParseMode::Auto,
            expecting_value: false,
            expecting_unit: false,
            last_word: None,
        }
    }

    pub fn set_parse_mode(&mut self, mode: ParseMode) {
        self.mode = mode;
        self.mode_latched = mode != ParseMode::Auto;
    }

    /// Current parse mode. After the first word of an auto-mode scan this is
    /// the detected mode.
    pub fn parse_mode(&self) -> ParseMode {
        self.mode
    }

    pub fn is_mode_latched(&self) -> bool {
        self.mode_latched
    }

    /// The most recently classified word.
    pub fn last_word(&self) -> Option<&'a str> {
        self.last_word
    }

    /// Scan the whole input.
    ///
    /// If the entire input is a CLI prompt it is decomposed by
    /// [`prompt::tokenize_prompt`] instead of being scanned.
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        if let Some(tokens) = prompt::tokenize_prompt(self.input) {
            return tokens;
        }

        let mut tokens = Vec::new();
        while self.pos < self.input.len() {
            tokens.push(self.next_token());
        }
        tokens
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    fn peek(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        let Some(&b) = self.input.as_bytes().get(self.pos) else {
            return;
        };
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if b & 0xC0 != 0x80 {
            // continuation bytes belong to the previous character
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Advance while `pred` holds for the current byte.
    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek(0) {
            if !pred(b) {
                break;
            }
            self.advance();
        }
    }

    fn token_from(&self, kind: TokenKind, start: usize, line: usize, column: usize) -> Token<'a> {
        let input = self.input;
        Token::new(kind, &input[start..self.pos], line, column)
    }

    // ========================================================================
    // Scanners
    // ========================================================================

    fn next_token(&mut self) -> Token<'a> {
        let (start, line, column) = (self.pos, self.line, self.column);

        if column == 1
            && let Some(kind) = self.scan_diff_marker()
        {
            return self.token_from(kind, start, line, column);
        }

        let Some(b) = self.peek(0) else {
            return self.token_from(TokenKind::Text, start, line, column);
        };

        let kind = match b {
            b'#' => self.scan_comment(),
            b'/' if self.peek(1) == Some(b'*') => self.scan_block_comment(),
            b'"' | b'\'' => {
                let is_value = std::mem::take(&mut self.expecting_value);
                self.scan_string(b);
                if is_value {
                    TokenKind::Value
                } else {
                    TokenKind::QuotedString
                }
            }
            b'{' | b'}' => {
                self.expecting_value = false;
                self.advance();
                TokenKind::Brace
            }
            b';' => {
                self.expecting_value = false;
                self.advance();
                TokenKind::Semicolon
            }
            b'<' => {
                self.scan_wildcard();
                TokenKind::Wildcard
            }
            b'*' => {
                self.advance();
                TokenKind::Wildcard
            }
            b if is_whitespace(b) => {
                self.advance_while(is_whitespace);
                TokenKind::Text
            }
            _ if self.expecting_value => {
                self.expecting_value = false;
                self.scan_unquoted_value();
                TokenKind::Value
            }
            _ => {
                self.advance_while(|b| !is_word_break(b));
                let input = self.input;
                let word = &input[start..self.pos];
                self.classify_word(word)
            }
        };
        self.token_from(kind, start, line, column)
    }

    /// `[edit ...]` context headers and `+ `/`- ` line markers from
    /// `show | compare`.
    fn scan_diff_marker(&mut self) -> Option<TokenKind> {
        let rest = &self.input[self.pos..];
        if rest.starts_with("[edit") {
            self.advance_while(|b| b != b'\n');
            return Some(TokenKind::DiffContext);
        }
        let kind = match self.peek(0)? {
            b'+' => TokenKind::DiffAdd,
            b'-' => TokenKind::DiffRemove,
            _ => return None,
        };
        if matches!(self.peek(1), Some(b' ' | b'\t')) {
            self.advance();
            Some(kind)
        } else {
            None
        }
    }

    /// `#` comment or `##` annotation, to end of line.
    fn scan_comment(&mut self) -> TokenKind {
        let kind = if self.peek(1) == Some(b'#') {
            TokenKind::Annotation
        } else {
            TokenKind::Comment
        };
        self.advance_while(|b| b != b'\n');
        kind
    }

    /// `/* ... */`, or to end of input if unterminated.
    fn scan_block_comment(&mut self) -> TokenKind {
        self.advance();
        self.advance();
        while self.pos < self.input.len() {
            if self.peek(0) == Some(b'*') && self.peek(1) == Some(b'/') {
                self.advance();
                self.advance();
                break;
            }
            self.advance();
        }
        TokenKind::Comment
    }

    /// Quoted string with backslash escapes, or to end of input if
    /// unterminated.
    fn scan_string(&mut self, quote: u8) {
        self.advance();
        while let Some(b) = self.peek(0) {
            if b == quote {
                self.advance();
                return;
            }
            if b == b'\\' && self.peek(1).is_some() {
                self.advance();
            }
            self.advance();
        }
    }

    /// `<...>`, or to end of input if unterminated.
    fn scan_wildcard(&mut self) {
        self.advance();
        self.advance_while(|b| b != b'>');
        if self.peek(0).is_some() {
            self.advance();
        }
    }

    /// Keyword argument up to `;`, newline or end of input. Trailing blanks
    /// are left for the whitespace scanner.
    fn scan_unquoted_value(&mut self) {
        let start = self.pos;
        let rest = &self.input[start..];
        let raw_len = rest.find([';', '\n']).unwrap_or(rest.len());
        let trimmed_len = rest[..raw_len].trim_end_matches([' ', '\t', '\r']).len();
        while self.pos < start + trimmed_len {
            self.advance();
        }
    }

    // ========================================================================
    // Classification
    // ========================================================================

    fn classify_word(&mut self, word: &'a str) -> TokenKind {
        if !self.mode_latched {
            self.mode = detect_parse_mode(self.input);
            self.mode_latched = true;
        }
        self.last_word = Some(word);

        if self.expecting_unit && patterns::is_unit_number(word) {
            self.expecting_unit = false;
            return TokenKind::Unit;
        }
        if patterns::is_asn(word) {
            return TokenKind::Asn;
        }

        let lower = word.to_lowercase();
        match self.mode {
            ParseMode::Show => self.classify_show_word(word, &lower),
            ParseMode::Config | ParseMode::Auto => self.classify_config_word(word, &lower),
        }
    }

    fn classify_config_word(&mut self, word: &str, lower: &str) -> TokenKind {
        match keywords::config_class(lower) {
            Some(ConfigClass::Keyword) => {
                if keywords::is_value_keyword(lower) {
                    self.expecting_value = true;
                }
                if lower == "unit" {
                    self.expecting_unit = true;
                }
                TokenKind::Keyword
            }
            Some(class) => class.token_kind(),
            None => patterns::classify_shared(word),
        }
    }

    fn classify_show_word(&self, word: &str, lower: &str) -> TokenKind {
        if let Some(kind) = keywords::state_kind(lower) {
            return kind;
        }
        if keywords::is_status_symbol(word) {
            return TokenKind::StatusSymbol;
        }
        if let Some(kind) = patterns::classify_show_pattern(word) {
            return kind;
        }
        if keywords::is_column_header(lower) {
            return TokenKind::ColumnHeader;
        }
        patterns::classify_shared(word)
    }
}

/// Tokenize `input` with a fresh auto-mode [`Lexer`].
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).tokenize()
}
