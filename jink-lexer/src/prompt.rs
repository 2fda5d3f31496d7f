//! CLI prompt recognition.
//!
//! A device prompt looks like
//! `{master:0}[edit interfaces]\r\nuser@router# show | compare`: an optional
//! role marker, an optional edit context, control bytes left over from the
//! remote line editor, then `user@host` followed by `>` (operational mode) or
//! `#` (configuration mode) and whatever command has been typed so far.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use regex::Regex;
use std::sync::OnceLock;

fn re_prompt() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<role>\{[^}\n]+\})?",
            r"(?P<edit>\[edit[^\]\n]*\])?",
            r"(?P<ctrl>[ \x00-\x1f]*)",
            r"(?P<user>[A-Za-z0-9_-]+)@(?P<host>[A-Za-z0-9_.-]+)(?P<mode>[>#])",
            r"(?P<gap>[ \t]*)(?P<command>.*?)(?P<newline>\n?)$",
        ))
        .expect("re_prompt: pattern is valid and should always compile")
    })
}

/// Whether the whole of `line` is a device prompt.
pub fn is_prompt(line: &str) -> bool {
    re_prompt().is_match(line)
}

/// Cheap structural check for prompt-like text anywhere in a chunk.
///
/// Requires an `@` that is neither first nor last, preceded by an
/// alphanumeric or `-` and followed by an alphanumeric, plus a `>` or `#`
/// somewhere in the text.
pub fn looks_like_prompt(text: &str) -> bool {
    let bytes = text.as_bytes();
    let Some(at) = bytes.iter().position(|&b| b == b'@') else {
        return false;
    };
    if !bytes.iter().any(|&b| b == b'>' || b == b'#') {
        return false;
    }
    if at == 0 || at + 1 >= bytes.len() {
        return false;
    }
    let before = bytes[at - 1];
    let after = bytes[at + 1];
    (before.is_ascii_alphanumeric() || before == b'-') && after.is_ascii_alphanumeric()
}

/// 1-based (line, column) of a byte offset, counting columns in characters.
fn position_of(input: &str, offset: usize) -> (usize, usize) {
    let prefix = &input[..offset];
    let line = 1 + prefix.matches('\n').count();
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    (line, prefix[line_start..].chars().count() + 1)
}

/// Decompose a whole-chunk prompt into tokens.
///
/// Returns `None` if `input` is not a prompt. The typed command is
/// re-tokenized by a fresh [`Lexer`] and its columns are shifted to its
/// position in `input`.
pub fn tokenize_prompt(input: &str) -> Option<Vec<Token<'_>>> {
    let caps = re_prompt().captures(input)?;
    let operational = &caps["mode"] == ">";
    let mut tokens = Vec::new();

    let field = |kind: TokenKind, name: &str| {
        caps.name(name)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| {
                let (line, column) = position_of(input, m.start());
                Token::new(kind, &input[m.range()], line, column)
            })
    };

    tokens.extend(field(TokenKind::PromptEdit, "role"));
    tokens.extend(field(TokenKind::PromptEdit, "edit"));
    tokens.extend(field(TokenKind::Text, "ctrl"));
    tokens.extend(field(TokenKind::PromptUser, "user"));

    // `@` sits between the user and host captures
    let user_end = caps.name("user").map_or(0, |m| m.end());
    let (line, column) = position_of(input, user_end);
    tokens.push(Token::new(
        TokenKind::PromptAt,
        &input[user_end..user_end + 1],
        line,
        column,
    ));

    let (host_kind, mode_kind) = if operational {
        (TokenKind::PromptHostOper, TokenKind::PromptOper)
    } else {
        (TokenKind::PromptHostConf, TokenKind::PromptConf)
    };
    tokens.extend(field(host_kind, "host"));
    tokens.extend(field(mode_kind, "mode"));
    tokens.extend(field(TokenKind::Text, "gap"));

    if let Some(command) = caps.name("command").filter(|m| !m.as_str().is_empty()) {
        let (line, column) = position_of(input, command.start());
        let mut lexer = Lexer::new(&input[command.range()]);
        tokens.extend(lexer.tokenize().into_iter().map(|tok| Token {
            line: line + tok.line - 1,
            column: column + tok.column - 1,
            ..tok
        }));
    }

    tokens.extend(field(TokenKind::Text, "newline"));
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_values<'a>(tokens: &[Token<'a>]) -> Vec<(TokenKind, &'a str)> {
        tokens.iter().map(|t| (t.kind, t.value)).collect()
    }

    #[test]
    fn test_operational_prompt_with_command() {
        let tokens = tokenize_prompt("user@router> show route").expect("is a prompt");
        assert_eq!(
            kinds_and_values(&tokens)[..7],
            [
                (TokenKind::PromptUser, "user"),
                (TokenKind::PromptAt, "@"),
                (TokenKind::PromptHostOper, "router"),
                (TokenKind::PromptOper, ">"),
                (TokenKind::Text, " "),
                (TokenKind::Command, "show"),
                (TokenKind::Text, " "),
            ]
        );
        let show = &tokens[5];
        assert_eq!((show.line, show.column), (1, 14));
    }

    #[test]
    fn test_configuration_prompt_with_edit_context() {
        let tokens = tokenize_prompt("[edit interfaces]\r\nadmin@core-1.lab# ").expect("is a prompt");
        assert_eq!(
            kinds_and_values(&tokens),
            [
                (TokenKind::PromptEdit, "[edit interfaces]"),
                (TokenKind::Text, "\r\n"),
                (TokenKind::PromptUser, "admin"),
                (TokenKind::PromptAt, "@"),
                (TokenKind::PromptHostConf, "core-1.lab"),
                (TokenKind::PromptConf, "#"),
                (TokenKind::Text, " "),
            ]
        );
        assert_eq!((tokens[2].line, tokens[2].column), (2, 1));
    }

    #[test]
    fn test_role_marker_and_trailing_newline() {
        let input = "{master:0}\nuser@mx1>\n";
        let tokens = tokenize_prompt(input).expect("is a prompt");
        assert_eq!(tokens[0].kind, TokenKind::PromptEdit);
        assert_eq!(tokens[0].value, "{master:0}");
        assert_eq!(tokens.last().map(|t| t.value), Some("\n"));
        let joined: String = tokens.iter().map(|t| t.value).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_command_is_not_trimmed() {
        let input = "user@router> show version  ";
        let tokens = tokenize_prompt(input).expect("is a prompt");
        let joined: String = tokens.iter().map(|t| t.value).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_not_a_prompt() {
        assert!(tokenize_prompt("set system host-name r1").is_none());
        assert!(tokenize_prompt("user@router> show\nmore output").is_none());
        assert!(!is_prompt("email me at someone@example.com"));
    }

    #[test]
    fn test_prompt_names_are_ascii() {
        assert!(is_prompt("user_1@r-1.lab> "));
        assert!(!is_prompt("usér@router> "));
        assert!(!is_prompt("user@routér> "));
        assert!(!is_prompt("\u{a0}user@router> "));
        assert!(is_prompt("\r\x1b[Kuser@router> "));
    }

    #[test]
    fn test_cheap_heuristic() {
        assert!(looks_like_prompt("user@router> "));
        assert!(looks_like_prompt("noc-1@edge# commit"));
        assert!(!looks_like_prompt("@router>"));
        assert!(!looks_like_prompt("user@"));
        assert!(!looks_like_prompt("user@router"));
        assert!(!looks_like_prompt("user @router>"));
        assert!(!looks_like_prompt("user@.router>"));
    }
}
