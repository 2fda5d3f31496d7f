//! Property tests for the tokenizer.

use jink_lexer::{Lexer, ParseMode, Token, TokenKind, tokenize};
use proptest::prelude::*;

fn joined(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.value).collect()
}

/// Text built from fragments that exercise every scanner branch
fn junos_like() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "set ", "delete ", "interfaces ", "ge-0/0/0", ".100", " unit ", "0", "description ",
        "\"quoted \\\" text\"", "'single'", "{", "}", ";", "\n", "\r\n", "\t", "  ", "#", "##",
        "/*", "*/", "<", ">", "*", "+ ", "- ", "[edit ", "]", "user@router", "# ", "> ",
        "10.0.0.1/24", "2001:db8::1", "00:11:22:33:44:55", "65000:100", "AS65000",
        "Establ", "up", "Idle", "inet.0:", "[BGP/170]", "1w2d", "99%", "1.5G", "é", "日本",
        "\x1b", "\\",
    ]);
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_tokens_reproduce_arbitrary_input(input in any::<String>()) {
        prop_assert_eq!(joined(&tokenize(&input)), input);
    }

    #[test]
    fn test_tokens_reproduce_junos_like_input(input in junos_like()) {
        for mode in [ParseMode::Auto, ParseMode::Config, ParseMode::Show] {
            let tokens = Lexer::with_mode(&input, mode).tokenize();
            prop_assert_eq!(joined(&tokens), input.clone());
        }
    }

    #[test]
    fn test_no_empty_tokens(input in junos_like()) {
        prop_assert!(tokenize(&input).iter().all(|t| !t.value.is_empty()));
    }

    #[test]
    fn test_classification_is_deterministic(input in junos_like()) {
        let first: Vec<(TokenKind, &str)> =
            tokenize(&input).iter().map(|t| (t.kind, t.value)).collect();
        let second: Vec<(TokenKind, &str)> =
            tokenize(&input).iter().map(|t| (t.kind, t.value)).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_positions_are_one_based(input in junos_like()) {
        for token in tokenize(&input) {
            prop_assert!(token.line >= 1);
            prop_assert!(token.column >= 1);
        }
    }
}
