//! Parse-mode detection.
//!
//! Decides whether a chunk reads like configuration syntax or like
//! operational command output by scoring fixed indicator substrings in a
//! bounded prefix of the text. Ambiguous samples are treated as configuration.

use regex::Regex;
use std::sync::OnceLock;

/// Number of leading bytes inspected by [`detect_parse_mode`].
pub const SAMPLE_LEN: usize = 500;

/// How words are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Detect from the first word of the scan, then latch
    #[default]
    Auto,
    /// Configuration statements (`set ...`, hierarchical braces)
    Config,
    /// Operational command output (`show ...` tables)
    Show,
}

const CONFIG_INDICATORS: &[&str] = &[
    "set ",
    "delete ",
    "{",
    "}",
    ";",
    "host-name",
    "policy-statement",
];

const SHOW_INDICATORS: &[&str] = &[
    "establ",
    "idle",
    "2way",
    "inet.0",
    "inet6.0",
    "bgp.evpn",
    "flaps",
    "up/dn",
    "physical interface",
    "logical interface",
];

/// Extra show score for a sample containing aligned columns.
const TABULAR_BONUS: usize = 2;

fn re_tabular() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // ASCII word and space classes only
        Regex::new(r"[A-Za-z0-9_]+[\t\n\x0C\r ]{2,}[A-Za-z0-9_]+[\t\n\x0C\r ]{2,}[A-Za-z0-9_]+")
            .expect("re_tabular: pattern is valid and should always compile")
    })
}

/// Truncate to at most [`SAMPLE_LEN`] bytes on a character boundary.
fn sample(text: &str) -> &str {
    if text.len() <= SAMPLE_LEN {
        return text;
    }
    let mut end = SAMPLE_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Classify a chunk as [`ParseMode::Config`] or [`ParseMode::Show`].
///
/// Each indicator scores at most one point. Show wins only with a score of at
/// least two that is strictly greater than the config score.
pub fn detect_parse_mode(text: &str) -> ParseMode {
    let sample = sample(text);
    let lower = sample.to_lowercase();

    let config_score = CONFIG_INDICATORS
        .iter()
        .filter(|ind| lower.contains(*ind))
        .count();
    let mut show_score = SHOW_INDICATORS
        .iter()
        .filter(|ind| lower.contains(*ind))
        .count();
    if re_tabular().is_match(sample) {
        show_score += TABULAR_BONUS;
    }

    let mode = if show_score >= 2 && show_score > config_score {
        ParseMode::Show
    } else {
        ParseMode::Config
    };
    log::trace!("parse mode {mode:?} (config={config_score}, show={show_score})");
    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_command_is_config() {
        assert_eq!(
            detect_parse_mode("set interfaces ge-0/0/0 unit 0 family inet"),
            ParseMode::Config
        );
    }

    #[test]
    fn test_hierarchical_is_config() {
        assert_eq!(
            detect_parse_mode("system {\n    host-name router;\n}"),
            ParseMode::Config
        );
    }

    #[test]
    fn test_bgp_summary_is_show() {
        let text = "Peer                     AS      InPkt     OutPkt    OutQ   Flaps Last Up/Dwn State\n\
                    10.0.0.2              65001        100        100       0       0     1:00:00 Establ";
        assert_eq!(detect_parse_mode(text), ParseMode::Show);
    }

    #[test]
    fn test_interface_terse_is_show() {
        let text = "Interface               Admin Link Proto    Local                 Remote\n\
                    ge-0/0/0                up    up\n\
                    ge-0/0/0.0              up    up   inet     10.0.0.1/30";
        assert_eq!(detect_parse_mode(text), ParseMode::Show);
    }

    #[test]
    fn test_ospf_neighbor_is_show() {
        let text = "Address          Interface              State\n10.0.0.2         ge-0/0/0.0             Full";
        assert_eq!(detect_parse_mode(text), ParseMode::Show);
    }

    /// A single show indicator is not enough
    #[test]
    fn test_ambiguous_defaults_to_config() {
        assert_eq!(detect_parse_mode("idle"), ParseMode::Config);
        assert_eq!(detect_parse_mode(""), ParseMode::Config);
    }

    /// Config indicators can outweigh show indicators
    #[test]
    fn test_tie_goes_to_config() {
        assert_eq!(detect_parse_mode("flaps idle { } ;"), ParseMode::Config);
    }

    #[test]
    fn test_long_sample_with_tabular_header() {
        let mut text = String::from("Peer        AS        State\n10.0.0.2    65001     Establ\n");
        while text.len() < 600 {
            text.push_str("10.0.0.3    65002     Establ\n");
        }
        assert_eq!(detect_parse_mode(&text), ParseMode::Show);
    }

    /// Indicators beyond the sample window are ignored
    #[test]
    fn test_only_prefix_is_sampled() {
        let mut text = "x".repeat(SAMPLE_LEN);
        text.push_str(" Establ  flaps  inet.0  idle");
        assert_eq!(detect_parse_mode(&text), ParseMode::Config);
    }

    #[test]
    fn test_tabular_columns_are_ascii() {
        assert!(re_tabular().is_match("Peer  AS  State"));
        assert!(!re_tabular().is_match("pé  ér  ö"));
        assert!(!re_tabular().is_match("a\u{a0}\u{a0}b\u{a0}\u{a0}c"));
    }

    #[test]
    fn test_sample_respects_char_boundaries() {
        let text = "é".repeat(SAMPLE_LEN);
        assert!(sample(&text).len() <= SAMPLE_LEN);
        assert_eq!(detect_parse_mode(&text), ParseMode::Config);
    }
}
