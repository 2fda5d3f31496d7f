//! Ordered structural pattern cascade.
//!
//! The patterns overlap on purpose: a MAC address or a BGP community also
//! satisfies the permissive IPv6 pattern, and an IPv4 prefix starts with an
//! IPv4 address. Rules are therefore evaluated strictly in list order and the
//! first match wins. The order of [`SHARED_PATTERN_ORDER`] and
//! [`SHOW_PATTERN_ORDER`] is part of the lexer's contract.

use crate::token::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

// ============================================================================
// Compiled patterns
// ============================================================================

fn re_interface() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:[gx]e|et|so|fe|at|t1|t3|e1|e3|mge|vcp|si|lsq|rlsq)-[0-9]+/[0-9]+/[0-9]+(?::[0-9]+)?(?:\.[0-9]+)?$",
            r"|^(?:ae|reth|lo|em|me|irb|vlan|fab|gr|ip|vt|lt|ms|sp|pp|pd|pe|demux|dsc|mtun|pimd|pime|tap|lsi|st|vtep|fti|jsrv|gre|ipip)[0-9]*(?:\.[0-9]+)?$",
            r"|^[efm]xp[0-9]+(?:\.[0-9]+)?$",
            r"|^vme(?:\.[0-9]+)?$",
            r"|^all$",
        ))
        .expect("re_interface: pattern is valid and should always compile")
    })
}

fn re_ipv4() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$")
            .expect("re_ipv4: pattern is valid and should always compile")
    })
}

fn re_ipv4_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}/[0-9]{1,2}$")
            .expect("re_ipv4_prefix: pattern is valid and should always compile")
    })
}

fn re_ipv6() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F:]+:[0-9a-fA-F:]*$")
            .expect("re_ipv6: pattern is valid and should always compile")
    })
}

fn re_ipv6_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F:]+:[0-9a-fA-F:]*/[0-9]{1,3}$")
            .expect("re_ipv6_prefix: pattern is valid and should always compile")
    })
}

fn re_mac() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[0-9a-fA-F]{2}:){5}[0-9a-fA-F]{2}(?:/[0-9]{1,2})?$")
            .expect("re_mac: pattern is valid and should always compile")
    })
}

fn re_community() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]+:[0-9]+$")
            .expect("re_community: pattern is valid and should always compile")
    })
}

fn re_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]+[gmkGMK]?$")
            .expect("re_number: pattern is valid and should always compile")
    })
}

fn re_asn() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[Aa][Ss][0-9]+$").expect("re_asn: pattern is valid and should always compile")
    })
}

fn re_time_duration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[0-9]+[wdhms])+$|^[0-9]+:[0-9]{2}(?::[0-9]{2})?$")
            .expect("re_time_duration: pattern is valid and should always compile")
    })
}

fn re_percentage() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]+(?:\.[0-9]+)?%$")
            .expect("re_percentage: pattern is valid and should always compile")
    })
}

fn re_byte_size() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]+(?:\.[0-9]+)?[KMGTP][Bb]?$")
            .expect("re_byte_size: pattern is valid and should always compile")
    })
}

fn re_route_protocol() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[(?:BGP|OSPF|OSPF3|ISIS|RIP|Static|Direct|Local|Aggregate)/[0-9]+\]$")
            .expect("re_route_protocol: pattern is valid and should always compile")
    })
}

fn re_table_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:inet|inet6|mpls|bgp|iso|l2vpn)\.[0-9]+:?$")
            .expect("re_table_name: pattern is valid and should always compile")
    })
}

// ============================================================================
// Rule lists
// ============================================================================

/// A named pattern that classifies a whole word.
#[derive(Clone, Copy)]
pub struct PatternRule {
    pub name: &'static str,
    pub kind: TokenKind,
    regex: fn() -> &'static Regex,
}

impl PatternRule {
    const fn new(name: &'static str, kind: TokenKind, regex: fn() -> &'static Regex) -> Self {
        Self { name, kind, regex }
    }

    pub fn is_match(&self, word: &str) -> bool {
        (self.regex)().is_match(word)
    }
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Patterns tried in both modes, most specific first.
pub const SHARED_PATTERN_ORDER: [PatternRule; 8] = [
    PatternRule::new("interface", TokenKind::Interface, re_interface),
    PatternRule::new("ipv4-prefix", TokenKind::Ipv4Prefix, re_ipv4_prefix),
    PatternRule::new("ipv4", TokenKind::Ipv4, re_ipv4),
    PatternRule::new("mac", TokenKind::Mac, re_mac),
    PatternRule::new("community", TokenKind::Community, re_community),
    PatternRule::new("ipv6-prefix", TokenKind::Ipv6Prefix, re_ipv6_prefix),
    PatternRule::new("ipv6", TokenKind::Ipv6, re_ipv6),
    PatternRule::new("number", TokenKind::Number, re_number),
];

/// Show-output value patterns, tried after the state and status-symbol
/// lookups and before column headers.
pub const SHOW_PATTERN_ORDER: [PatternRule; 5] = [
    PatternRule::new("time-duration", TokenKind::TimeDuration, re_time_duration),
    PatternRule::new("percentage", TokenKind::Percentage, re_percentage),
    PatternRule::new("byte-size", TokenKind::ByteSize, re_byte_size),
    PatternRule::new("route-protocol", TokenKind::RouteProtocol, re_route_protocol),
    PatternRule::new("table-name", TokenKind::TableName, re_table_name),
];

fn first_match(rules: &[PatternRule], word: &str) -> Option<TokenKind> {
    rules.iter().find(|rule| rule.is_match(word)).map(|rule| rule.kind)
}

/// Classify a word against the shared cascade, defaulting to
/// [`TokenKind::Identifier`].
pub fn classify_shared(word: &str) -> TokenKind {
    first_match(&SHARED_PATTERN_ORDER, word).unwrap_or(TokenKind::Identifier)
}

/// Classify a word against the show-output value patterns.
pub fn classify_show_pattern(word: &str) -> Option<TokenKind> {
    first_match(&SHOW_PATTERN_ORDER, word)
}

/// `AS65000`, any case.
pub fn is_asn(word: &str) -> bool {
    re_asn().is_match(word)
}

/// All ASCII digits, at least one.
pub fn is_unit_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interfaces() {
        for name in [
            "ge-0/0/0", "ge-0/0/0.100", "ge-0/0/0:1", "xe-1/2/3.0", "et-0/0/48", "ae15",
            "lo0.0", "irb.100", "em0", "me0", "vlan", "fxp0", "vme.0", "all",
        ] {
            assert_eq!(classify_shared(name), TokenKind::Interface, "{name}");
        }
        assert_eq!(classify_shared("ge-0/0"), TokenKind::Identifier);
    }

    #[test]
    fn test_prefix_wins_over_address() {
        assert_eq!(classify_shared("192.168.1.0/24"), TokenKind::Ipv4Prefix);
        assert_eq!(classify_shared("192.168.1.1"), TokenKind::Ipv4);
        assert_eq!(classify_shared("2001:db8::/32"), TokenKind::Ipv6Prefix);
        assert_eq!(classify_shared("2001:db8::1"), TokenKind::Ipv6);
    }

    /// MAC addresses and communities also satisfy the IPv6 pattern
    #[test]
    fn test_overlaps_resolved_by_order() {
        assert!(re_ipv6().is_match("00:11:22:33:44:55"));
        assert_eq!(classify_shared("00:11:22:33:44:55"), TokenKind::Mac);
        assert!(re_ipv6().is_match("65000:100"));
        assert_eq!(classify_shared("65000:100"), TokenKind::Community);
    }

    #[test]
    fn test_sized_numbers() {
        for n in ["100", "10g", "100m", "1G"] {
            assert_eq!(classify_shared(n), TokenKind::Number, "{n}");
        }
        assert_eq!(classify_shared("10x"), TokenKind::Identifier);
    }

    #[test]
    fn test_asn() {
        assert!(is_asn("AS65000"));
        assert!(is_asn("as65001"));
        assert!(is_asn("As12345"));
        assert!(!is_asn("AS"));
        assert!(!is_asn("ASN1"));
    }

    #[test]
    fn test_show_patterns() {
        assert_eq!(classify_show_pattern("1w2d"), Some(TokenKind::TimeDuration));
        assert_eq!(classify_show_pattern("0:05:10"), Some(TokenKind::TimeDuration));
        assert_eq!(classify_show_pattern("99.9%"), Some(TokenKind::Percentage));
        assert_eq!(classify_show_pattern("1.5G"), Some(TokenKind::ByteSize));
        assert_eq!(classify_show_pattern("[BGP/170]"), Some(TokenKind::RouteProtocol));
        assert_eq!(classify_show_pattern("inet.0:"), Some(TokenKind::TableName));
        assert_eq!(classify_show_pattern("INET6.0"), Some(TokenKind::TableName));
        assert_eq!(classify_show_pattern("65000:100"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        assert_eq!(classify_shared("١٢٣"), TokenKind::Identifier);
        assert!(!is_unit_number("١"));
        assert!(is_unit_number("0"));
        assert!(!is_unit_number(""));
    }
}
