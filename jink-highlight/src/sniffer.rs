//! Content sniffing for the non-forced highlight path.
//!
//! Line-local and tuned to miss rather than to colorize unrelated text.

use jink_lexer::{is_prompt, looks_like_prompt};

const CONFIG_INDICATORS: &[&str] = &[
    "set ",
    "delete ",
    "show ",
    "edit ",
    "interfaces {",
    "system {",
    "protocols {",
    "routing-options",
    "policy-options",
    "firewall {",
    "security {",
    "groups {",
    "vlans {",
    "ge-",
    "xe-",
    "et-",
    "ae",
    "lo0",
    "family inet",
    "unit ",
    "vlan-id",
    "ospf",
    "bgp",
    "neighbor",
    "group",
];

const SHOW_INDICATORS: &[&str] = &[
    "establ",
    "idle",
    "full",
    "2way",
    "inet.0",
    "inet6.0",
    "mpls.0",
    "bgp.evpn",
    "bgp summary",
    "ospf neighbor",
    "interface terse",
    "physical interface",
    "logical interface",
    "routing table",
    "flaps",
    "up/dn",
    "state:",
    "admin link",
    "outq",
];

const COMMAND_PREFIXES: &[&str] = &["set ", "delete ", "show ", "edit ", "request ", "##"];

/// Brace-newline or semicolon layout plus a config-ish marker.
fn has_structure(text: &str, lower: &str) -> bool {
    if !text.contains("{\n") && !text.contains(';') {
        return false;
    }
    lower.contains("version ") || text.contains('#') || lower.contains("host-name")
}

/// Decide whether escape-stripped `text` should be highlighted.
pub fn looks_like_device_text(text: &str) -> bool {
    if looks_like_prompt(text) || is_prompt(text.trim()) {
        return true;
    }

    let lower = text.to_lowercase();
    if CONFIG_INDICATORS.iter().any(|ind| lower.contains(ind)) {
        return true;
    }
    if SHOW_INDICATORS.iter().any(|ind| lower.contains(ind)) {
        return true;
    }
    if has_structure(text, &lower) {
        return true;
    }

    let trimmed = lower.trim();
    COMMAND_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}
