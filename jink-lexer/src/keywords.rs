//! Vocabulary tables.
//!
//! The word lists overlap (`evpn` is both a section and a protocol, `ssh` both
//! a command and a protocol). Lookups resolve overlaps by the fixed cascade
//! order: command, section, protocol, action, keyword. The combined tables are
//! built once and shared read-only by every lexer.

use crate::token::TokenKind;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

// ============================================================================
// Word lists
// ============================================================================

/// Operational and configuration-mode commands.
const COMMANDS: &[&str] = &[
    "set", "delete", "deactivate", "activate", "protect", "unprotect", "edit", "show",
    "request", "run", "insert", "rename", "copy", "top", "exit", "quit", "commit",
    "rollback", "load", "save", "configure", "cli", "help", "clear", "restart", "start",
    "stop", "monitor", "ping", "traceroute", "ssh", "telnet",
];

/// Top-level configuration hierarchy names.
const SECTIONS: &[&str] = &[
    "system", "chassis", "interfaces", "routing-options", "routing-instances", "protocols",
    "policy-options", "firewall", "security", "class-of-service", "applications",
    "services", "snmp", "forwarding-options", "groups", "apply-groups",
    "apply-groups-except", "vlans", "bridge-domains", "virtual-chassis", "multi-chassis",
    "access", "ethernet-switching-options", "switch-options", "poe", "event-options",
    "accounting-options", "logical-systems", "tenants", "evpn", "vxlan", "mac-vrf",
    "virtual-switch", "overlay", "underlay", "dynamic-profiles", "subscriber-management",
    "unified-edge", "diameter", "aaa", "address-assignment", "access-profile", "openconfig",
    "telemetry", "streaming-telemetry", "grpc", "gnmi",
];

/// Routing, transport and service protocols.
const PROTOCOLS: &[&str] = &[
    "ospf", "ospf3", "bgp", "isis", "is-is", "rip", "ripng", "ldp", "rsvp", "mpls", "vpls",
    "evpn", "pim", "igmp", "mld", "msdp", "bfd", "lacp", "lldp", "lldp-med", "rstp", "mstp",
    "vstp", "stp", "vrrp", "dot1x", "oam", "cfm", "tcp", "udp", "icmp", "icmp6", "icmpv6",
    "gre", "ipip", "esp", "ah", "sctp", "inet", "inet6", "iso", "ccc", "bridge",
    "ethernet-switching", "inet-vpn", "inet6-vpn", "l2vpn", "ssh", "telnet", "ftp", "tftp",
    "http", "https", "ntp", "dns", "dhcp", "radius", "tacplus", "syslog", "netconf",
    "junoscript", "vxlan", "vtep", "vni", "esi", "l2circuit", "l3vpn", "mc-lag",
    "igmp-snooping", "mld-snooping", "l2-learning", "source-packet-routing", "spring",
    "srv6", "segment-routing", "pcep", "te", "sr-te", "sr-mpls", "sr-policy", "pppoe",
    "ppp", "l2tp", "dhcpv6", "diameter", "gx", "gy", "nasreq", "subscriber", "ike", "ipsec",
    "alg", "sip", "h323", "mgcp", "sccp", "rtsp", "pptp", "sunrpc", "msrpc", "gnmi", "grpc",
    "openconfig",
];

/// Policy and firewall actions and match conditions.
const ACTIONS: &[&str] = &[
    "accept", "reject", "discard", "deny", "permit", "next", "next-term", "count", "log",
    "syslog", "sample", "port-mirror", "analyzer", "next-hop", "self", "table", "policy",
    "community", "local-preference", "metric", "origin", "as-path", "as-path-prepend",
    "med", "preference", "tag", "color", "color2", "load-balance", "install-nexthop",
    "loss-priority", "loss-priority-high", "loss-priority-low", "loss-priority-medium-high",
    "loss-priority-medium-low", "forwarding-class", "forwarding-class-except", "policer",
    "three-color-policer", "dscp", "traffic-class", "tunnel", "ipsec-vpn", "source-nat",
    "destination-nat", "static-nat", "first-fragment", "fragment-offset",
    "fragment-offset-except", "is-fragment", "fragment-flags", "tcp-initial",
    "tcp-established", "tcp-flags", "syn", "ack", "fin", "rst", "push", "urgent",
    "icmp-type", "icmp-type-except", "icmp-code", "icmp-code-except", "packet-length",
    "packet-length-except", "ttl", "ttl-except", "hop-limit", "hop-limit-except",
    "payload-protocol", "payload-protocol-except", "traffic-type", "traffic-type-except",
    "source-mac-address", "destination-mac-address", "ether-type", "vlan-ether-type",
    "user-vlan-id", "learn-vlan-id", "dot1q-tag", "dot1q-user-priority", "interface",
    "interface-group", "interface-group-except", "interface-set", "ifl-number",
    "input-interface", "output-interface", "next-header", "next-header-except",
    "extension-header", "extension-header-except", "ip-options", "ip-options-except",
    "flexible-match-mask", "flexible-match-range", "loss-priority-except",
    "packet-length-range", "port-except", "prefix-list-except", "source-class",
    "destination-class", "service-filter-hit", "policy-map",
];

/// General configuration statements.
const KEYWORDS: &[&str] = &[
    "version", "host-name", "domain-name", "name-server", "root-authentication", "login",
    "user", "class", "authentication", "encrypted-password", "ssh-rsa", "ssh-dsa",
    "ssh-ecdsa", "ssh-ed25519", "description", "disable", "enable", "inactive",
    "apply-macro", "apply-path", "unit", "family", "address", "vlan-id", "vlan-tagging",
    "flexible-vlan-tagging", "native-vlan-id", "mtu", "speed", "duplex", "auto-negotiation",
    "no-auto-negotiation", "gigether-options", "ether-options", "aggregated-ether-options",
    "link-speed", "minimum-links", "lacp", "active", "passive", "fast", "slow", "force-up",
    "interface-range", "member", "members", "interface-mode", "trunk", "access", "scripts",
    "language", "synchronize", "login-alarms", "login-tip", "permissions", "uid", "gid",
    "password", "format", "port", "root-login", "protocol-version", "auto-snapshot",
    "time-zone", "filter", "term", "from", "then", "source-address", "destination-address",
    "source-port", "destination-port", "source-prefix-list", "destination-prefix-list",
    "protocol", "prefix-list", "prefix-list-filter", "route-filter", "community-count",
    "as-path-group", "rib-group", "rib", "static", "route", "qualified-next-hop",
    "preference", "tag", "no-readvertise", "retain", "no-retain", "discard", "reject",
    "receive", "aggregate", "generate", "martians", "router-id", "autonomous-system",
    "confederation", "instance-type", "interface-routes", "area", "interface", "neighbor",
    "group", "type", "peer-as", "local-as", "import", "export", "local-address",
    "authentication-key", "authentication-type", "bfd-liveness-detection",
    "minimum-interval", "multiplier", "hold-time", "damping", "multihop",
    "no-client-reflect", "cluster", "remove-private", "default-metric",
    "reference-bandwidth", "traffic-engineering", "shortcuts", "no-nssa-abr", "stub",
    "nssa", "default-lsa", "summaries", "virtual-link", "transit-area",
    "label-switched-path", "path", "primary", "secondary", "standby", "bandwidth",
    "priority", "hop-limit", "record", "cspf", "node-link-protection", "fast-reroute",
    "detour", "admin-group", "include", "include-any", "exclude", "optimize-timer",
    "revert-timer", "signaled-bandwidth", "zone", "security-zone", "address-book",
    "host-inbound-traffic", "system-services", "policies", "policy", "match", "application",
    "source-zone", "destination-zone", "nat", "source", "destination", "pool", "rule-set",
    "rule", "translation-type", "translated", "screen", "ids-option", "icmp", "ip",
    "tcp-rst", "session-close", "alarm-threshold", "flow", "tcp-session", "tcp-mss",
    "allow-dns-reply", "allow-embedded-icmp", "ike", "gateway", "proposal", "ipsec", "vpn",
    "tunnel", "establish-tunnels", "immediately", "on-traffic", "responder-only",
    "bind-interface", "ike-policy", "ipsec-policy", "pre-shared-key", "ascii-text",
    "certificate", "local-identity", "remote-identity", "dead-peer-detection", "interval",
    "threshold", "general-ikeid", "no-anti-replay", "trap-group", "trap-options",
    "categories", "targets", "community-name", "authorization", "read-only", "read-write",
    "view", "client-list", "interface-list", "location", "contact", "community",
    "storm-control-profiles", "storm-control", "analyzer", "port-mirroring", "helpers",
    "ip-version", "ip-protocol", "ipv4", "ipv6", "ip-destination-address",
    "ip-source-address", "ip6-destination-address", "ip6-source-address",
    "router-advertisement", "router-solicitation", "neighbor-advertisement",
    "neighbor-solicitation", "dhcpv6-client", "dhcp-client", "client-type",
    "client-ia-type", "ia-na", "ia-pd", "rapid-commit", "client-identifier", "duid-type",
    "duid-llt", "duid-ll", "stateful", "stateless", "default", "inactive:", "vni",
    "vtep-source-interface", "extended-vni-list", "encapsulation", "multicast-mode",
    "ingress-replication", "route-distinguisher", "vrf-target", "vrf-import", "vrf-export",
    "vrf-table-label", "auto-export", "auto-rt", "ethernet-segment", "esi", "all-active",
    "single-active", "designated-forwarder-election", "df-election-type", "recovery-timer",
    "default-gateway", "advertise-default-gateway", "no-arp-suppression", "proxy-arp",
    "proxy-nd", "virtual-router", "vrf", "layer2-control", "interconnect",
    "no-vrf-propagate-ttl", "iccp", "peer", "liveness-detection", "redundancy-group",
    "preempt", "node-segment", "index-range", "srgb", "srlb", "sid", "prefix-segment",
    "adjacency-segment", "binding-segment", "tilfa", "ti-lfa", "post-convergence-lfa",
    "backup-selection", "segment-list", "compute", "explicit", "sr-te-template",
    "lsp-external-controller", "pce-controlled", "delegate", "report", "stateful-pce",
    "pce-peer", "destination-prefix", "locator", "end-sid", "end-x-sid", "end-dt",
    "source-routing-header", "encapsulation-mode", "demux-source", "underlying-interface",
    "client-profile", "server-profile", "ppp-options", "pppoe-options",
    "service-name-table", "max-sessions", "session-limit", "service-profile",
    "authentication-order", "accounting", "radius-server", "tacplus-server", "secret",
    "timeout", "retry", "network", "range", "low", "high", "dhcp-attributes", "option",
    "option-82", "relay-option", "relay-agent-information", "subscriber-id",
    "agent-circuit-id", "agent-remote-id", "lns", "lac", "l2tp-access-profile",
    "receive-window", "retransmit-interval", "maximum-receive-window", "tunnel-group",
    "traffic-control", "traffic-control-profile", "scheduler-map", "shaping-rate",
    "guaranteed-rate", "sensor", "sensor-name", "resource", "reporting-rate",
    "polling-interval", "change-update", "on-change", "target-defined", "export-profile",
    "local-port", "remote-address", "remote-port", "transport", "encoding", "subscription",
    "xpath", "sensor-based-stats", "file", "commit-script", "op-script", "event-script",
    "slax", "python", "allow-commands", "deny-commands", "extension-service",
    "request-response", "notification",
];

/// Keywords whose argument runs to the end of the statement.
const VALUE_KEYWORDS: &[&str] = &[
    "description", "host-name", "domain-name", "name-server", "encrypted-password",
    "authentication-key", "pre-shared-key", "ascii-text", "community-name", "version",
];

// Operational states, matched case-insensitively
const STATES_GOOD: &[&str] = &[
    "up", "establ", "established", "full", "master", "primary", "enabled", "ok", "online",
    "running", "ready", "complete",
];

const STATES_BAD: &[&str] = &[
    "down", "idle", "failed", "error", "offline", "disabled", "unreachable", "timeout",
    "active", "connect", "opensent", "openconfirm",
];

const STATES_WARNING: &[&str] = &[
    "init", "2way", "exstart", "exchange", "loading", "flapping", "pending", "waiting",
    "starting", "stopping",
];

const STATES_NEUTRAL: &[&str] = &[
    "inactive", "standby", "backup", "n/a", "none",
];

/// Column titles in tabular show output.
const COLUMN_HEADERS: &[&str] = &[
    "neighbor", "peer", "state", "interface", "admin", "link", "proto", "local", "remote",
    "as", "inpkt", "outpkt", "flaps", "uptime", "up/dn", "mtu", "speed", "type", "area",
    "dr", "bdr", "metric", "localpref", "med", "nexthop", "gateway", "flags", "outq",
    "prefixes", "paths",
];

/// Route and flag markers. Matched case-sensitively.
const STATUS_SYMBOLS: &[&str] = &[
    "*", "+", "-", ">", "B", "O", "I", "S", "L", "D",
];

// ============================================================================
// Lookups
// ============================================================================

/// Config-mode vocabulary class of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigClass {
    Command,
    Section,
    Protocol,
    Action,
    Keyword,
}

impl ConfigClass {
    /// Lookup order. Earlier classes win when a word appears in several lists.
    pub const CASCADE: [ConfigClass; 5] = [
        ConfigClass::Command,
        ConfigClass::Section,
        ConfigClass::Protocol,
        ConfigClass::Action,
        ConfigClass::Keyword,
    ];

    fn words(self) -> &'static [&'static str] {
        match self {
            ConfigClass::Command => COMMANDS,
            ConfigClass::Section => SECTIONS,
            ConfigClass::Protocol => PROTOCOLS,
            ConfigClass::Action => ACTIONS,
            ConfigClass::Keyword => KEYWORDS,
        }
    }

    pub fn token_kind(self) -> TokenKind {
        match self {
            ConfigClass::Command => TokenKind::Command,
            ConfigClass::Section => TokenKind::Section,
            ConfigClass::Protocol => TokenKind::Protocol,
            ConfigClass::Action => TokenKind::Action,
            ConfigClass::Keyword => TokenKind::Keyword,
        }
    }
}

fn config_table() -> &'static HashMap<&'static str, ConfigClass> {
    static TABLE: OnceLock<HashMap<&'static str, ConfigClass>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for class in ConfigClass::CASCADE {
            for word in class.words() {
                table.entry(*word).or_insert(class);
            }
        }
        table
    })
}

fn state_table() -> &'static HashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<HashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let groups = [
            (STATES_GOOD, TokenKind::StateGood),
            (STATES_BAD, TokenKind::StateBad),
            (STATES_WARNING, TokenKind::StateWarning),
            (STATES_NEUTRAL, TokenKind::StateNeutral),
        ];
        let mut table = HashMap::new();
        for (words, kind) in groups {
            for word in words {
                table.entry(*word).or_insert(kind);
            }
        }
        table
    })
}

fn set_of(
    cell: &'static OnceLock<HashSet<&'static str>>,
    words: &'static [&'static str],
) -> &'static HashSet<&'static str> {
    cell.get_or_init(|| words.iter().copied().collect())
}

/// Config-mode class of an already-lowercased word.
pub fn config_class(lower: &str) -> Option<ConfigClass> {
    config_table().get(lower).copied()
}

/// Whether a keyword's argument should be scanned as a value.
pub fn is_value_keyword(lower: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    set_of(&SET, VALUE_KEYWORDS).contains(lower)
}

/// Operational state kind of an already-lowercased word, if any.
pub fn state_kind(lower: &str) -> Option<TokenKind> {
    state_table().get(lower).copied()
}

pub fn is_column_header(lower: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    set_of(&SET, COLUMN_HEADERS).contains(lower)
}

/// One or two character route marker such as `*`, `B` or `>`.
pub fn is_status_symbol(word: &str) -> bool {
    word.len() <= 2 && STATUS_SYMBOLS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_resolves_overlaps() {
        // ssh is both a command and a protocol
        assert_eq!(config_class("ssh"), Some(ConfigClass::Command));
        // evpn is both a section and a protocol
        assert_eq!(config_class("evpn"), Some(ConfigClass::Section));
        // interface is both an action and a keyword
        assert_eq!(config_class("interface"), Some(ConfigClass::Action));
        assert_eq!(config_class("host-name"), Some(ConfigClass::Keyword));
        assert_eq!(config_class("router"), None);
    }

    #[test]
    fn test_up_is_not_a_config_word() {
        assert_eq!(config_class("up"), None);
        assert_eq!(state_kind("up"), Some(TokenKind::StateGood));
    }

    #[test]
    fn test_state_groups() {
        assert_eq!(state_kind("establ"), Some(TokenKind::StateGood));
        assert_eq!(state_kind("active"), Some(TokenKind::StateBad));
        assert_eq!(state_kind("2way"), Some(TokenKind::StateWarning));
        assert_eq!(state_kind("n/a"), Some(TokenKind::StateNeutral));
        assert_eq!(state_kind("Establ"), None, "lookups expect lowercase input");
    }

    #[test]
    fn test_value_keywords() {
        assert!(is_value_keyword("description"));
        assert!(is_value_keyword("host-name"));
        assert!(!is_value_keyword("unit"));
    }

    #[test]
    fn test_status_symbols_are_case_sensitive() {
        assert!(is_status_symbol("*"));
        assert!(is_status_symbol("B"));
        assert!(!is_status_symbol("b"));
        assert!(!is_status_symbol("BGP"));
    }

    #[test]
    fn test_column_headers() {
        assert!(is_column_header("up/dn"));
        assert!(is_column_header("outq"));
        assert!(!is_column_header("Peer"), "lookups expect lowercase input");
    }
}
