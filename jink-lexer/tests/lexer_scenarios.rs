//! End-to-end tokenizer scenarios on realistic device text.

use jink_lexer::{Lexer, ParseMode, TokenKind, detect_parse_mode, tokenize};
use pretty_assertions::assert_eq;

fn kinds_of<'a>(input: &'a str, words: &[&str]) -> Vec<(&'a str, TokenKind)> {
    tokenize(input)
        .into_iter()
        .filter(|t| words.contains(&t.value))
        .map(|t| (t.value, t.kind))
        .collect()
}

#[test]
fn test_bgp_summary() {
    let input = "\
Groups: 2 Peers: 2 Down peers: 1
Table          Tot Paths  Act Paths Suppressed    History Damp State    Pending
inet.0
                      10          8          0          0          0          0
Peer                     AS      InPkt     OutPkt    OutQ   Flaps Last Up/Dwn State|#Active/Received/Accepted/Damped...
10.0.0.2              65001       1234       1230       0       0    1w2d3h Establ
10.0.0.6              65002          0          0       0       3       5:12 Active
";
    assert_eq!(
        kinds_of(input, &["inet.0", "Peer", "10.0.0.2", "65001", "1w2d3h", "Establ", "5:12", "Active"]),
        vec![
            ("inet.0", TokenKind::TableName),
            ("Peer", TokenKind::ColumnHeader),
            ("10.0.0.2", TokenKind::Ipv4),
            ("65001", TokenKind::Number),
            ("1w2d3h", TokenKind::TimeDuration),
            ("Establ", TokenKind::StateGood),
            ("5:12", TokenKind::TimeDuration),
            ("Active", TokenKind::StateBad),
        ]
    );
}

#[test]
fn test_interface_terse() {
    let input = "\
Interface               Admin Link Proto    Local                 Remote
ge-0/0/0                up    up
ge-0/0/0.0              up    up   inet     10.0.0.1/30
ge-0/0/1                up    down
lo0.0                   up    up   inet     192.168.255.1       --> 0/0
";
    let tokens = tokenize(input);
    let down = tokens.iter().find(|t| t.value == "down").expect("down");
    assert_eq!(down.kind, TokenKind::StateBad);
    let lo = tokens.iter().find(|t| t.value == "lo0.0").expect("lo0.0");
    assert_eq!(lo.kind, TokenKind::Interface);
    let prefix = tokens.iter().find(|t| t.value == "10.0.0.1/30").expect("prefix");
    assert_eq!(prefix.kind, TokenKind::Ipv4Prefix);
}

#[test]
fn test_hierarchical_config_with_annotations() {
    let input = "\
## Last commit: 2024-01-15 10:30:00 UTC by admin
version 21.4R3.15;
system {
    host-name core-router-01;
    /* management */
    services {
        ssh {
            root-login deny;
        }
    }
}
protocols {
    bgp {
        group EBGP {
            peer-as 65001;
            neighbor 10.0.0.2;
        }
    }
}
";
    assert_eq!(detect_parse_mode(input), ParseMode::Config);
    assert_eq!(
        kinds_of(input, &["version", "21.4R3.15", "core-router-01", "ssh", "deny", "bgp", "peer-as"]),
        vec![
            ("version", TokenKind::Keyword),
            ("21.4R3.15", TokenKind::Value),
            ("core-router-01", TokenKind::Value),
            ("ssh", TokenKind::Command),
            ("deny", TokenKind::Action),
            ("bgp", TokenKind::Protocol),
            ("peer-as", TokenKind::Keyword),
        ]
    );
}

#[test]
fn test_pinned_mode_overrides_detection() {
    let mut lexer = Lexer::with_mode("set protocols bgp", ParseMode::Show);
    let tokens = lexer.tokenize();
    assert_eq!(lexer.parse_mode(), ParseMode::Show);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
}

#[test]
fn test_set_parse_mode_back_to_auto_detects_again() {
    let mut lexer = Lexer::with_mode("set protocols bgp", ParseMode::Show);
    lexer.set_parse_mode(ParseMode::Auto);
    assert!(!lexer.is_mode_latched());
    let tokens = lexer.tokenize();
    assert_eq!(lexer.parse_mode(), ParseMode::Config);
    assert_eq!(tokens[0].kind, TokenKind::Command);
}
