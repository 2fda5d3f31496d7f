//! Token kinds and the token type produced by the lexer.

use std::fmt;

/// Classification of a lexical token.
///
/// The enumeration is closed: every byte of input ends up inside a token of
/// exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // ========================================================================
    // Structural
    // ========================================================================
    /// Whitespace and anything else passed through unstyled
    Text,
    /// `{` or `}`
    Brace,
    /// `;`
    Semicolon,
    /// `<*>`, `<name>` or a bare `*`
    Wildcard,
    /// Word that matched nothing more specific
    Identifier,
    Keyword,
    Operator,

    // ========================================================================
    // Configuration
    // ========================================================================
    /// set, delete, edit, show, request ...
    Command,
    /// system, interfaces, protocols ...
    Section,
    /// ospf, bgp, tcp ...
    Protocol,
    /// accept, reject, discard ...
    Action,
    /// Number following the `unit` keyword
    Unit,
    /// `AS65000`
    Asn,
    /// `65000:100`
    Community,
    /// Argument of a value-taking keyword such as `description`
    Value,

    // ========================================================================
    // Shared structural patterns
    // ========================================================================
    /// ge-0/0/0, ae0, lo0.0
    Interface,
    Ipv4,
    Ipv4Prefix,
    Ipv6,
    Ipv6Prefix,
    Mac,
    /// 100, 10g, 1000m
    Number,
    /// Quoted string not in value position
    QuotedString,
    /// `# ...` or `/* ... */`
    Comment,
    /// `## ...`
    Annotation,

    // ========================================================================
    // Command output
    // ========================================================================
    /// up, Establ, Full
    StateGood,
    /// down, Idle, Active
    StateBad,
    /// 2Way, ExStart, Loading
    StateWarning,
    /// inactive, standby, backup
    StateNeutral,
    ColumnHeader,
    /// Route markers such as `*`, `+`, `B`
    StatusSymbol,
    /// 1w2d, 0:05:10
    TimeDuration,
    Percentage,
    /// 1.5G, 500M
    ByteSize,
    /// [BGP/170]
    RouteProtocol,
    /// inet.0, mpls.0
    TableName,

    // ========================================================================
    // Prompt
    // ========================================================================
    PromptUser,
    PromptAt,
    PromptHostOper,
    PromptHostConf,
    PromptOper,
    PromptConf,
    /// `[edit ...]` context or `{master:0}` role marker
    PromptEdit,

    // ========================================================================
    // Diff (`show | compare`)
    // ========================================================================
    DiffAdd,
    DiffRemove,
    DiffContext,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 46] = [
        TokenKind::Text,
        TokenKind::Brace,
        TokenKind::Semicolon,
        TokenKind::Wildcard,
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::Command,
        TokenKind::Section,
        TokenKind::Protocol,
        TokenKind::Action,
        TokenKind::Unit,
        TokenKind::Asn,
        TokenKind::Community,
        TokenKind::Value,
        TokenKind::Interface,
        TokenKind::Ipv4,
        TokenKind::Ipv4Prefix,
        TokenKind::Ipv6,
        TokenKind::Ipv6Prefix,
        TokenKind::Mac,
        TokenKind::Number,
        TokenKind::QuotedString,
        TokenKind::Comment,
        TokenKind::Annotation,
        TokenKind::StateGood,
        TokenKind::StateBad,
        TokenKind::StateWarning,
        TokenKind::StateNeutral,
        TokenKind::ColumnHeader,
        TokenKind::StatusSymbol,
        TokenKind::TimeDuration,
        TokenKind::Percentage,
        TokenKind::ByteSize,
        TokenKind::RouteProtocol,
        TokenKind::TableName,
        TokenKind::PromptUser,
        TokenKind::PromptAt,
        TokenKind::PromptHostOper,
        TokenKind::PromptHostConf,
        TokenKind::PromptOper,
        TokenKind::PromptConf,
        TokenKind::PromptEdit,
        TokenKind::DiffAdd,
        TokenKind::DiffRemove,
        TokenKind::DiffContext,
    ];

    /// Stable display name, used in logs and test failure output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Brace => "Brace",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Wildcard => "Wildcard",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::Command => "Command",
            TokenKind::Section => "Section",
            TokenKind::Protocol => "Protocol",
            TokenKind::Action => "Action",
            TokenKind::Unit => "Unit",
            TokenKind::Asn => "ASN",
            TokenKind::Community => "Community",
            TokenKind::Value => "Value",
            TokenKind::Interface => "Interface",
            TokenKind::Ipv4 => "IPv4",
            TokenKind::Ipv4Prefix => "IPv4Prefix",
            TokenKind::Ipv6 => "IPv6",
            TokenKind::Ipv6Prefix => "IPv6Prefix",
            TokenKind::Mac => "MAC",
            TokenKind::Number => "Number",
            TokenKind::QuotedString => "String",
            TokenKind::Comment => "Comment",
            TokenKind::Annotation => "Annotation",
            TokenKind::StateGood => "StateGood",
            TokenKind::StateBad => "StateBad",
            TokenKind::StateWarning => "StateWarning",
            TokenKind::StateNeutral => "StateNeutral",
            TokenKind::ColumnHeader => "ColumnHeader",
            TokenKind::StatusSymbol => "StatusSymbol",
            TokenKind::TimeDuration => "TimeDuration",
            TokenKind::Percentage => "Percentage",
            TokenKind::ByteSize => "ByteSize",
            TokenKind::RouteProtocol => "RouteProtocol",
            TokenKind::TableName => "TableName",
            TokenKind::PromptUser => "PromptUser",
            TokenKind::PromptAt => "PromptAt",
            TokenKind::PromptHostOper => "PromptHostOper",
            TokenKind::PromptHostConf => "PromptHostConf",
            TokenKind::PromptOper => "PromptOper",
            TokenKind::PromptConf => "PromptConf",
            TokenKind::PromptEdit => "PromptEdit",
            TokenKind::DiffAdd => "DiffAdd",
            TokenKind::DiffRemove => "DiffRemove",
            TokenKind::DiffContext => "DiffContext",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the input.
///
/// `value` borrows the exact source text, so concatenating the values of a
/// token sequence reproduces the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, value: &'a str, line: usize, column: usize) -> Self {
        Self {
            kind,
            value,
            line,
            column,
        }
    }
}
