//! Token kind to escape-sequence mapping.
//!
//! A [`Theme`] is built from a [`Palette`] by one fixed mapping, so every
//! palette styles the same kinds the same way (commands bold, comments
//! italic and so on) and only the colors differ.

use jink_config::{Palette, RESET, Style};
use jink_lexer::{Token, TokenKind};
use std::collections::HashMap;

/// Escape prefixes per token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    colors: HashMap<TokenKind, String>,
}

impl Theme {
    /// Build a theme from palette colors.
    pub fn from_palette(p: &Palette) -> Self {
        use TokenKind::*;

        let mapping: [(TokenKind, Style); 45] = [
            // Configuration
            (Command, p.command.bold()),
            (Section, p.section.bold()),
            (Protocol, p.protocol),
            (Action, p.action.bold()),
            (Interface, p.interface.bold()),
            (Ipv4, p.ip),
            (Ipv4Prefix, p.ip),
            (Ipv6, p.ip),
            (Ipv6Prefix, p.ip),
            (Mac, p.mac),
            (Number, p.number),
            (QuotedString, p.string),
            (Comment, p.comment.italic()),
            (Annotation, p.comment.italic()),
            (Brace, p.foreground),
            (Semicolon, p.comment),
            (Wildcard, p.wildcard),
            (Identifier, p.foreground),
            (Keyword, p.keyword),
            (Operator, p.operator),
            (Unit, p.number),
            (Asn, p.asn),
            (Community, p.community),
            (Value, p.value),
            // Command output
            (StateGood, p.state_good.bold()),
            (StateBad, p.state_bad.bold()),
            (StateWarning, p.state_warning.bold()),
            (StateNeutral, p.comment.dim()),
            (ColumnHeader, p.foreground.bold()),
            (StatusSymbol, p.protocol.bold()),
            (TimeDuration, p.duration),
            (Percentage, p.state_good),
            (ByteSize, p.protocol),
            (RouteProtocol, p.route_protocol.bold()),
            (TableName, p.table_name.bold()),
            // Prompt
            (PromptUser, p.prompt_user),
            (PromptAt, p.prompt_at),
            (PromptHostOper, p.prompt_host_oper),
            (PromptHostConf, p.prompt_host_conf),
            (PromptOper, p.prompt_oper),
            (PromptConf, p.prompt_conf),
            (PromptEdit, p.prompt_edit),
            // Diff
            (DiffAdd, p.state_good.bold()),
            (DiffRemove, p.state_bad.bold()),
            (DiffContext, p.protocol.bold()),
        ];

        let colors = mapping
            .into_iter()
            .filter(|(_, style)| !style.is_plain())
            .map(|(kind, style)| (kind, style.escape()))
            .collect();

        Self {
            name: p.name.to_string(),
            colors,
        }
    }

    /// Theme for a palette name, falling back to the default palette.
    pub fn by_name(name: &str) -> Self {
        match Palette::by_name(name) {
            Some(palette) => Self::from_palette(&palette),
            None => {
                log::warn!("Unknown theme '{}', using default", name);
                Self::default()
            }
        }
    }

    /// Display name of the palette this theme was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Escape prefix for `kind`, empty if the kind is unstyled.
    pub fn color(&self, kind: TokenKind) -> &str {
        self.colors.get(&kind).map_or("", String::as_str)
    }

    /// Override the escape prefix for one kind. An empty string leaves the
    /// kind unstyled.
    pub fn set_color(&mut self, kind: TokenKind, escape: impl Into<String>) {
        let escape = escape.into();
        if escape.is_empty() {
            self.colors.remove(&kind);
        } else {
            self.colors.insert(kind, escape);
        }
    }

    /// Append `tokens` to `out`, wrapping each styled value in its prefix
    /// and a reset.
    pub fn render(&self, tokens: &[Token<'_>], out: &mut String) {
        for token in tokens {
            let color = self.color(token.kind);
            if color.is_empty() {
                out.push_str(token.value);
            } else {
                out.push_str(color);
                out.push_str(token.value);
                out.push_str(RESET);
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jink_config::themes::{BOLD, ITALIC};

    #[test]
    fn test_text_is_unstyled() {
        let theme = Theme::default();
        assert_eq!(theme.color(TokenKind::Text), "");
    }

    #[test]
    fn test_every_other_kind_is_styled_by_every_palette() {
        for name in jink_config::available_themes() {
            let theme = Theme::by_name(name);
            for kind in TokenKind::ALL {
                if kind != TokenKind::Text {
                    assert!(!theme.color(kind).is_empty(), "{name}: {kind}");
                }
            }
        }
    }

    #[test]
    fn test_fixed_attributes() {
        let theme = Theme::default();
        assert!(theme.color(TokenKind::Command).starts_with(BOLD));
        assert!(theme.color(TokenKind::Comment).starts_with(ITALIC));
        assert_eq!(
            theme.color(TokenKind::Percentage),
            Palette::default().state_good.escape()
        );
    }

    #[test]
    fn test_render_wraps_styled_tokens() {
        let mut theme = Theme::default();
        theme.set_color(TokenKind::Command, "<c>");
        let tokens = [
            Token::new(TokenKind::Command, "set", 1, 1),
            Token::new(TokenKind::Text, " ", 1, 4),
        ];
        let mut out = String::new();
        theme.render(&tokens, &mut out);
        assert_eq!(out, format!("<c>set{RESET} "));
    }

    #[test]
    fn test_set_color_empty_unstyles() {
        let mut theme = Theme::default();
        theme.set_color(TokenKind::Identifier, "");
        let mut out = String::new();
        theme.render(&[Token::new(TokenKind::Identifier, "x", 1, 1)], &mut out);
        assert_eq!(out, "x");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(Theme::by_name("no-such-theme"), Theme::default());
        assert_eq!(Theme::by_name("dracula").name(), "Dracula");
    }
}
