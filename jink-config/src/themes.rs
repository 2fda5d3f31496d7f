//! Color palettes for the highlighter.
//!
//! A [`Palette`] names the semantic colors of a theme (command, section,
//! interface, good/bad state, prompt parts ...). The mapping from palette
//! entries onto token kinds lives in `jink-highlight`, so adding a palette
//! here needs no change anywhere else.

/// SGR reset
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";

/// A foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// One of the 16 standard colors, stored as its SGR code (30-37, 90-97)
    Basic(u8),
    /// 256-color palette index
    Indexed(u8),
    Rgb(u8, u8, u8),
}

pub const WHITE: Color = Color::Basic(37);
pub const RED: Color = Color::Basic(31);
pub const GREEN: Color = Color::Basic(32);
pub const YELLOW: Color = Color::Basic(33);
pub const BLUE: Color = Color::Basic(34);
pub const MAGENTA: Color = Color::Basic(35);
pub const CYAN: Color = Color::Basic(36);
pub const BRIGHT_BLACK: Color = Color::Basic(90);
pub const BRIGHT_RED: Color = Color::Basic(91);
pub const BRIGHT_GREEN: Color = Color::Basic(92);
pub const BRIGHT_YELLOW: Color = Color::Basic(93);
pub const BRIGHT_BLUE: Color = Color::Basic(94);
pub const BRIGHT_MAGENTA: Color = Color::Basic(95);
pub const BRIGHT_CYAN: Color = Color::Basic(96);
pub const BRIGHT_WHITE: Color = Color::Basic(97);

impl Color {
    /// Foreground escape sequence for this color.
    pub fn escape(self) -> String {
        match self {
            Color::Basic(code) => format!("\x1b[{code}m"),
            Color::Indexed(n) => format!("\x1b[38;5;{n}m"),
            Color::Rgb(r, g, b) => format!("\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

/// Escape for a 256-color palette entry.
pub fn color256(n: u8) -> String {
    Color::Indexed(n).escape()
}

/// Escape for a 24-bit color.
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    Color::Rgb(r, g, b).escape()
}

/// A color plus text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
}

impl Style {
    /// No styling at all.
    pub const NONE: Style = Style {
        color: None,
        bold: false,
        dim: false,
        italic: false,
    };

    pub const fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            dim: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::NONE
    }

    /// Escape prefix: attributes first, then the color. Empty for
    /// [`Style::NONE`].
    pub fn escape(&self) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str(BOLD);
        }
        if self.dim {
            out.push_str(DIM);
        }
        if self.italic {
            out.push_str(ITALIC);
        }
        if let Some(color) = self.color {
            out.push_str(&color.escape());
        }
        out
    }
}

/// Semantic colors of a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,

    // Base
    pub foreground: Style,
    pub comment: Style,

    // Configuration vocabulary
    pub command: Style,
    pub section: Style,
    pub protocol: Style,
    pub action: Style,
    pub interface: Style,
    pub ip: Style,
    pub number: Style,
    pub string: Style,
    pub keyword: Style,
    pub operator: Style,
    pub asn: Style,
    pub community: Style,
    pub value: Style,
    pub wildcard: Style,
    pub mac: Style,

    // Command output
    pub state_good: Style,
    pub state_bad: Style,
    pub state_warning: Style,
    pub duration: Style,
    pub route_protocol: Style,
    pub table_name: Style,

    // Prompt
    pub prompt_user: Style,
    pub prompt_at: Style,
    pub prompt_host_oper: Style,
    pub prompt_host_conf: Style,
    pub prompt_oper: Style,
    pub prompt_conf: Style,
    pub prompt_edit: Style,
}

impl Palette {
    /// Tokyo Night inspired theme
    pub const fn tokyo_night() -> Self {
        let foreground = Color::Rgb(192, 202, 245);
        let comment = Color::Rgb(86, 95, 137);
        let red = Color::Rgb(247, 118, 142);
        let green = Color::Rgb(158, 206, 106);
        let yellow = Color::Rgb(224, 175, 104);
        let blue = Color::Rgb(122, 162, 247);
        let magenta = Color::Rgb(187, 154, 247);
        let cyan = Color::Rgb(125, 207, 255);
        let orange = Color::Rgb(255, 158, 100);
        let purple = Color::Rgb(157, 124, 216);
        let teal = Color::Rgb(115, 218, 202);

        Self {
            name: "Tokyo Night",
            foreground: Style::fg(foreground),
            comment: Style::fg(comment),
            command: Style::fg(magenta),
            section: Style::fg(blue),
            protocol: Style::fg(cyan),
            action: Style::fg(green),
            interface: Style::fg(orange),
            ip: Style::fg(teal),
            number: Style::fg(purple),
            string: Style::fg(green),
            keyword: Style::fg(yellow),
            operator: Style::fg(blue),
            asn: Style::fg(orange),
            community: Style::fg(magenta),
            value: Style::fg(cyan),
            wildcard: Style::fg(red),
            mac: Style::fg(cyan),
            state_good: Style::fg(green),
            state_bad: Style::fg(red),
            state_warning: Style::fg(yellow),
            duration: Style::fg(orange),
            route_protocol: Style::fg(purple),
            table_name: Style::fg(blue),
            prompt_user: Style::fg(Color::Indexed(32)),
            prompt_at: Style::fg(Color::Indexed(163)),
            prompt_host_oper: Style::fg(Color::Indexed(35)),
            prompt_host_conf: Style::fg(Color::Indexed(128)),
            prompt_oper: Style::fg(Color::Indexed(128)),
            prompt_conf: Style::fg(Color::Indexed(35)),
            prompt_edit: Style::fg(comment).dim(),
        }
    }

    /// High-contrast theme using the 16 standard colors
    pub const fn vibrant() -> Self {
        Self {
            name: "Vibrant",
            foreground: Style::fg(WHITE),
            comment: Style::fg(BRIGHT_BLACK).dim(),
            command: Style::fg(BRIGHT_YELLOW),
            section: Style::fg(BRIGHT_BLUE),
            protocol: Style::fg(BRIGHT_CYAN),
            action: Style::fg(BRIGHT_GREEN),
            interface: Style::fg(BRIGHT_MAGENTA),
            ip: Style::fg(BRIGHT_GREEN),
            number: Style::fg(BRIGHT_CYAN),
            string: Style::fg(BRIGHT_YELLOW),
            keyword: Style::fg(YELLOW),
            operator: Style::fg(BRIGHT_WHITE),
            asn: Style::fg(BRIGHT_MAGENTA),
            community: Style::fg(MAGENTA),
            value: Style::fg(BRIGHT_CYAN),
            wildcard: Style::fg(BRIGHT_RED),
            mac: Style::fg(CYAN),
            state_good: Style::fg(BRIGHT_GREEN),
            state_bad: Style::fg(BRIGHT_RED),
            state_warning: Style::fg(BRIGHT_YELLOW),
            duration: Style::fg(BRIGHT_MAGENTA),
            route_protocol: Style::fg(MAGENTA),
            table_name: Style::fg(BRIGHT_BLUE),
            prompt_user: Style::fg(BRIGHT_GREEN).bold(),
            prompt_at: Style::fg(WHITE),
            prompt_host_oper: Style::fg(BRIGHT_CYAN).bold(),
            prompt_host_conf: Style::fg(BRIGHT_MAGENTA).bold(),
            prompt_oper: Style::fg(BRIGHT_GREEN).bold(),
            prompt_conf: Style::fg(BRIGHT_RED).bold(),
            prompt_edit: Style::fg(BRIGHT_YELLOW),
        }
    }

    /// Solarized Dark theme
    pub const fn solarized() -> Self {
        let base01 = Color::Indexed(240);
        let base0 = Color::Indexed(244);
        let yellow = Color::Indexed(136);
        let orange = Color::Indexed(166);
        let red = Color::Indexed(160);
        let magenta = Color::Indexed(125);
        let violet = Color::Indexed(61);
        let blue = Color::Indexed(33);
        let cyan = Color::Indexed(37);
        let green = Color::Indexed(64);

        Self {
            name: "Solarized",
            foreground: Style::fg(base0),
            comment: Style::fg(base01),
            command: Style::fg(yellow),
            section: Style::fg(blue),
            protocol: Style::fg(cyan),
            action: Style::fg(green),
            interface: Style::fg(magenta),
            ip: Style::fg(green),
            number: Style::fg(cyan),
            string: Style::fg(yellow),
            keyword: Style::fg(orange),
            operator: Style::fg(base0),
            asn: Style::fg(magenta),
            community: Style::fg(violet),
            value: Style::fg(cyan),
            wildcard: Style::fg(red),
            mac: Style::fg(cyan),
            state_good: Style::fg(green),
            state_bad: Style::fg(red),
            state_warning: Style::fg(yellow),
            duration: Style::fg(orange),
            route_protocol: Style::fg(violet),
            table_name: Style::fg(blue),
            prompt_user: Style::fg(green).bold(),
            prompt_at: Style::fg(base0),
            prompt_host_oper: Style::fg(cyan).bold(),
            prompt_host_conf: Style::fg(magenta).bold(),
            prompt_oper: Style::fg(green).bold(),
            prompt_conf: Style::fg(red).bold(),
            prompt_edit: Style::fg(yellow),
        }
    }

    /// Monokai inspired theme
    pub const fn monokai() -> Self {
        let pink = Color::Indexed(197);
        let green = Color::Indexed(148);
        let orange = Color::Indexed(208);
        let purple = Color::Indexed(141);
        let cyan = Color::Indexed(81);
        let yellow = Color::Indexed(186);
        let gray = Color::Indexed(242);
        let white = Color::Indexed(231);
        let red = Color::Indexed(196);

        Self {
            name: "Monokai",
            foreground: Style::fg(white),
            comment: Style::fg(gray),
            command: Style::fg(pink),
            section: Style::fg(cyan),
            protocol: Style::fg(purple),
            action: Style::fg(green),
            interface: Style::fg(orange),
            ip: Style::fg(green),
            number: Style::fg(purple),
            string: Style::fg(yellow),
            keyword: Style::fg(orange),
            operator: Style::fg(pink),
            asn: Style::fg(orange),
            community: Style::fg(purple),
            value: Style::fg(cyan),
            wildcard: Style::fg(pink),
            mac: Style::fg(cyan),
            state_good: Style::fg(green),
            state_bad: Style::fg(red),
            state_warning: Style::fg(yellow),
            duration: Style::fg(orange),
            route_protocol: Style::fg(purple),
            table_name: Style::fg(cyan),
            prompt_user: Style::fg(green).bold(),
            prompt_at: Style::fg(white),
            prompt_host_oper: Style::fg(cyan).bold(),
            prompt_host_conf: Style::fg(orange).bold(),
            prompt_oper: Style::fg(green).bold(),
            prompt_conf: Style::fg(pink).bold(),
            prompt_edit: Style::fg(yellow),
        }
    }

    /// Nord theme
    pub const fn nord() -> Self {
        let snow = Color::Indexed(252);
        let frost_cyan = Color::Indexed(109);
        let frost_light_blue = Color::Indexed(110);
        let frost_blue = Color::Indexed(68);
        let red = Color::Indexed(167);
        let orange = Color::Indexed(173);
        let yellow = Color::Indexed(179);
        let green = Color::Indexed(108);
        let purple = Color::Indexed(139);
        let comment = Color::Indexed(60);

        Self {
            name: "Nord",
            foreground: Style::fg(snow),
            comment: Style::fg(comment),
            command: Style::fg(yellow),
            section: Style::fg(frost_blue),
            protocol: Style::fg(frost_light_blue),
            action: Style::fg(green),
            interface: Style::fg(purple),
            ip: Style::fg(green),
            number: Style::fg(purple),
            string: Style::fg(yellow),
            keyword: Style::fg(orange),
            operator: Style::fg(frost_blue),
            asn: Style::fg(orange),
            community: Style::fg(purple),
            value: Style::fg(frost_light_blue),
            wildcard: Style::fg(red),
            mac: Style::fg(frost_cyan),
            state_good: Style::fg(green),
            state_bad: Style::fg(red),
            state_warning: Style::fg(yellow),
            duration: Style::fg(orange),
            route_protocol: Style::fg(purple),
            table_name: Style::fg(frost_blue),
            prompt_user: Style::fg(green).bold(),
            prompt_at: Style::fg(snow),
            prompt_host_oper: Style::fg(frost_cyan).bold(),
            prompt_host_conf: Style::fg(orange).bold(),
            prompt_oper: Style::fg(green).bold(),
            prompt_conf: Style::fg(red).bold(),
            prompt_edit: Style::fg(yellow),
        }
    }

    /// Catppuccin Mocha theme
    pub const fn catppuccin() -> Self {
        let text = Color::Rgb(205, 214, 244);
        let subtext0 = Color::Rgb(166, 173, 200);
        let overlay0 = Color::Rgb(108, 112, 134);
        let red = Color::Rgb(243, 139, 168);
        let peach = Color::Rgb(250, 179, 135);
        let yellow = Color::Rgb(249, 226, 175);
        let green = Color::Rgb(166, 227, 161);
        let teal = Color::Rgb(148, 226, 213);
        let sky = Color::Rgb(137, 220, 235);
        let sapphire = Color::Rgb(116, 199, 236);
        let blue = Color::Rgb(137, 180, 250);
        let lavender = Color::Rgb(180, 190, 254);
        let mauve = Color::Rgb(203, 166, 247);
        let pink = Color::Rgb(245, 194, 231);

        Self {
            name: "Catppuccin",
            foreground: Style::fg(text),
            comment: Style::fg(overlay0),
            command: Style::fg(mauve),
            section: Style::fg(blue),
            protocol: Style::fg(sapphire),
            action: Style::fg(green),
            interface: Style::fg(peach),
            ip: Style::fg(teal),
            number: Style::fg(lavender),
            string: Style::fg(green),
            keyword: Style::fg(yellow),
            operator: Style::fg(sky),
            asn: Style::fg(peach),
            community: Style::fg(pink),
            value: Style::fg(sky),
            wildcard: Style::fg(red),
            mac: Style::fg(sky),
            state_good: Style::fg(green),
            state_bad: Style::fg(red),
            state_warning: Style::fg(yellow),
            duration: Style::fg(peach),
            route_protocol: Style::fg(mauve),
            table_name: Style::fg(blue),
            prompt_user: Style::fg(green).bold(),
            prompt_at: Style::fg(subtext0),
            prompt_host_oper: Style::fg(sapphire).bold(),
            prompt_host_conf: Style::fg(peach).bold(),
            prompt_oper: Style::fg(green).bold(),
            prompt_conf: Style::fg(red).bold(),
            prompt_edit: Style::fg(yellow),
        }
    }

    /// Dracula theme
    pub const fn dracula() -> Self {
        let foreground = Color::Rgb(248, 248, 242);
        let comment = Color::Rgb(98, 114, 164);
        let cyan = Color::Rgb(139, 233, 253);
        let green = Color::Rgb(80, 250, 123);
        let orange = Color::Rgb(255, 184, 108);
        let pink = Color::Rgb(255, 121, 198);
        let purple = Color::Rgb(189, 147, 249);
        let red = Color::Rgb(255, 85, 85);
        let yellow = Color::Rgb(241, 250, 140);

        Self {
            name: "Dracula",
            foreground: Style::fg(foreground),
            comment: Style::fg(comment),
            command: Style::fg(pink),
            section: Style::fg(purple),
            protocol: Style::fg(cyan),
            action: Style::fg(green),
            interface: Style::fg(orange),
            ip: Style::fg(green),
            number: Style::fg(purple),
            string: Style::fg(yellow),
            keyword: Style::fg(orange),
            operator: Style::fg(pink),
            asn: Style::fg(orange),
            community: Style::fg(purple),
            value: Style::fg(cyan),
            wildcard: Style::fg(red),
            mac: Style::fg(cyan),
            state_good: Style::fg(green),
            state_bad: Style::fg(red),
            state_warning: Style::fg(yellow),
            duration: Style::fg(orange),
            route_protocol: Style::fg(purple),
            table_name: Style::fg(purple),
            prompt_user: Style::fg(green).bold(),
            prompt_at: Style::fg(foreground),
            prompt_host_oper: Style::fg(cyan).bold(),
            prompt_host_conf: Style::fg(orange).bold(),
            prompt_oper: Style::fg(green).bold(),
            prompt_conf: Style::fg(red).bold(),
            prompt_edit: Style::fg(yellow),
        }
    }

    /// Gruvbox Dark theme
    pub const fn gruvbox() -> Self {
        let foreground = Color::Rgb(235, 219, 178);
        let comment = Color::Rgb(146, 131, 116);
        let red = Color::Rgb(251, 73, 52);
        let green = Color::Rgb(184, 187, 38);
        let yellow = Color::Rgb(250, 189, 47);
        let blue = Color::Rgb(131, 165, 152);
        let purple = Color::Rgb(211, 134, 155);
        let aqua = Color::Rgb(142, 192, 124);
        let orange = Color::Rgb(254, 128, 25);

        Self {
            name: "Gruvbox",
            foreground: Style::fg(foreground),
            comment: Style::fg(comment),
            command: Style::fg(yellow),
            section: Style::fg(blue),
            protocol: Style::fg(aqua),
            action: Style::fg(green),
            interface: Style::fg(orange),
            ip: Style::fg(aqua),
            number: Style::fg(purple),
            string: Style::fg(green),
            keyword: Style::fg(orange),
            operator: Style::fg(foreground),
            asn: Style::fg(orange),
            community: Style::fg(purple),
            value: Style::fg(aqua),
            wildcard: Style::fg(red),
            mac: Style::fg(aqua),
            state_good: Style::fg(green),
            state_bad: Style::fg(red),
            state_warning: Style::fg(yellow),
            duration: Style::fg(orange),
            route_protocol: Style::fg(purple),
            table_name: Style::fg(blue),
            prompt_user: Style::fg(green).bold(),
            prompt_at: Style::fg(foreground),
            prompt_host_oper: Style::fg(aqua).bold(),
            prompt_host_conf: Style::fg(orange).bold(),
            prompt_oper: Style::fg(green).bold(),
            prompt_conf: Style::fg(red).bold(),
            prompt_edit: Style::fg(yellow),
        }
    }

    /// Atom One Dark theme
    pub const fn one_dark() -> Self {
        let foreground = Color::Rgb(171, 178, 191);
        let comment = Color::Rgb(92, 99, 112);
        let red = Color::Rgb(224, 108, 117);
        let green = Color::Rgb(152, 195, 121);
        let yellow = Color::Rgb(229, 192, 123);
        let blue = Color::Rgb(97, 175, 239);
        let purple = Color::Rgb(198, 120, 221);
        let cyan = Color::Rgb(86, 182, 194);
        let orange = Color::Rgb(209, 154, 102);

        Self {
            name: "One Dark",
            foreground: Style::fg(foreground),
            comment: Style::fg(comment),
            command: Style::fg(purple),
            section: Style::fg(blue),
            protocol: Style::fg(cyan),
            action: Style::fg(green),
            interface: Style::fg(orange),
            ip: Style::fg(green),
            number: Style::fg(orange),
            string: Style::fg(green),
            keyword: Style::fg(yellow),
            operator: Style::fg(foreground),
            asn: Style::fg(orange),
            community: Style::fg(purple),
            value: Style::fg(cyan),
            wildcard: Style::fg(red),
            mac: Style::fg(cyan),
            state_good: Style::fg(green),
            state_bad: Style::fg(red),
            state_warning: Style::fg(yellow),
            duration: Style::fg(orange),
            route_protocol: Style::fg(purple),
            table_name: Style::fg(blue),
            prompt_user: Style::fg(green).bold(),
            prompt_at: Style::fg(foreground),
            prompt_host_oper: Style::fg(cyan).bold(),
            prompt_host_conf: Style::fg(orange).bold(),
            prompt_oper: Style::fg(green).bold(),
            prompt_conf: Style::fg(red).bold(),
            prompt_edit: Style::fg(yellow),
        }
    }
    /// Look up a palette by name.
    ///
    /// Names are case-insensitive and `_` or spaces are treated as `-`.
    pub fn by_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace(['_', ' '], "-");

        match normalized.as_str() {
            "tokyonight" | "tokyo-night" | "tokyo" | "default" => Some(Self::tokyo_night()),
            "vibrant" => Some(Self::vibrant()),
            "solarized" | "solarized-dark" => Some(Self::solarized()),
            "monokai" => Some(Self::monokai()),
            "nord" => Some(Self::nord()),
            "catppuccin" | "catppuccin-mocha" | "mocha" => Some(Self::catppuccin()),
            "dracula" => Some(Self::dracula()),
            "gruvbox" | "gruvbox-dark" => Some(Self::gruvbox()),
            "onedark" | "one-dark" => Some(Self::one_dark()),
            _ => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

/// Canonical names accepted by [`Palette::by_name`].
pub fn available_themes() -> Vec<&'static str> {
    vec![
        "tokyonight",
        "vibrant",
        "solarized",
        "monokai",
        "nord",
        "catppuccin",
        "dracula",
        "gruvbox",
        "onedark",
    ]
}
