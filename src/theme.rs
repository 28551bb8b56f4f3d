// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Text colors
    pub text: Color,
    pub muted: Color,
    pub heading: Color,

    // Accent colors
    pub accent: Color,
    pub highlight: Color,

    // Nav bar
    pub nav_active: Color,
    pub nav_inactive: Color,

    // Tags / skill chips
    pub tag: Color,
    pub tag_selected: Color,

    // Chrome
    pub border: Color,
    pub title: Color,
    pub status_bar: Color,

    // Outcome colors (toast, cert status)
    pub ok: Color,
    pub fail: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            text: Color::White,
            muted: Color::DarkGray,
            heading: Color::Cyan,
            accent: Color::Blue,
            highlight: Color::Yellow,
            nav_active: Color::Yellow,
            nav_inactive: Color::Gray,
            tag: Color::Gray,
            tag_selected: Color::Cyan,
            border: Color::White,
            title: Color::Cyan,
            status_bar: Color::Green,
            ok: Color::Green,
            fail: Color::Red,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            text: Color::Rgb(0xf8, 0xf8, 0xf2),      // foreground
            muted: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            heading: Color::Rgb(0x8b, 0xe9, 0xfd),   // cyan
            accent: Color::Rgb(0xbd, 0x93, 0xf9),    // purple
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            nav_active: Color::Rgb(0xff, 0x79, 0xc6), // pink
            nav_inactive: Color::Rgb(0x62, 0x72, 0xa4), // comment
            tag: Color::Rgb(0x62, 0x72, 0xa4),       // comment
            tag_selected: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),    // comment
            title: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            ok: Color::Rgb(0x50, 0xfa, 0x7b),        // green
            fail: Color::Rgb(0xff, 0x55, 0x55),      // red
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            text: Color::Rgb(0xec, 0xef, 0xf4),      // snow storm
            muted: Color::Rgb(0x4c, 0x56, 0x6a),     // polar night 3
            heading: Color::Rgb(0x88, 0xc0, 0xd0),   // frost cyan
            accent: Color::Rgb(0x81, 0xa1, 0xc1),    // frost blue
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b), // aurora yellow
            nav_active: Color::Rgb(0xeb, 0xcb, 0x8b), // aurora yellow
            nav_inactive: Color::Rgb(0x4c, 0x56, 0x6a), // polar night 3
            tag: Color::Rgb(0x4c, 0x56, 0x6a),       // polar night 3
            tag_selected: Color::Rgb(0x88, 0xc0, 0xd0), // frost cyan
            border: Color::Rgb(0x43, 0x4c, 0x5e),    // polar night 2
            title: Color::Rgb(0x88, 0xc0, 0xd0),     // frost cyan
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            ok: Color::Rgb(0xa3, 0xbe, 0x8c),        // aurora green
            fail: Color::Rgb(0xbf, 0x61, 0x6a),      // aurora red
        }
    }

    /// Gruvbox Dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            text: Color::Rgb(0xeb, 0xdb, 0xb2),      // fg
            muted: Color::Rgb(0x92, 0x83, 0x74),     // gray
            heading: Color::Rgb(0x8e, 0xc0, 0x7c),   // aqua
            accent: Color::Rgb(0x83, 0xa5, 0x98),    // blue
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            nav_active: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            nav_inactive: Color::Rgb(0x92, 0x83, 0x74), // gray
            tag: Color::Rgb(0x92, 0x83, 0x74),       // gray
            tag_selected: Color::Rgb(0x8e, 0xc0, 0x7c), // aqua
            border: Color::Rgb(0x50, 0x49, 0x45),    // bg2
            title: Color::Rgb(0x8e, 0xc0, 0x7c),     // aqua
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            ok: Color::Rgb(0xb8, 0xbb, 0x26),        // green
            fail: Color::Rgb(0xfb, 0x49, 0x34),      // red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_auto() {
        assert_eq!(Theme::by_name("no-such-theme").name, "auto");
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
    }
}
