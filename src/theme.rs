// Theme support for the TUI
//
// Color palettes selected by name from config, env or `--theme`.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Names accepted by [`Theme::by_name`]
pub const THEME_NAMES: &[&str] = &["auto", "dracula", "nord", "gruvbox", "light", "high-contrast"];

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Slide content
    pub heading: Color,
    pub text: Color,
    pub emphasis: Color,
    pub code: Color,
    pub code_bg: Color,
    pub link: Color,
    pub quote: Color,
    pub bullet: Color,
    pub table_header: Color,
    pub rule: Color,

    // Chrome
    pub title: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub progress_fill: Color,
    pub button: Color,
    pub button_disabled: Color,
    pub counter: Color,
    pub hint: Color,
    pub highlight: Color,
    pub background: Color,
    pub error: Color,
}

impl Theme {
    /// Load theme by name; unknown names fall back to auto
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "light" => Self::light(),
            "high-contrast" | "high_contrast" => Self::high_contrast(),
            "auto" => Self::auto(),
            other => {
                tracing::warn!("Unknown theme '{}', using auto", other);
                Self::auto()
            }
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            heading: Color::Cyan,
            text: Color::Reset,
            emphasis: Color::Yellow,
            code: Color::Green,
            code_bg: Color::Reset,
            link: Color::Blue,
            quote: Color::Gray,
            bullet: Color::Magenta,
            table_header: Color::Cyan,
            rule: Color::DarkGray,
            title: Color::Cyan,
            border: Color::White,
            border_type: BorderType::Rounded,
            // Muted fill for white label contrast
            progress_fill: Color::Rgb(0x00, 0x64, 0x00),
            button: Color::Green,
            button_disabled: Color::DarkGray,
            counter: Color::White,
            hint: Color::DarkGray,
            highlight: Color::Yellow,
            background: Color::Reset,
            error: Color::Red,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            heading: Color::Rgb(0xbd, 0x93, 0xf9),  // purple
            text: Color::Rgb(0xf8, 0xf8, 0xf2),     // foreground
            emphasis: Color::Rgb(0xff, 0x79, 0xc6), // pink
            code: Color::Rgb(0x50, 0xfa, 0x7b),     // green
            code_bg: Color::Rgb(0x21, 0x22, 0x2c),
            link: Color::Rgb(0x8b, 0xe9, 0xfd),   // cyan
            quote: Color::Rgb(0x62, 0x72, 0xa4),  // comment
            bullet: Color::Rgb(0xff, 0xb8, 0x6c), // orange
            table_header: Color::Rgb(0x8b, 0xe9, 0xfd),
            rule: Color::Rgb(0x44, 0x47, 0x5a),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),
            border: Color::Rgb(0x62, 0x72, 0xa4),
            border_type: BorderType::Rounded,
            progress_fill: Color::Rgb(0x6b, 0x4f, 0x9e), // muted purple
            button: Color::Rgb(0x50, 0xfa, 0x7b),
            button_disabled: Color::Rgb(0x44, 0x47, 0x5a),
            counter: Color::Rgb(0xf8, 0xf8, 0xf2),
            hint: Color::Rgb(0x62, 0x72, 0xa4),
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            background: Color::Rgb(0x28, 0x2a, 0x36),
            error: Color::Rgb(0xff, 0x55, 0x55),
        }
    }

    /// Nord theme - https://www.nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            heading: Color::Rgb(0x88, 0xc0, 0xd0), // frost
            text: Color::Rgb(0xec, 0xef, 0xf4),
            emphasis: Color::Rgb(0xeb, 0xcb, 0x8b), // yellow
            code: Color::Rgb(0xa3, 0xbe, 0x8c),     // green
            code_bg: Color::Rgb(0x3b, 0x42, 0x52),
            link: Color::Rgb(0x81, 0xa1, 0xc1),
            quote: Color::Rgb(0x61, 0x6e, 0x88),
            bullet: Color::Rgb(0xb4, 0x8e, 0xad), // purple
            table_header: Color::Rgb(0x8f, 0xbc, 0xbb),
            rule: Color::Rgb(0x4c, 0x56, 0x6a),
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            border_type: BorderType::Plain,
            progress_fill: Color::Rgb(0x5e, 0x81, 0xac),
            button: Color::Rgb(0xa3, 0xbe, 0x8c),
            button_disabled: Color::Rgb(0x4c, 0x56, 0x6a),
            counter: Color::Rgb(0xd8, 0xde, 0xe9),
            hint: Color::Rgb(0x61, 0x6e, 0x88),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            error: Color::Rgb(0xbf, 0x61, 0x6a),
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            heading: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            text: Color::Rgb(0xeb, 0xdb, 0xb2),
            emphasis: Color::Rgb(0xfe, 0x80, 0x19), // orange
            code: Color::Rgb(0xb8, 0xbb, 0x26),     // green
            code_bg: Color::Rgb(0x3c, 0x38, 0x36),
            link: Color::Rgb(0x83, 0xa5, 0x98),
            quote: Color::Rgb(0x92, 0x83, 0x74),
            bullet: Color::Rgb(0xd3, 0x86, 0x9b),
            table_header: Color::Rgb(0x8e, 0xc0, 0x7c),
            rule: Color::Rgb(0x50, 0x49, 0x45),
            title: Color::Rgb(0x83, 0xa5, 0x98),
            border: Color::Rgb(0x66, 0x5c, 0x54),
            border_type: BorderType::Plain,
            progress_fill: Color::Rgb(0x79, 0x74, 0x0e),
            button: Color::Rgb(0xb8, 0xbb, 0x26),
            button_disabled: Color::Rgb(0x66, 0x5c, 0x54),
            counter: Color::Rgb(0xeb, 0xdb, 0xb2),
            hint: Color::Rgb(0x92, 0x83, 0x74),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            background: Color::Rgb(0x28, 0x28, 0x28),
            error: Color::Rgb(0xfb, 0x49, 0x34),
        }
    }

    /// Light theme for bright projectors
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            heading: Color::Rgb(0x1f, 0x4e, 0x8c),
            text: Color::Rgb(0x24, 0x29, 0x2e),
            emphasis: Color::Rgb(0xb3, 0x1d, 0x28),
            code: Color::Rgb(0x22, 0x86, 0x3a),
            code_bg: Color::Rgb(0xf0, 0xf0, 0xf0),
            link: Color::Rgb(0x03, 0x66, 0xd6),
            quote: Color::Rgb(0x6a, 0x73, 0x7d),
            bullet: Color::Rgb(0x6f, 0x42, 0xc1),
            table_header: Color::Rgb(0x1f, 0x4e, 0x8c),
            rule: Color::Rgb(0xd1, 0xd5, 0xda),
            title: Color::Rgb(0x1f, 0x4e, 0x8c),
            border: Color::Rgb(0x95, 0x9d, 0xa5),
            border_type: BorderType::Rounded,
            progress_fill: Color::Rgb(0x79, 0xb8, 0xff),
            button: Color::Rgb(0x22, 0x86, 0x3a),
            button_disabled: Color::Rgb(0xd1, 0xd5, 0xda),
            counter: Color::Rgb(0x24, 0x29, 0x2e),
            hint: Color::Rgb(0x6a, 0x73, 0x7d),
            highlight: Color::Rgb(0xb0, 0x88, 0x00),
            background: Color::Rgb(0xff, 0xff, 0xff),
            error: Color::Rgb(0xcb, 0x24, 0x31),
        }
    }

    /// High contrast: pure black/white/yellow, thick borders
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            heading: Color::Yellow,
            text: Color::White,
            emphasis: Color::Yellow,
            code: Color::White,
            code_bg: Color::Black,
            link: Color::Cyan,
            quote: Color::White,
            bullet: Color::Yellow,
            table_header: Color::Yellow,
            rule: Color::White,
            title: Color::White,
            border: Color::White,
            border_type: BorderType::Thick,
            progress_fill: Color::Blue,
            button: Color::Yellow,
            button_disabled: Color::Gray,
            counter: Color::White,
            hint: Color::White,
            highlight: Color::Yellow,
            background: Color::Black,
            error: Color::LightRed,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in THEME_NAMES {
            assert_eq!(Theme::by_name(name).name, *name);
        }
    }

    #[test]
    fn unknown_falls_back_to_auto() {
        assert_eq!(Theme::by_name("solarized-neon").name, "auto");
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
    }
}
