use crossterm::style::Color;
use serde::Deserialize;

/// Color slots used when printing a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    pub added_fg: Color,
    pub removed_fg: Color,
    pub unchanged_fg: Color,
    pub line_number_fg: Color,
    pub collapsed_fg: Color,
    pub header_fg: Color,
}

pub const THEME_NAMES: &[&str] = &["one-dark", "github-dark", "dracula"];

impl Theme {
    /// Unknown names fall back to `one-dark`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "github-dark" => github_dark(),
            "dracula" => dracula(),
            _ => one_dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        one_dark()
    }
}

pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

// ── Serde-compatible override struct ──────────────────────────────

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeOverrides {
    pub added_fg: Option<String>,
    pub removed_fg: Option<String>,
    pub unchanged_fg: Option<String>,
    pub line_number_fg: Option<String>,
    pub collapsed_fg: Option<String>,
    pub header_fg: Option<String>,
}

/// Replace slots with the overrides that parse as `#rrggbb`.
pub fn apply_overrides(theme: &mut Theme, overrides: &ThemeOverrides) {
    macro_rules! apply {
        ($field:ident) => {
            if let Some(ref hex) = overrides.$field {
                match parse_hex_color(hex) {
                    Some(c) => theme.$field = c,
                    None => tracing::warn!(
                        slot = stringify!($field),
                        value = %hex,
                        "ignoring invalid color override"
                    ),
                }
            }
        };
    }
    apply!(added_fg);
    apply!(removed_fg);
    apply!(unchanged_fg);
    apply!(line_number_fg);
    apply!(collapsed_fg);
    apply!(header_fg);
}

// ── Built-in themes ──────────────────────────────────────────────

fn one_dark() -> Theme {
    Theme {
        name: "one-dark".to_string(),
        added_fg: Color::Green,
        removed_fg: Color::Red,
        unchanged_fg: Color::Rgb {
            r: 171,
            g: 178,
            b: 191,
        },
        line_number_fg: Color::DarkGrey,
        collapsed_fg: Color::Cyan,
        header_fg: Color::Magenta,
    }
}

fn github_dark() -> Theme {
    Theme {
        name: "github-dark".to_string(),
        added_fg: Color::Rgb {
            r: 63,
            g: 185,
            b: 80,
        },
        removed_fg: Color::Rgb {
            r: 248,
            g: 81,
            b: 73,
        },
        unchanged_fg: Color::Rgb {
            r: 230,
            g: 237,
            b: 243,
        },
        line_number_fg: Color::Rgb {
            r: 125,
            g: 133,
            b: 144,
        },
        collapsed_fg: Color::Rgb {
            r: 88,
            g: 166,
            b: 255,
        },
        header_fg: Color::Rgb {
            r: 188,
            g: 140,
            b: 255,
        },
    }
}

fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        added_fg: Color::Rgb {
            r: 80,
            g: 250,
            b: 123,
        },
        removed_fg: Color::Rgb {
            r: 255,
            g: 85,
            b: 85,
        },
        unchanged_fg: Color::Rgb {
            r: 248,
            g: 248,
            b: 242,
        },
        line_number_fg: Color::Rgb {
            r: 98,
            g: 114,
            b: 164,
        },
        collapsed_fg: Color::Rgb {
            r: 139,
            g: 233,
            b: 253,
        },
        header_fg: Color::Rgb {
            r: 255,
            g: 121,
            b: 198,
        },
    }
}
