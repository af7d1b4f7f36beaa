use std::path::PathBuf;

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};
use getset::CopyGetters;
use life_core::Theme;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TermConfiguration {
    /// Show the logo screen before the board
    #[serde(default = "bool_true")]
    pub splash: bool,
    /// Defaults to `~/.conway/conwaylogo`
    #[serde(default)]
    pub logo_path: Option<PathBuf>,
    /// Key that stops a run between generations. Runs cannot be stopped when
    /// this is unset.
    #[serde(default)]
    pub cancel_key: Option<char>,
}

fn bool_true() -> bool {
    true
}

impl Default for TermConfiguration {
    fn default() -> Self {
        TermConfiguration {
            splash: true,
            logo_path: None,
            cancel_key: None,
        }
    }
}

/// Styles used to draw the board in one theme
#[derive(Clone, Copy, CopyGetters, Debug)]
#[get_copy = "pub"]
pub struct ColorScheme {
    live_cell: ContentStyle,
    dead_cell: ContentStyle,
    panel_border: ContentStyle,
    panel_text: ContentStyle,
    splash_border: ContentStyle,
    splash_title: ContentStyle,
    splash_credits: ContentStyle,
}

impl ColorScheme {
    pub fn for_theme(theme: Theme) -> Self {
        let color = theme_color(theme);
        ColorScheme {
            live_cell: style(Some(color), Some(Color::Black), Some(Attribute::Reverse)),
            dead_cell: style(Some(color), Some(Color::Black), None),
            panel_border: style(Some(color), Some(Color::Black), None),
            panel_text: style(None, None, None),
            splash_border: style(Some(SPLASH_COLOR), None, Some(Attribute::Bold)),
            splash_title: style(Some(SPLASH_COLOR), None, Some(Attribute::Bold)),
            splash_credits: style(Some(SPLASH_COLOR), None, None),
        }
    }
}

const SPLASH_COLOR: Color = Color::Rgb {
    r: 189,
    g: 189,
    b: 0,
};

/// 1 blue, 2 red, 3 green, 4 yellow, 5 light blue, 6 orange, 7 white
pub fn theme_color(theme: Theme) -> Color {
    match theme.id() {
        1 => Color::Rgb {
            r: 68,
            g: 68,
            b: 119,
        },
        2 => Color::Rgb {
            r: 255,
            g: 40,
            b: 40,
        },
        3 => Color::Rgb {
            r: 85,
            g: 186,
            b: 85,
        },
        4 => SPLASH_COLOR,
        5 => Color::Rgb {
            r: 128,
            g: 128,
            b: 255,
        },
        6 => Color::Rgb {
            r: 255,
            g: 128,
            b: 0,
        },
        _ => Color::White,
    }
}

pub fn style(fg: Option<Color>, bg: Option<Color>, attr: Option<Attribute>) -> ContentStyle {
    let attributes = attr
        .map(|attr| Attributes::default() | attr)
        .unwrap_or_default();
    ContentStyle {
        foreground_color: fg,
        background_color: bg,
        attributes,
    }
}
