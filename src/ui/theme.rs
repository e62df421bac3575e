use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Reel colors
    pub landed: ColorSpec,
    pub spinning: ColorSpec,

    // Status color
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub button_bg: ColorSpec,
    pub button_fg: ColorSpec,
    pub footer_bg: ColorSpec,
    pub footer_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),  // Blue
            banner: ColorSpec::rgb(125, 207, 255),   // Cyan
            text: ColorSpec::rgb(192, 202, 245),     // Foreground
            text_muted: ColorSpec::rgb(86, 95, 137), // Comment
            landed: ColorSpec::rgb(158, 206, 106),   // Green
            spinning: ColorSpec::rgb(224, 175, 104), // Yellow
            error: ColorSpec::rgb(247, 118, 142), // Red
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(59, 66, 97),
            button_bg: ColorSpec::rgb(122, 162, 247),
            button_fg: ColorSpec::rgb(26, 27, 38), // Background
            footer_bg: ColorSpec::rgb(36, 40, 59),
            footer_fg: ColorSpec::rgb(169, 177, 214),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),   // Purple
            banner: ColorSpec::rgb(139, 233, 253),    // Cyan
            text: ColorSpec::rgb(248, 248, 242),      // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164), // Comment
            landed: ColorSpec::rgb(80, 250, 123),     // Green
            spinning: ColorSpec::rgb(241, 250, 140),  // Yellow
            error: ColorSpec::rgb(255, 85, 85), // Red
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(68, 71, 90),
            button_bg: ColorSpec::rgb(255, 121, 198),
            button_fg: ColorSpec::rgb(40, 42, 54), // Background
            footer_bg: ColorSpec::rgb(68, 71, 90),
            footer_fg: ColorSpec::rgb(248, 248, 242),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(144, 122, 169),    // Iris
            banner: ColorSpec::rgb(215, 130, 126),     // Rose
            text: ColorSpec::rgb(87, 82, 121),         // Text
            text_muted: ColorSpec::rgb(152, 147, 165), // Muted
            landed: ColorSpec::rgb(40, 105, 131),      // Pine
            spinning: ColorSpec::rgb(234, 157, 52),    // Gold
            error: ColorSpec::rgb(180, 99, 122),
            border_active: ColorSpec::rgb(144, 122, 169),
            border_normal: ColorSpec::rgb(206, 202, 205),
            button_bg: ColorSpec::rgb(215, 130, 126),
            button_fg: ColorSpec::rgb(250, 244, 237), // Base
            footer_bg: ColorSpec::rgb(242, 233, 225),
            footer_fg: ColorSpec::rgb(87, 82, 121),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}
