//! Color tokens for theming

use roadmap_core::Color;
use std::str::FromStr;

use crate::error::ThemeError;

/// Semantic color role
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorRole {
    Text,
    Background,
    /// Cards, sheets and other raised surfaces
    Surface,
    /// Brand accent for active controls
    Tint,
    Icon,
    Border,
    /// Dimming layer drawn over content
    Overlay,
    TabIconDefault,
    TabIconSelected,
}

impl ColorRole {
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Text,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Tint,
        ColorRole::Icon,
        ColorRole::Border,
        ColorRole::Overlay,
        ColorRole::TabIconDefault,
        ColorRole::TabIconSelected,
    ];

    /// Config key for this role
    pub fn name(&self) -> &'static str {
        match self {
            ColorRole::Text => "text",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::Tint => "tint",
            ColorRole::Icon => "icon",
            ColorRole::Border => "border",
            ColorRole::Overlay => "overlay",
            ColorRole::TabIconDefault => "tab_icon_default",
            ColorRole::TabIconSelected => "tab_icon_selected",
        }
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| ThemeError::UnknownRole(s.to_string()))
    }
}

/// Complete set of role colors for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub text: Color,
    pub background: Color,
    pub surface: Color,
    pub tint: Color,
    pub icon: Color,
    pub border: Color,
    pub overlay: Color,
    pub tab_icon_default: Color,
    pub tab_icon_selected: Color,
}

impl ColorTokens {
    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Text => self.text,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Tint => self.tint,
            ColorRole::Icon => self.icon,
            ColorRole::Border => self.border,
            ColorRole::Overlay => self.overlay,
            ColorRole::TabIconDefault => self.tab_icon_default,
            ColorRole::TabIconSelected => self.tab_icon_selected,
        }
    }

    /// Replace the color for a role
    pub fn set(&mut self, role: ColorRole, color: Color) {
        let slot = match role {
            ColorRole::Text => &mut self.text,
            ColorRole::Background => &mut self.background,
            ColorRole::Surface => &mut self.surface,
            ColorRole::Tint => &mut self.tint,
            ColorRole::Icon => &mut self.icon,
            ColorRole::Border => &mut self.border,
            ColorRole::Overlay => &mut self.overlay,
            ColorRole::TabIconDefault => &mut self.tab_icon_default,
            ColorRole::TabIconSelected => &mut self.tab_icon_selected,
        };
        *slot = color;
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex_color(value: &str) -> Result<Color, ThemeError> {
    let digits = value.trim().trim_start_matches('#');
    let invalid = || ThemeError::InvalidColor(value.to_string());

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    match digits.len() {
        6 => Ok(Color::from_hex(packed)),
        8 => Ok(Color::from_hex_rgba(packed)),
        _ => Err(invalid()),
    }
}
