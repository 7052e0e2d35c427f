//! Default Roadmap palettes
//!
//! Neutral greys with a teal tint in light mode and a white tint in dark
//! mode, so the active tab reads clearly on either background.

use roadmap_core::Color;

use crate::tokens::ColorTokens;

const TINT_LIGHT: u32 = 0x0A7EA4;

/// Light palette
pub fn light() -> ColorTokens {
    ColorTokens {
        text: Color::from_hex(0x11181C),
        background: Color::WHITE,
        surface: Color::from_hex(0xF2F4F5),
        tint: Color::from_hex(TINT_LIGHT),
        icon: Color::from_hex(0x687076),
        border: Color::from_hex(0xD7DBDF),
        overlay: Color::rgba(0.0, 0.0, 0.0, 0.35),
        tab_icon_default: Color::from_hex(0x687076),
        tab_icon_selected: Color::from_hex(TINT_LIGHT),
    }
}

/// Dark palette
pub fn dark() -> ColorTokens {
    ColorTokens {
        text: Color::from_hex(0xECEDEE),
        background: Color::from_hex(0x151718),
        surface: Color::from_hex(0x1F2224),
        tint: Color::WHITE,
        icon: Color::from_hex(0x9BA1A6),
        border: Color::from_hex(0x3A3F42),
        overlay: Color::rgba(0.0, 0.0, 0.0, 0.55),
        tab_icon_default: Color::from_hex(0x9BA1A6),
        tab_icon_selected: Color::WHITE,
    }
}
