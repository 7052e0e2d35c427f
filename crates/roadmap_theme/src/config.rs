//! Theme configuration
//!
//! Apps ship theme tweaks as TOML:
//!
//! ```toml
//! scheme = "dark"
//!
//! [light]
//! tint = "#0A7EA4"
//!
//! [dark]
//! border = "#3A3F42"
//! overlay = "#0000008C"
//! ```
//!
//! Every key under `[light]`/`[dark]` must be a color role name; values are
//! `#RRGGBB` or `#RRGGBBAA`. Roles not listed keep the default palette.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::ThemeError;
use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::{parse_hex_color, ColorRole, ColorTokens};

/// Parsed theme configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Scheme active at startup
    pub scheme: ColorScheme,
    /// Light palette overrides, keyed by role name
    pub light: BTreeMap<String, String>,
    /// Dark palette overrides, keyed by role name
    pub dark: BTreeMap<String, String>,
}

impl ThemeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// Default palettes with this config's overrides applied
    pub fn bundle(&self) -> Result<ThemeBundle, ThemeError> {
        let mut bundle = ThemeBundle::default();
        apply_overrides(&mut bundle.light, &self.light)?;
        apply_overrides(&mut bundle.dark, &self.dark)?;
        Ok(bundle)
    }
}

impl FromStr for ThemeConfig {
    type Err = ThemeError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(source)
    }
}

fn apply_overrides(
    tokens: &mut ColorTokens,
    overrides: &BTreeMap<String, String>,
) -> Result<(), ThemeError> {
    for (name, value) in overrides {
        let role: ColorRole = name.parse()?;
        tokens.set(role, parse_hex_color(value)?);
        tracing::debug!("theme override: {} = {}", name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use roadmap_core::Color;

    #[test]
    fn test_empty_config_is_default_theme() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.bundle().unwrap(), ThemeBundle::default());
    }

    #[test]
    fn test_overrides_apply_per_scheme() {
        let config: ThemeConfig = r##"
            scheme = "dark"

            [dark]
            border = "#FFFFFF"
        "##
        .parse()
        .unwrap();

        assert_eq!(config.scheme, ColorScheme::Dark);
        let bundle = config.bundle().unwrap();
        assert_eq!(bundle.dark.border, Color::WHITE);
        assert_eq!(bundle.light.border, palette::light().border);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let config = ThemeConfig::from_toml_str("[light]\nshadow = \"#000000\"").unwrap();
        assert!(matches!(config.bundle(), Err(ThemeError::UnknownRole(_))));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let config = ThemeConfig::from_toml_str("[light]\ntint = \"teal\"").unwrap();
        assert!(matches!(config.bundle(), Err(ThemeError::InvalidColor(_))));
    }

    #[test]
    fn test_unknown_top_level_key_is_a_parse_error() {
        assert!(matches!(
            ThemeConfig::from_toml_str("accent = \"#000000\""),
            Err(ThemeError::Parse(_))
        ));
    }
}
