//! Color schemes and light/dark palette pairs

use serde::{Deserialize, Serialize};

use crate::palette;
use crate::tokens::ColorTokens;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// A palette for each scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

impl ThemeBundle {
    pub fn new(light: ColorTokens, dark: ColorTokens) -> Self {
        Self { light, dark }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &ColorTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn for_scheme_mut(&mut self, scheme: ColorScheme) -> &mut ColorTokens {
        match scheme {
            ColorScheme::Light => &mut self.light,
            ColorScheme::Dark => &mut self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::new(palette::light(), palette::dark())
    }
}
