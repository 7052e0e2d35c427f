//! The color lookup seam between components and the theme.

use roadmap_core::Color;

use crate::theme::ColorScheme;
use crate::tokens::ColorRole;

/// Per-call color overrides, one per scheme.
///
/// A component that wants a specific color in one scheme only (say, a
/// darker border in light mode) passes this alongside the role; the other
/// scheme falls back to the theme.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorOverrides {
    pub light: Option<Color>,
    pub dark: Option<Color>,
}

impl ColorOverrides {
    pub fn light(color: Color) -> Self {
        Self {
            light: Some(color),
            dark: None,
        }
    }

    pub fn dark(color: Color) -> Self {
        Self {
            light: None,
            dark: Some(color),
        }
    }

    /// Same override in both schemes
    pub fn both(color: Color) -> Self {
        Self {
            light: Some(color),
            dark: Some(color),
        }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> Option<Color> {
        match scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
        }
    }
}

/// Resolves a semantic role to a concrete color.
///
/// Implemented by [`ThemeState`](crate::ThemeState), and by any closure of
/// the same shape for hosts that bring their own theming.
pub trait ColorLookup {
    fn color(&self, role: ColorRole, overrides: Option<&ColorOverrides>) -> Color;
}

impl<F> ColorLookup for F
where
    F: Fn(ColorRole, Option<&ColorOverrides>) -> Color,
{
    fn color(&self, role: ColorRole, overrides: Option<&ColorOverrides>) -> Color {
        self(role, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_per_scheme() {
        let o = ColorOverrides::light(Color::WHITE);
        assert_eq!(o.for_scheme(ColorScheme::Light), Some(Color::WHITE));
        assert_eq!(o.for_scheme(ColorScheme::Dark), None);
        assert_eq!(
            ColorOverrides::both(Color::BLACK).for_scheme(ColorScheme::Dark),
            Some(Color::BLACK)
        );
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |role: ColorRole, overrides: Option<&ColorOverrides>| {
            overrides
                .and_then(|o| o.light)
                .unwrap_or(if role == ColorRole::Text {
                    Color::BLACK
                } else {
                    Color::WHITE
                })
        };
        let dyn_lookup: &dyn ColorLookup = &lookup;

        assert_eq!(dyn_lookup.color(ColorRole::Text, None), Color::BLACK);
        assert_eq!(dyn_lookup.color(ColorRole::Border, None), Color::WHITE);
        assert_eq!(
            dyn_lookup.color(
                ColorRole::Text,
                Some(&ColorOverrides::light(Color::TRANSPARENT))
            ),
            Color::TRANSPARENT
        );
    }
}
