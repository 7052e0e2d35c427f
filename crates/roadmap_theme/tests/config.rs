use roadmap_core::Color;
use roadmap_theme::{
    ColorLookup, ColorOverrides, ColorRole, ColorScheme, ThemeConfig, ThemeState,
};

const APP_THEME: &str = r##"
scheme = "light"

[light]
tint = "#1D4ED8"
overlay = "#00000080"

[dark]
tint = "#93C5FD"
"##;

#[test]
fn theme_state_from_config_resolves_overrides() {
    let config = ThemeConfig::from_toml_str(APP_THEME).unwrap();
    let theme = ThemeState::from_config(&config).unwrap();

    assert_eq!(theme.scheme(), ColorScheme::Light);
    assert_eq!(theme.color(ColorRole::Tint, None), Color::from_hex(0x1D4ED8));
    assert_eq!(
        theme.color(ColorRole::Overlay, None),
        Color::from_hex_rgba(0x00000080)
    );

    theme.set_scheme(ColorScheme::Dark);
    assert_eq!(theme.color(ColorRole::Tint, None), Color::from_hex(0x93C5FD));
}

#[test]
fn per_call_overrides_beat_config() {
    let theme = ThemeState::from_config(&APP_THEME.parse().unwrap()).unwrap();
    let lookup: &dyn ColorLookup = &theme;

    let pinned = ColorOverrides::both(Color::BLACK);
    assert_eq!(lookup.color(ColorRole::Tint, Some(&pinned)), Color::BLACK);
}

#[test]
fn config_survives_json_round_trip() {
    // Hosts that keep settings as JSON can embed the same structure
    let config = ThemeConfig::from_toml_str(APP_THEME).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: ThemeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
