//! ID detail screen demo
//!
//! Run with:
//! `cargo run -p roadmap_widgets --example id_detail_demo`
//!
//! Builds the detail screen for one government ID: a parallax header over
//! the requirements, followed by FAQ sections. A recorded scroll gesture
//! (pull down, release, scroll through) and a few taps are replayed, and the
//! resulting header style and section state are logged per step.

use anyhow::Result;
use roadmap_animation::{enable_layout_animations, Platform};
use roadmap_core::{Color, Event};
use roadmap_theme::{ColorOverrides, ThemeConfig, ThemeState};
use roadmap_widgets::{
    image, text, view, DisclosureController, ParallaxConfig, ScrollHeaderController, Widget,
};

const THEME: &str = r##"
scheme = "light"

[light]
tint = "#0A7EA4"

[dark]
overlay = "#000000A0"
"##;

const FAQ: &[(&str, &str)] = &[
    (
        "What documents do I need?",
        "A PSA birth certificate and one valid government-issued ID.",
    ),
    (
        "How long is processing?",
        "Expect the card within 10 to 15 working days.",
    ),
    (
        "Can I apply online?",
        "Book an appointment online, then appear in person for biometrics.",
    ),
];

/// Scroll samples of a pull-to-stretch followed by a scroll through
const GESTURE: &[f32] = &[0.0, -60.0, -140.0, -250.0, -320.0, -80.0, 0.0, 60.0, 125.0, 250.0, 600.0];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    if enable_layout_animations(Platform::current()) {
        tracing::info!("layout animations enabled for {:?}", Platform::current());
    }

    let theme = ThemeState::from_config(&ThemeConfig::from_toml_str(THEME)?)?;

    let mut screen = ScrollHeaderController::with_config(
        ParallaxConfig::new(250.0).gap(12.0),
        image("national-id-header.png"),
        view()
            .child(text("National ID").semibold())
            .child(text("Issued to citizens and resident foreigners aged 1 and up.")),
    )?
    .header_background(ColorOverrides {
        light: Some(Color::from_hex(0xA1CEDC)),
        dark: Some(Color::from_hex(0x1D3D47)),
    });

    let mut faq: Vec<DisclosureController> = FAQ
        .iter()
        .map(|&(question, answer)| DisclosureController::new(question, move || text(answer)))
        .collect();

    for &offset in GESTURE {
        screen.handle_event(&Event::scroll(offset));
        let style = screen.style();
        tracing::info!(
            "offset={:>7.1} translate_y={:>7.1} scale={:.3} overlay={:.2}",
            offset,
            style.translate_y,
            style.scale,
            style.overlay_opacity
        );
    }

    // Open the first two answers, then close the first again
    for index in [0, 1, 0] {
        let section = &mut faq[index];
        section.handle_event(&Event::press(0.0, 0.0));
        if let Some(transition) = section.take_transition() {
            tracing::info!(
                "'{}' open={} ({}ms {:?})",
                section.title(),
                section.is_open(),
                transition.duration_ms,
                transition.property
            );
        }
    }

    theme.toggle_scheme();
    let tree = screen.render(&theme);
    tracing::info!(
        "rendered screen: {} nodes, scheme {:?}",
        tree.node_count(),
        theme.scheme()
    );

    for section in &faq {
        let rendered = section.render(&theme);
        tracing::info!("{}: {:?}", section.accessibility_label(), rendered.texts());
    }

    Ok(())
}
