use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use roadmap_animation::{AnimatedProperty, LayoutTransition};
use roadmap_core::Event;
use roadmap_theme::{ColorLookup, ColorRole, ColorScheme, ThemeBundle, ThemeState};
use roadmap_widgets::{
    text, view, AccessibilityRole, DisclosureConfig, DisclosureController, DisclosureState,
    ElementKind, Widget,
};

/// Disclosure whose content counts how often it is built
fn counted(title: &str) -> (DisclosureController, Arc<AtomicUsize>) {
    let mounts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&mounts);
    let disclosure = DisclosureController::new(title, move || {
        counter.fetch_add(1, Ordering::SeqCst);
        view()
            .key("answer")
            .child(text("Bring a valid ID and proof of address."))
    });
    (disclosure, mounts)
}

#[test]
fn double_toggle_returns_to_start() {
    let mut d = DisclosureController::new("Requirements", || text("..."));
    assert_eq!(d.state(), DisclosureState::Closed);

    d.toggle();
    assert_eq!(d.state(), DisclosureState::Open);

    d.toggle();
    assert_eq!(d.state(), DisclosureState::Closed);
}

#[test]
fn default_open_starts_open() {
    let mut d = DisclosureController::with_config(
        "Fees",
        DisclosureConfig::default().default_open(true),
        || text("..."),
    );
    assert!(d.is_open());
    d.toggle();
    assert!(!d.is_open());
}

#[test]
fn closed_content_is_never_built() {
    let theme = ThemeState::default();
    let (mut d, mounts) = counted("Where do I apply?");

    // Rendering while closed must not build the content
    for _ in 0..3 {
        let tree = d.render(&theme);
        assert!(!tree.contains_key("disclosure-content"));
        assert!(!tree.contains_key("answer"));
    }
    assert_eq!(mounts.load(Ordering::SeqCst), 0);

    d.toggle();
    assert_eq!(mounts.load(Ordering::SeqCst), 1);
    let tree = d.render(&theme);
    assert!(tree.contains_key("answer"));

    // Re-rendering an open section reuses what was built
    d.render(&theme);
    assert_eq!(mounts.load(Ordering::SeqCst), 1);

    d.toggle();
    assert!(d.content().is_none());
    assert!(!d.render(&theme).contains_key("answer"));

    // Every open mounts afresh
    d.toggle();
    assert_eq!(mounts.load(Ordering::SeqCst), 2);
}

#[test]
fn header_row_carries_accessibility() {
    let theme = ThemeState::default();
    let (mut d, _) = counted("Processing time");

    let tree = d.render(&theme);
    let header = tree.find("disclosure-header").unwrap();
    let a11y = header.accessibility.as_ref().unwrap();
    assert_eq!(a11y.role, AccessibilityRole::Button);
    assert_eq!(a11y.label, "Expand Processing time");
    assert_eq!(a11y.expanded, Some(false));

    d.toggle();
    let tree = d.render(&theme);
    let a11y = tree
        .find("disclosure-header")
        .and_then(|h| h.accessibility.clone())
        .unwrap();
    assert_eq!(a11y.label, "Collapse Processing time");
    assert_eq!(a11y.expanded, Some(true));
}

#[test]
fn chevron_rotates_and_uses_icon_color() {
    let theme = ThemeState::new(ThemeBundle::default(), ColorScheme::Dark);
    let mut d = DisclosureController::new("Validity", || text("Ten years"));

    let closed = d.render(&theme);
    let chevron = closed.find("disclosure-chevron").unwrap();
    assert!(matches!(chevron.kind, ElementKind::Icon { .. }));
    assert!(chevron.style.transform.is_identity());
    assert_eq!(
        chevron.style.foreground,
        Some(theme.color(ColorRole::Icon, None))
    );

    d.toggle();
    let open = d.render(&theme);
    let rotated = open
        .find("disclosure-chevron")
        .unwrap()
        .style
        .transform
        .transform_point(roadmap_core::Point::new(1.0, 0.0));
    assert!(rotated.x.abs() < 1e-5);
    assert!((rotated.y - 1.0).abs() < 1e-5);
}

#[test]
fn every_toggle_requests_a_layout_transition() {
    let mut d = DisclosureController::new("Cost", || text("Free"));

    let t = d.toggle();
    assert_eq!(t, LayoutTransition::ease_in_ease_out());
    assert_eq!(t.duration_ms, 300);
    assert_eq!(t.property, AnimatedProperty::Opacity);
    assert_eq!(d.take_transition(), Some(t));

    d.toggle();
    assert_eq!(d.take_transition(), Some(t));
    assert_eq!(d.take_transition(), None);
}

#[test]
fn press_events_toggle() {
    let mut d = DisclosureController::new("Renewal", || text("Every five years"));

    assert!(d.handle_event(&Event::press(4.0, 4.0)));
    assert!(d.is_open());

    assert!(!d.handle_event(&Event::scroll(20.0)));
    assert!(d.is_open());
}

#[test]
fn only_header_presses_toggle() {
    let (mut d, mounts) = counted("Lost ID");

    assert!(!d.handle_event(&Event::press(4.0, 30.0).with_target("answer")));
    assert!(!d.is_open());
    assert_eq!(mounts.load(Ordering::SeqCst), 0);

    assert!(d.handle_event(&Event::press(4.0, 4.0).with_target("disclosure-header")));
    assert!(d.is_open());

    // A tap on the revealed answer leaves the section open
    assert!(!d.handle_event(&Event::press(4.0, 30.0).with_target("answer")));
    assert!(d.is_open());
    assert_eq!(mounts.load(Ordering::SeqCst), 1);
}

#[test]
fn many_toggles_do_not_accumulate_state() {
    let (mut d, mounts) = counted("Replacement");
    for _ in 0..10_000 {
        d.toggle();
    }
    // Even count: back to closed, with nothing built or pending beyond the last hint
    assert!(!d.is_open());
    assert!(d.content().is_none());
    assert_eq!(mounts.load(Ordering::SeqCst), 5_000);
    assert!(d.take_transition().is_some());
    assert!(d.take_transition().is_none());
}

#[test]
fn sections_are_independent() {
    let mut first = DisclosureController::new("First", || text("a"));
    let second = DisclosureController::new("Second", || text("b"));

    first.toggle();
    assert!(first.is_open());
    assert!(!second.is_open());
}

#[test]
fn config_deserializes_with_defaults() {
    let config: DisclosureConfig = serde_json::from_str(r#"{"default_open": true}"#).unwrap();
    assert!(config.default_open);
    assert_eq!(config.transition, LayoutTransition::default());
    assert_eq!(config.content_indent, 24.0);
}
