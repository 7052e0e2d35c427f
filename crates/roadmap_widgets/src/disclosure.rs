//! Disclosure section
//!
//! A titled header row that expands and collapses the content below it.
//! Content is built only while open: closing drops the built tree and
//! reopening calls the content builder again.
//!
//! ```rust
//! use roadmap_widgets::{text, DisclosureController};
//!
//! let mut faq = DisclosureController::new("How long does it take?", || {
//!     text("Usually two to three weeks.")
//! });
//! assert!(!faq.is_open());
//! assert_eq!(faq.accessibility_label(), "Expand How long does it take?");
//!
//! faq.toggle();
//! assert!(faq.is_open());
//! assert!(faq.content().is_some());
//! ```

use std::sync::Arc;

use roadmap_animation::LayoutTransition;
use roadmap_core::events::event_types;
use roadmap_core::{Affine2D, Event, StateMachine};
use roadmap_theme::{ColorLookup, ColorRole};
use serde::{Deserialize, Serialize};

use crate::accessibility::Accessibility;
use crate::element::{icon, text, view, ContentFn, Element};
use crate::widget::Widget;

/// Chevron symbol in the header row
const CHEVRON_ICON: &str = "chevron.right";

/// Key of the pressable header row
const HEADER_KEY: &str = "disclosure-header";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisclosureEvent {
    Toggle,
}

/// Disclosure configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureConfig {
    /// Start open
    pub default_open: bool,
    /// Transition requested on every toggle
    pub transition: LayoutTransition,
    /// Left indent of the content under the title
    pub content_indent: f32,
    /// Chevron size
    pub icon_size: f32,
    /// Spacing between chevron and title, and between header and content
    pub gap: f32,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            default_open: false,
            transition: LayoutTransition::default(),
            content_indent: 24.0,
            icon_size: 18.0,
            gap: 6.0,
        }
    }
}

impl DisclosureConfig {
    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    pub fn transition(mut self, transition: LayoutTransition) -> Self {
        self.transition = transition;
        self
    }

    pub fn content_indent(mut self, indent: f32) -> Self {
        self.content_indent = indent;
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }
}

/// One collapsible section
pub struct DisclosureController {
    title: String,
    config: DisclosureConfig,
    fsm: StateMachine<DisclosureState, DisclosureEvent>,
    content: ContentFn,
    /// Built content, present exactly while open
    mounted: Option<Element>,
    pending_transition: Option<LayoutTransition>,
}

impl DisclosureController {
    pub fn new<F>(title: impl Into<String>, content: F) -> Self
    where
        F: Fn() -> Element + Send + Sync + 'static,
    {
        Self::with_config(title, DisclosureConfig::default(), content)
    }

    pub fn with_config<F>(title: impl Into<String>, config: DisclosureConfig, content: F) -> Self
    where
        F: Fn() -> Element + Send + Sync + 'static,
    {
        let initial = if config.default_open {
            DisclosureState::Open
        } else {
            DisclosureState::Closed
        };

        let fsm = StateMachine::builder(initial)
            .on(
                DisclosureState::Closed,
                DisclosureEvent::Toggle,
                DisclosureState::Open,
            )
            .on(
                DisclosureState::Open,
                DisclosureEvent::Toggle,
                DisclosureState::Closed,
            )
            .build();

        let content: ContentFn = Arc::new(content);
        let mounted = config.default_open.then(|| content());

        Self {
            title: title.into(),
            config,
            fsm,
            content,
            mounted,
            pending_transition: None,
        }
    }

    /// Flip between open and closed.
    ///
    /// Opening builds the content, closing drops it. Returns the transition
    /// the renderer should use for the resulting layout change.
    pub fn toggle(&mut self) -> LayoutTransition {
        let state = self.fsm.send(DisclosureEvent::Toggle);
        self.mounted = match state {
            DisclosureState::Open => Some((self.content)()),
            DisclosureState::Closed => None,
        };
        tracing::debug!("disclosure '{}' -> {:?}", self.title, state);

        let transition = self.config.transition;
        self.pending_transition = Some(transition);
        transition
    }

    pub fn state(&self) -> DisclosureState {
        self.fsm.current_state()
    }

    pub fn is_open(&self) -> bool {
        self.fsm.is_in(DisclosureState::Open)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn config(&self) -> &DisclosureConfig {
        &self.config
    }

    /// Spoken label for the header row's next action
    pub fn accessibility_label(&self) -> String {
        match self.state() {
            DisclosureState::Closed => format!("Expand {}", self.title),
            DisclosureState::Open => format!("Collapse {}", self.title),
        }
    }

    pub fn accessibility(&self) -> Accessibility {
        Accessibility::button(self.accessibility_label()).expanded(self.is_open())
    }

    /// Take the transition requested by the last toggle, if not yet consumed
    pub fn take_transition(&mut self) -> Option<LayoutTransition> {
        self.pending_transition.take()
    }

    /// Built content, `None` while closed
    pub fn content(&self) -> Option<&Element> {
        self.mounted.as_ref()
    }
}

impl Widget for DisclosureController {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event.event_type {
            // Only the header row toggles; presses inside the content are not ours
            event_types::PRESS if event.targets(HEADER_KEY) => {
                self.toggle();
                true
            }
            _ => false,
        }
    }

    fn render(&self, theme: &dyn ColorLookup) -> Element {
        let rotation = if self.is_open() { 90.0 } else { 0.0 };

        let header = view()
            .key(HEADER_KEY)
            .row()
            .gap(self.config.gap)
            .accessibility(self.accessibility())
            .child(
                icon(CHEVRON_ICON, self.config.icon_size)
                    .key("disclosure-chevron")
                    .color(theme.color(ColorRole::Icon, None))
                    .transform(Affine2D::rotation_degrees(rotation)),
            )
            .child(
                text(self.title.as_str())
                    .semibold()
                    .color(theme.color(ColorRole::Text, None)),
            );

        let mut root = view().key("disclosure").child(header);

        if let Some(content) = &self.mounted {
            root = root.child(
                view()
                    .key("disclosure-content")
                    .mt(self.config.gap)
                    .ml(self.config.content_indent)
                    .child(content.clone()),
            );
        }

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_open_builds_content_immediately() {
        let d = DisclosureController::with_config(
            "Requirements",
            DisclosureConfig::default().default_open(true),
            || text("PSA birth certificate"),
        );
        assert_eq!(d.state(), DisclosureState::Open);
        assert!(d.content().is_some());
        assert_eq!(d.accessibility_label(), "Collapse Requirements");
    }

    #[test]
    fn test_toggle_returns_configured_transition() {
        let mut d = DisclosureController::with_config(
            "Fees",
            DisclosureConfig::default().transition(LayoutTransition::snappy()),
            || text("PHP 155"),
        );
        assert_eq!(d.take_transition(), None);
        assert_eq!(d.toggle(), LayoutTransition::snappy());
        assert_eq!(d.take_transition(), Some(LayoutTransition::snappy()));
        assert_eq!(d.take_transition(), None);
    }

    #[test]
    fn test_accessibility_tracks_state() {
        let mut d = DisclosureController::new("Where to apply", || text("Any post office"));
        let a = d.accessibility();
        assert_eq!(a.label, "Expand Where to apply");
        assert_eq!(a.expanded, Some(false));

        d.toggle();
        let a = d.accessibility();
        assert_eq!(a.label, "Collapse Where to apply");
        assert_eq!(a.expanded, Some(true));
    }
}
