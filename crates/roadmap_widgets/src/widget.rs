//! Base widget trait

use roadmap_core::Event;
use roadmap_theme::ColorLookup;

use crate::element::Element;

/// Base trait for all widgets
pub trait Widget {
    /// Handle an event. Returns `true` if the widget consumed it.
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Render the widget's current state
    fn render(&self, theme: &dyn ColorLookup) -> Element;
}
