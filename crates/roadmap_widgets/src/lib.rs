//! Roadmap Widget Library
//!
//! Interaction components for the Roadmap screens:
//!
//! - [`ScrollHeaderController`]: parallax header driven by scroll offset
//! - [`DisclosureController`]: titled section that expands and collapses
//!
//! Components own their state, consume [`roadmap_core::Event`]s and produce
//! an [`Element`] tree for the host renderer. Colors come from an injected
//! [`roadmap_theme::ColorLookup`].

pub mod accessibility;
pub mod disclosure;
pub mod element;
pub mod parallax;
pub mod widget;

pub use accessibility::{Accessibility, AccessibilityRole};
pub use disclosure::{DisclosureConfig, DisclosureController, DisclosureEvent, DisclosureState};
pub use element::{icon, image, text, view, ContentFn, Element, ElementKind, ElementStyle};
pub use parallax::{
    derive_style, DerivedHeaderStyle, HeaderGeometry, ParallaxConfig, ScrollHeaderController,
};
pub use widget::Widget;
