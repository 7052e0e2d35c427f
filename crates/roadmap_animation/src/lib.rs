//! Roadmap Animation Primitives
//!
//! Scroll-driven and state-driven animation building blocks.
//!
//! # Features
//!
//! - **Interpolation**: piecewise-linear mapping with per-side extrapolation
//! - **Easing**: standard curves and CSS-compatible cubic beziers
//! - **Layout transitions**: hints that ask the renderer to animate a layout
//!   change instead of snapping
//! - **Platform capability**: the one-time opt-in some platforms need before
//!   layout transitions are honoured

pub mod easing;
pub mod error;
pub mod interpolate;
pub mod layout_transition;
pub mod platform;

pub use easing::Easing;
pub use error::AnimationError;
pub use interpolate::{interpolate, Extrapolate, Interpolation};
pub use layout_transition::{AnimatedProperty, LayoutTransition};
pub use platform::{enable_layout_animations, layout_animations_enabled, Platform};
