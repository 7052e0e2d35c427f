//! Layout transition hints
//!
//! A [`LayoutTransition`] is returned by a component whose next layout
//! differs from the current one (a section opening, a row being removed).
//! It tells the rendering layer to animate between the two layouts instead
//! of snapping. Honouring it is optional: state stays correct either way.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Property animated when elements appear or disappear
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatedProperty {
    #[default]
    Opacity,
    ScaleXY,
}

/// Animation request for the next layout change
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTransition {
    /// Total duration in milliseconds
    pub duration_ms: u32,
    /// Curve applied to resized and moved elements
    pub easing: Easing,
    /// Property used for inserted and removed elements
    pub property: AnimatedProperty,
}

impl Default for LayoutTransition {
    fn default() -> Self {
        Self::ease_in_ease_out()
    }
}

impl LayoutTransition {
    pub fn new(duration_ms: u32, easing: Easing, property: AnimatedProperty) -> Self {
        Self {
            duration_ms,
            easing,
            property,
        }
    }

    /// 300ms ease-in-out, fading inserted content
    pub fn ease_in_ease_out() -> Self {
        Self::new(300, Easing::EASE_IN_EASE_OUT, AnimatedProperty::Opacity)
    }

    /// 500ms linear fade
    pub fn linear() -> Self {
        Self::new(500, Easing::Linear, AnimatedProperty::Opacity)
    }

    /// 700ms with a strong ease-out, scaling inserted content in
    pub fn snappy() -> Self {
        Self::new(700, Easing::EaseOut, AnimatedProperty::ScaleXY)
    }

    /// Set the duration
    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Eased progress after `elapsed_ms`, in `0.0..=1.0`
    pub fn progress(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.easing.apply(elapsed_ms / self.duration_ms as f32)
    }

    /// Value between `from` and `to` after `elapsed_ms`
    pub fn value_at(&self, from: f32, to: f32, elapsed_ms: f32) -> f32 {
        from + (to - from) * self.progress(elapsed_ms)
    }

    pub fn is_finished(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.duration_ms as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ease_in_ease_out() {
        let t = LayoutTransition::default();
        assert_eq!(t.duration_ms, 300);
        assert_eq!(t.easing, Easing::EASE_IN_EASE_OUT);
        assert_eq!(t.property, AnimatedProperty::Opacity);
    }

    #[test]
    fn test_progress_bounds() {
        let t = LayoutTransition::linear();
        assert_eq!(t.progress(0.0), 0.0);
        assert_eq!(t.progress(250.0), 0.5);
        assert_eq!(t.progress(10_000.0), 1.0);
        assert!(t.is_finished(500.0));
        assert!(!t.is_finished(499.0));
    }

    #[test]
    fn test_value_at_animates_height() {
        let t = LayoutTransition::linear().duration(100);
        assert_eq!(t.value_at(0.0, 240.0, 50.0), 120.0);
        assert_eq!(t.value_at(240.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let t = LayoutTransition::snappy().duration(0);
        assert_eq!(t.progress(0.0), 1.0);
        assert!(t.is_finished(0.0));
    }
}
