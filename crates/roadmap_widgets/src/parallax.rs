//! Parallax scroll header
//!
//! A fixed-height header visual sits above scrollable content. As the user
//! scrolls, the header lags behind at 0.75x, and when pulled past the top
//! it stretches and scales up. A dimming overlay fades out over the first
//! half of the header height.
//!
//! All derived values come from [`derive_style`], a pure function of the
//! latest scroll offset and the [`HeaderGeometry`]. The controller only
//! stores the offset; styles are recomputed on demand, so changing the
//! geometry can never leave a stale style behind.
//!
//! # Example
//!
//! ```rust
//! use roadmap_widgets::{text, view, ScrollHeaderController};
//!
//! let mut screen = ScrollHeaderController::new(
//!     200.0,
//!     view().child(text("header art")),
//!     view().child(text("Driver's License")),
//! )
//! .expect("positive header height");
//!
//! screen.on_scroll(100.0);
//! let style = screen.style();
//! assert_eq!(style.translate_y, 75.0);
//! assert_eq!(style.overlay_opacity, 0.0);
//! ```

use roadmap_animation::Interpolation;
use roadmap_core::events::event_types;
use roadmap_core::{Affine2D, ConfigError, Event};
use roadmap_theme::{ColorLookup, ColorOverrides, ColorRole};
use serde::{Deserialize, Serialize};

use crate::accessibility::{Accessibility, AccessibilityRole};
use crate::element::{view, Element};
use crate::widget::Widget;

/// Header translation at full overscroll, as a fraction of header height
const PULL_TRANSLATE_FACTOR: f32 = -0.5;
/// Header translation at one header height of scroll
const SCROLL_TRANSLATE_FACTOR: f32 = 0.75;
/// Header scale at full overscroll
const MAX_PULL_SCALE: f32 = 1.5;

/// Key of the scroll surface; scroll events address it
const ROOT_KEY: &str = "parallax";

// ─────────────────────────────────────────────────────────────────────────────
// Geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Header height together with the clamped mappings derived from it.
///
/// The mappings are rebuilt whenever the height changes; there is no way to
/// hold a geometry whose ranges disagree with its height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry", into = "RawGeometry")]
pub struct HeaderGeometry {
    header_height: f32,
    translate: Interpolation,
    scale: Interpolation,
    overlay: Interpolation,
}

impl HeaderGeometry {
    /// Build the geometry for a header of `header_height` logical pixels.
    ///
    /// Fails with [`ConfigError::InvalidHeaderHeight`] unless the height is
    /// finite and large enough that half of it is still greater than zero.
    pub fn new(header_height: f32) -> Result<Self, ConfigError> {
        // Half the height bounds the overlay fade, so it must not round to 0
        if !header_height.is_finite() || header_height / 2.0 <= 0.0 {
            tracing::warn!("rejecting header height {}", header_height);
            return Err(ConfigError::InvalidHeaderHeight(header_height));
        }

        let h = header_height;
        let translate = Interpolation::new(
            &[-h, 0.0, h],
            &[h * PULL_TRANSLATE_FACTOR, 0.0, h * SCROLL_TRANSLATE_FACTOR],
        )?
        .clamp();
        let scale = Interpolation::new(&[-h, 0.0], &[MAX_PULL_SCALE, 1.0])?.clamp();
        let overlay = Interpolation::new(&[0.0, h / 2.0], &[1.0, 0.0])?.clamp();

        Ok(Self {
            header_height,
            translate,
            scale,
            overlay,
        })
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Offset-to-translation mapping
    pub fn translate(&self) -> &Interpolation {
        &self.translate
    }

    /// Offset-to-scale mapping
    pub fn scale(&self) -> &Interpolation {
        &self.scale
    }

    /// Offset-to-overlay-opacity mapping
    pub fn overlay(&self) -> &Interpolation {
        &self.overlay
    }
}

/// Serialized form: only the height, the mappings are derived
#[derive(Serialize, Deserialize)]
struct RawGeometry {
    header_height: f32,
}

impl TryFrom<RawGeometry> for HeaderGeometry {
    type Error = ConfigError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        HeaderGeometry::new(raw.header_height)
    }
}

impl From<HeaderGeometry> for RawGeometry {
    fn from(geometry: HeaderGeometry) -> Self {
        RawGeometry {
            header_height: geometry.header_height,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived style
// ─────────────────────────────────────────────────────────────────────────────

/// Per-frame header style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedHeaderStyle {
    /// Vertical translation of the header visual
    pub translate_y: f32,
    /// Uniform scale of the header visual, in `[1.0, 1.5]`
    pub scale: f32,
    /// Opacity of the dimming overlay, in `[0.0, 1.0]`
    pub overlay_opacity: f32,
}

impl DerivedHeaderStyle {
    /// Header transform: scale about the origin, then translate
    pub fn header_transform(&self) -> Affine2D {
        Affine2D::translation(0.0, self.translate_y).then(&Affine2D::scale(self.scale, self.scale))
    }
}

/// Compute the header style for a scroll offset
pub fn derive_style(offset: f32, geometry: &HeaderGeometry) -> DerivedHeaderStyle {
    DerivedHeaderStyle {
        translate_y: geometry.translate.eval(offset),
        scale: geometry.scale.eval(offset),
        overlay_opacity: geometry.overlay.eval(offset),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controller
// ─────────────────────────────────────────────────────────────────────────────

/// Parallax screen configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Header height in logical pixels
    pub header_height: f32,
    /// Padding around the content region
    pub content_padding: f32,
    /// Spacing between content children
    pub gap: f32,
    /// Render the dimming overlay above the header
    pub overlay: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            header_height: 250.0,
            content_padding: 32.0,
            gap: 16.0,
            overlay: true,
        }
    }
}

impl ParallaxConfig {
    pub fn new(header_height: f32) -> Self {
        Self {
            header_height,
            ..Default::default()
        }
    }

    /// Set the content padding
    pub fn content_padding(mut self, padding: f32) -> Self {
        self.content_padding = padding;
        self
    }

    /// Set the content gap
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Enable or disable the dimming overlay
    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }
}

/// Scroll view with a parallax header
pub struct ScrollHeaderController {
    config: ParallaxConfig,
    geometry: HeaderGeometry,
    header: Element,
    content: Element,
    header_background: Option<ColorOverrides>,
    offset: f32,
}

impl ScrollHeaderController {
    /// Create a controller with default layout settings
    pub fn new(header_height: f32, header: Element, content: Element) -> Result<Self, ConfigError> {
        Self::with_config(ParallaxConfig::new(header_height), header, content)
    }

    /// Create a controller from a full configuration
    pub fn with_config(
        config: ParallaxConfig,
        header: Element,
        content: Element,
    ) -> Result<Self, ConfigError> {
        let geometry = HeaderGeometry::new(config.header_height)?;
        tracing::debug!("parallax header created: height={}", config.header_height);
        Ok(Self {
            config,
            geometry,
            header,
            content,
            header_background: None,
            offset: 0.0,
        })
    }

    /// Per-scheme header background, resolved through the background role
    pub fn header_background(mut self, overrides: ColorOverrides) -> Self {
        self.header_background = Some(overrides);
        self
    }

    pub fn geometry(&self) -> &HeaderGeometry {
        &self.geometry
    }

    pub fn header_height(&self) -> f32 {
        self.geometry.header_height
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    /// Change the header height at runtime.
    ///
    /// On error the previous geometry stays in place.
    pub fn set_header_height(&mut self, header_height: f32) -> Result<(), ConfigError> {
        let geometry = HeaderGeometry::new(header_height)?;
        tracing::debug!(
            "parallax header height {} -> {}",
            self.geometry.header_height,
            header_height
        );
        self.geometry = geometry;
        self.config.header_height = header_height;
        Ok(())
    }

    /// Record a scroll offset sample. Non-finite samples are dropped.
    pub fn on_scroll(&mut self, offset: f32) {
        if !offset.is_finite() {
            tracing::warn!("ignoring non-finite scroll offset {}", offset);
            return;
        }
        self.offset = offset;
        tracing::trace!("parallax scroll offset={}", offset);
    }

    /// Latest scroll offset
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Style for the latest offset
    pub fn style(&self) -> DerivedHeaderStyle {
        derive_style(self.offset, &self.geometry)
    }
}

impl Widget for ScrollHeaderController {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event.event_type {
            event_types::SCROLL if event.targets(ROOT_KEY) => match event.scroll_offset_y() {
                Some(offset) => {
                    self.on_scroll(offset);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn render(&self, theme: &dyn ColorLookup) -> Element {
        let style = self.style();
        let h = self.geometry.header_height;
        let background = theme.color(ColorRole::Background, None);
        let header_bg = theme.color(ColorRole::Background, self.header_background.as_ref());

        let header = view()
            .key("parallax-header")
            .h(h)
            .clip()
            .bg(header_bg)
            .transform(style.header_transform())
            .child(self.header.clone());

        let content = view()
            .key("parallax-content")
            .padding(self.config.content_padding)
            .gap(self.config.gap)
            .bg(background)
            .child(self.content.clone());

        let mut root = view()
            .key(ROOT_KEY)
            .bg(background)
            .accessibility(Accessibility::new(AccessibilityRole::ScrollView, ""))
            .child(header)
            .child(content);

        if self.config.overlay {
            root = root.child(
                view()
                    .key("parallax-overlay")
                    .absolute()
                    .h(h)
                    .bg(theme.color(ColorRole::Overlay, None))
                    .opacity(style.overlay_opacity),
            );
        }

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::text;

    fn controller(h: f32) -> ScrollHeaderController {
        ScrollHeaderController::new(h, text("header"), text("content")).unwrap()
    }

    #[test]
    fn test_rest_style() {
        let c = controller(250.0);
        assert_eq!(
            c.style(),
            DerivedHeaderStyle {
                translate_y: 0.0,
                scale: 1.0,
                overlay_opacity: 1.0,
            }
        );
        assert!(c.style().header_transform().is_identity());
    }

    #[test]
    fn test_geometry_rejects_bad_heights() {
        for h in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(HeaderGeometry::new(h).is_err(), "height {h} accepted");
        }
    }

    #[test]
    fn test_geometry_rejects_height_too_small_to_halve() {
        let tiny = f32::from_bits(1);
        assert!(tiny > 0.0);
        assert_eq!(
            HeaderGeometry::new(tiny),
            Err(ConfigError::InvalidHeaderHeight(tiny))
        );
        assert!(HeaderGeometry::new(f32::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_scroll_aimed_elsewhere_is_ignored() {
        let mut c = controller(200.0);
        assert!(!c.handle_event(&Event::scroll(80.0).with_target("other-list")));
        assert_eq!(c.offset(), 0.0);
        assert!(c.handle_event(&Event::scroll(80.0).with_target("parallax")));
        assert_eq!(c.offset(), 80.0);
    }

    #[test]
    fn test_set_header_height_keeps_old_geometry_on_error() {
        let mut c = controller(200.0);
        assert!(c.set_header_height(-5.0).is_err());
        assert_eq!(c.header_height(), 200.0);

        c.set_header_height(400.0).unwrap();
        c.on_scroll(400.0);
        assert_eq!(c.style().translate_y, 300.0);
        assert_eq!(c.config().header_height, 400.0);
    }

    #[test]
    fn test_non_finite_scroll_ignored() {
        let mut c = controller(200.0);
        c.on_scroll(50.0);
        c.on_scroll(f32::NAN);
        assert_eq!(c.offset(), 50.0);
    }

    #[test]
    fn test_header_transform_composition() {
        let style = DerivedHeaderStyle {
            translate_y: -100.0,
            scale: 1.5,
            overlay_opacity: 1.0,
        };
        let t = style.header_transform();
        assert_eq!(t.translate_y(), -100.0);
        assert_eq!(t.scale_y(), 1.5);
    }
}
