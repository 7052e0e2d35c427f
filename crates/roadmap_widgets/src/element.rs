//! Rendered element tree
//!
//! Widgets describe their output as a tree of [`Element`]s: plain data that
//! the host renderer maps onto native views. Building an element is cheap
//! and side-effect free, except for caller-supplied content builders, which
//! run exactly when a widget decides to mount that content.
//!
//! ```rust
//! use roadmap_widgets::{text, view};
//!
//! let card = view()
//!     .key("card")
//!     .padding(16.0)
//!     .child(text("National ID").semibold())
//!     .child(text("Bring two proofs of identity"));
//!
//! assert_eq!(card.texts(), vec!["National ID", "Bring two proofs of identity"]);
//! ```

use roadmap_core::{Affine2D, Color};
use std::sync::Arc;

use crate::accessibility::Accessibility;

/// Content builder supplied by the host (cloneable via Arc)
pub type ContentFn = Arc<dyn Fn() -> Element + Send + Sync>;

/// Element kind
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    /// Container
    View,
    Text(String),
    /// Named symbol from the host's icon set
    Icon { name: String, size: f32 },
    /// Image by asset name or URI
    Image { source: String },
}

/// Main-axis direction of a container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Column,
    Row,
}

/// How an element is placed relative to its parent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// In flow with siblings
    #[default]
    Relative,
    /// Over the parent's top-left corner, out of flow
    Absolute,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    SemiBold,
}

/// Visual and layout properties
#[derive(Clone, Debug, PartialEq)]
pub struct ElementStyle {
    pub transform: Affine2D,
    pub opacity: f32,
    pub background: Option<Color>,
    /// Text and icon color
    pub foreground: Option<Color>,
    /// Border width and color
    pub border: Option<(f32, Color)>,
    pub height: Option<f32>,
    pub padding: f32,
    pub margin_top: f32,
    pub margin_left: f32,
    pub gap: f32,
    pub direction: Direction,
    pub position: Position,
    /// Clip children to this element's bounds
    pub clip: bool,
    pub font_weight: FontWeight,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            transform: Affine2D::IDENTITY,
            opacity: 1.0,
            background: None,
            foreground: None,
            border: None,
            height: None,
            padding: 0.0,
            margin_top: 0.0,
            margin_left: 0.0,
            gap: 0.0,
            direction: Direction::Column,
            position: Position::Relative,
            clip: false,
            font_weight: FontWeight::Regular,
        }
    }
}

/// A node in the rendered tree
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    /// Stable identity used by the renderer to match nodes across frames
    pub key: Option<String>,
    pub style: ElementStyle,
    pub accessibility: Option<Accessibility>,
    pub children: Vec<Element>,
}

/// Create a container element
pub fn view() -> Element {
    Element::new(ElementKind::View)
}

/// Create a text element
pub fn text(content: impl Into<String>) -> Element {
    Element::new(ElementKind::Text(content.into()))
}

/// Create an icon element
pub fn icon(name: impl Into<String>, size: f32) -> Element {
    Element::new(ElementKind::Icon {
        name: name.into(),
        size,
    })
}

/// Create an image element
pub fn image(source: impl Into<String>) -> Element {
    Element::new(ElementKind::Image {
        source: source.into(),
    })
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            key: None,
            style: ElementStyle::default(),
            accessibility: None,
            children: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn transform(mut self, transform: Affine2D) -> Self {
        self.style.transform = transform;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = opacity;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.foreground = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.style.border = Some((width, color));
        self
    }

    pub fn h(mut self, height: f32) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn mt(mut self, margin: f32) -> Self {
        self.style.margin_top = margin;
        self
    }

    pub fn ml(mut self, margin: f32) -> Self {
        self.style.margin_left = margin;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.style.gap = gap;
        self
    }

    pub fn row(mut self) -> Self {
        self.style.direction = Direction::Row;
        self
    }

    pub fn absolute(mut self) -> Self {
        self.style.position = Position::Absolute;
        self
    }

    pub fn clip(mut self) -> Self {
        self.style.clip = true;
        self
    }

    pub fn semibold(mut self) -> Self {
        self.style.font_weight = FontWeight::SemiBold;
        self
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    // ========== Queries ==========

    /// Depth-first search for the element with `key`
    pub fn find(&self, key: &str) -> Option<&Element> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// All text content in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let ElementKind::Text(content) = &self.kind {
            out.push(content);
        }
        for child in &self.children {
            child.collect_texts(out);
        }
    }

    /// Number of elements in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Element::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        view()
            .key("root")
            .child(text("Driver's License").key("title"))
            .child(
                view()
                    .key("body")
                    .child(icon("chevron.right", 18.0))
                    .child(text("Renew every 5 years")),
            )
    }

    #[test]
    fn test_find_by_key() {
        let tree = sample();
        assert!(tree.contains_key("body"));
        assert_eq!(
            tree.find("title").map(|e| &e.kind),
            Some(&ElementKind::Text("Driver's License".into()))
        );
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_texts_in_document_order() {
        assert_eq!(
            sample().texts(),
            vec!["Driver's License", "Renew every 5 years"]
        );
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample().node_count(), 5);
        assert_eq!(image("passport.png").node_count(), 1);
    }

    #[test]
    fn test_style_builders() {
        let e = view()
            .row()
            .gap(6.0)
            .absolute()
            .clip()
            .opacity(0.5)
            .h(120.0)
            .ml(24.0)
            .border(1.0, Color::BLACK);
        assert_eq!(e.style.direction, Direction::Row);
        assert_eq!(e.style.position, Position::Absolute);
        assert!(e.style.clip);
        assert_eq!(e.style.opacity, 0.5);
        assert_eq!(e.style.height, Some(120.0));
        assert_eq!(e.style.margin_left, 24.0);
        assert_eq!(e.style.border, Some((1.0, Color::BLACK)));
    }
}
