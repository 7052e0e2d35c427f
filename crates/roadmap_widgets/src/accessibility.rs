//! Accessibility metadata attached to rendered elements

/// What assistive technology should announce an element as
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessibilityRole {
    #[default]
    None,
    Button,
    Header,
    Image,
    ScrollView,
}

/// Accessibility properties for one element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accessibility {
    pub role: AccessibilityRole,
    /// Spoken label
    pub label: String,
    /// Expanded/collapsed state for disclosure controls
    pub expanded: Option<bool>,
}

impl Accessibility {
    pub fn new(role: AccessibilityRole, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
            expanded: None,
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(AccessibilityRole::Button, label)
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }
}
