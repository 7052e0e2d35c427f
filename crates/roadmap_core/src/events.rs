//! Interaction events
//!
//! Events are delivered one at a time by the host event loop, in arrival
//! order. Components consume them synchronously through `&mut self`.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Tap released over the target
    pub const PRESS: EventType = 1;

    /// Scroll position changed
    pub const SCROLL: EventType = 30;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    /// Key of the element that was hit, `None` when addressed to the
    /// component as a whole
    pub target: Option<String>,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Press {
        x: f32,
        y: f32,
    },
    /// Absolute content offset of the scrolling surface.
    ///
    /// Positive `offset_y` means the content moved up (scrolled down);
    /// negative values are overscroll past the top edge.
    Scroll {
        offset_x: f32,
        offset_y: f32,
    },
    None,
}

impl Event {
    /// Create an event of the given type with no payload
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            target: None,
            data: EventData::None,
        }
    }

    /// Create a vertical scroll event carrying an absolute offset
    pub fn scroll(offset_y: f32) -> Self {
        Self {
            data: EventData::Scroll {
                offset_x: 0.0,
                offset_y,
            },
            ..Self::new(event_types::SCROLL)
        }
    }

    /// Create a press event at the given local position
    pub fn press(x: f32, y: f32) -> Self {
        Self {
            data: EventData::Press { x, y },
            ..Self::new(event_types::PRESS)
        }
    }

    /// Set the key of the element that was hit
    pub fn with_target(mut self, key: impl Into<String>) -> Self {
        self.target = Some(key.into());
        self
    }

    /// Whether this event is addressed to `key`, or to the whole component
    pub fn targets(&self, key: &str) -> bool {
        self.target.as_deref().map_or(true, |target| target == key)
    }

    /// Vertical scroll offset, if this is a scroll event
    pub fn scroll_offset_y(&self) -> Option<f32> {
        match self.data {
            EventData::Scroll { offset_y, .. } if self.event_type == event_types::SCROLL => {
                Some(offset_y)
            }
            _ => None,
        }
    }
}
