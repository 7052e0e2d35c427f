//! Roadmap Theme System
//!
//! Semantic color roles resolved against a light/dark palette pair.
//!
//! # Quick Start
//!
//! ```rust
//! use roadmap_theme::{ColorLookup, ColorRole, ColorScheme, ThemeState};
//!
//! let theme = ThemeState::new(Default::default(), ColorScheme::Dark);
//! let border = theme.color(ColorRole::Border, None);
//! assert_eq!(border, theme.palette().get(ColorRole::Border));
//! ```
//!
//! # Resolution order
//!
//! A lookup for a role resolves, highest priority first:
//!
//! 1. the per-call [`ColorOverrides`] for the active scheme
//! 2. a runtime override set with [`ThemeState::set_color_override`]
//! 3. the active palette
//!
//! Components never reach for the global state themselves; they receive a
//! `&dyn ColorLookup` when rendering, so hosts and tests can inject any
//! implementation (closures included).

pub mod config;
pub mod error;
pub mod lookup;
pub mod palette;
pub mod state;
pub mod theme;
pub mod tokens;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use lookup::{ColorLookup, ColorOverrides};
pub use state::ThemeState;
pub use theme::{ColorScheme, ThemeBundle};
pub use tokens::*;
