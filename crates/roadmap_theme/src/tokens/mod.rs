//! Design tokens for theming
//!
//! Only colors are tokenised; spacing and typography belong to the host
//! screens.

mod color;

pub use color::*;
