//! Roadmap Core
//!
//! Foundational primitives shared by the Roadmap interaction components:
//!
//! - **State Machines**: small typed statecharts for widget interaction states
//! - **Events**: press and scroll events delivered by the host screen
//! - **Geometry**: points, colors and 2D affine transforms
//!
//! # Example
//!
//! ```rust
//! use roadmap_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Light { Off, On }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! struct Flip;
//!
//! let mut fsm = StateMachine::builder(Light::Off)
//!     .on(Light::Off, Flip, Light::On)
//!     .on(Light::On, Flip, Light::Off)
//!     .build();
//!
//! assert_eq!(fsm.send(Flip), Light::On);
//! assert_eq!(fsm.send(Flip), Light::Off);
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use error::ConfigError;
pub use events::{Event, EventData, EventType};
pub use fsm::{StateMachine, StateMachineBuilder};
pub use geometry::{Affine2D, Color, Point};
