//! State Machine Runtime
//!
//! Small flat state machines for widget interaction states, typed over the
//! caller's own state and event enums. Transitions live in a lookup table
//! keyed by `(state, event)`; a machine holds nothing else besides its
//! current state, so driving it never grows its memory.
//!
//! Each machine is owned by the widget that drives it. There is no shared
//! registry; dropping the widget drops its machine.

use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: FxHashMap<(S, E), S>,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: FxHashMap::default(),
        }
    }

    /// Add a transition (from, event, to).
    ///
    /// A later transition for the same `(from, event)` replaces the earlier
    /// one.
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        if let Some(previous) = self.transitions.insert((from, event), to) {
            tracing::warn!(
                "fsm: {:?} --{:?}--> {:?} replaced by {:?}",
                from,
                event,
                previous,
                to
            );
        }
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: FxHashMap<(S, E), S>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Send an event to the state machine, potentially triggering a transition.
    ///
    /// Returns the state after the event. Events with no matching transition
    /// leave the machine untouched.
    pub fn send(&mut self, event: E) -> S {
        let current = self.current_state;

        let Some(&to_state) = self.transitions.get(&(current, event)) else {
            tracing::trace!("fsm: {:?} ignored in {:?}", event, current);
            return current;
        };

        self.current_state = to_state;
        tracing::trace!("fsm: {:?} --{:?}--> {:?}", current, event, to_state);
        to_state
    }
}
