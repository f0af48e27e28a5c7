//! Builder API for wiring state machines onto a bus.
//!
//! This module provides a fluent builder and the `state_enum!` macro for
//! creating bus-driven machines with minimal boilerplate.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::bus::EventBus;
use crate::core::{State, Transition};
use crate::machine::StateMachine;

/// Fluent construction of a bus-driven state machine.
///
/// `spawn` validates the transition set, attaches the machine to a bus
/// (supplied via [`StateMachineBuilder::on_bus`], or fresh), starts the
/// command loop, and returns the bus handle.
///
/// # Example
///
/// ```
/// use statebus::builder::StateMachineBuilder;
/// use statebus::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let bus = StateMachineBuilder::new()
///     .initial(Light::Red)
///     .transition("go", Light::Red, Light::Green)
///     .spawn()
///     .unwrap();
///
/// let mut states = bus.subscribe_states();
/// bus.trigger("go");
/// bus.request_state();
/// assert_eq!(states.recv().await.unwrap(), Light::Green);
/// # }
/// ```
pub struct StateMachineBuilder<S: State + 'static> {
    bus: Option<EventBus<S>>,
    initial: Option<S>,
    transitions: Vec<Transition<S>>,
}

impl<S: State + 'static> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            bus: None,
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Attach the machine to an existing bus instead of a fresh one.
    ///
    /// A bus that already carries a machine is silently replaced with a
    /// fresh one at spawn time.
    pub fn on_bus(mut self, bus: EventBus<S>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition by name and endpoints.
    pub fn transition(mut self, name: impl Into<String>, from: S, to: S) -> Self {
        self.transitions.push(Transition::new(name, from, to));
        self
    }

    /// Add a pre-built transition descriptor.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Validate, start the command loop, and return the wired bus handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> Result<EventBus<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        StateMachine::spawn(self.bus, initial, self.transitions)
    }
}

impl<S: State + 'static> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
