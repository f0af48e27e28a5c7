//! The state machine core: a single task draining the command FIFO.
//!
//! Every command published on the bus lands here and is applied one at a
//! time, strictly in delivery order. A handler never runs inside a
//! publisher's call stack, so publishing can never re-enter the machine
//! mid-mutation, and a burst of back-to-back publishes from one caller is
//! applied in publish order.

pub mod error;

pub use error::ProtocolError;

use crate::bus::{Command, EventBus, OutcomePorts};
use crate::builder::BuildError;
use crate::core::{Registry, State, Transition, TransitionLog, TransitionRecord};
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// The machine core. Owns the current state, the registry, and the journal;
/// nothing outside the command loop ever touches them.
pub struct StateMachine<S: State + 'static> {
    state: S,
    registry: Registry<S>,
    log: TransitionLog<S>,
    outcomes: OutcomePorts<S>,
}

impl<S: State + 'static> StateMachine<S> {
    /// Validate, wire a machine onto a bus, and spawn its command loop.
    ///
    /// Validation is synchronous and fail-fast: a duplicate transition name
    /// or an initial state referenced by no transition aborts construction
    /// before anything is wired, leaving a supplied bus unclaimed.
    ///
    /// A missing bus, or one whose intake another machine already claimed,
    /// is replaced with a fresh bus - never an error. Returns the bus handle
    /// the machine actually listens on.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        bus: Option<EventBus<S>>,
        initial: S,
        transitions: Vec<Transition<S>>,
    ) -> Result<EventBus<S>, BuildError> {
        let mut registry = Registry::new();
        for transition in transitions {
            let name = transition.name.clone();
            if !registry.insert(transition) {
                return Err(BuildError::DuplicateTransition { name });
            }
        }
        if !registry.reaches(&initial) {
            return Err(BuildError::UnknownInitialState {
                state: initial.name().to_string(),
            });
        }

        let (bus, intake) = adopt(bus);
        debug!(
            state = initial.name(),
            transitions = registry.len(),
            "state machine attached to bus"
        );
        let machine = Self {
            state: initial,
            registry,
            log: TransitionLog::new(),
            outcomes: bus.outcome_ports(),
        };
        tokio::spawn(machine.run(intake));
        Ok(bus)
    }

    /// Drain the intake until every bus handle is gone.
    async fn run(mut self, mut intake: mpsc::UnboundedReceiver<Command<S>>) {
        while let Some(command) = intake.recv().await {
            self.apply(command);
        }
        trace!("all bus handles dropped; command loop stopped");
    }

    fn apply(&mut self, command: Command<S>) {
        match command {
            Command::Trigger(name) => self.apply_trigger(&name),
            Command::Add(transition) => self.apply_add(transition),
            Command::Remove(name) => self.apply_remove(&name),
            Command::QueryState => {
                let _ = self.outcomes.states.send(self.state.clone());
            }
            Command::QueryRegistry => {
                let _ = self.outcomes.registry.send(self.registry.names());
            }
            Command::QueryHistory => {
                let _ = self.outcomes.history.send(self.log.records().to_vec());
            }
        }
    }

    fn apply_trigger(&mut self, name: &str) {
        let Some(transition) = self.registry.get(name).cloned() else {
            // An unknown name is dropped without a diagnostic, like a bus
            // channel with no listener. Callers must not read silence as
            // success.
            debug!(name, "ignoring trigger for unregistered transition");
            return;
        };
        if self.state != transition.from {
            let _ = self.outcomes.errors.send(ProtocolError::WrongState {
                current: self.state.name().to_string(),
                requested: transition.from.name().to_string(),
            });
            return;
        }
        self.state = transition.to.clone();
        self.log = self.log.record(TransitionRecord {
            name: name.to_string(),
            from: transition.from,
            to: transition.to,
            timestamp: Utc::now(),
        });
        trace!(transition = name, state = self.state.name(), "transition applied");
    }

    fn apply_add(&mut self, transition: Transition<S>) {
        let name = transition.name.clone();
        if !self.registry.insert(transition) {
            let _ = self
                .outcomes
                .errors
                .send(ProtocolError::AlreadyRegistered { name });
            return;
        }
        trace!(transition = name.as_str(), "transition registered");
    }

    fn apply_remove(&mut self, name: &str) {
        if !self.registry.remove(name) {
            let _ = self.outcomes.errors.send(ProtocolError::UnknownChange {
                name: name.to_string(),
            });
            return;
        }
        trace!(transition = name, "transition removed");
    }
}

/// Use the supplied bus if its intake is still vacant; otherwise create a
/// fresh one.
fn adopt<S: State>(
    bus: Option<EventBus<S>>,
) -> (EventBus<S>, mpsc::UnboundedReceiver<Command<S>>) {
    if let Some(bus) = bus {
        if let Some(intake) = bus.claim_intake() {
            return (bus, intake);
        }
        debug!("supplied bus already has a machine attached; using a fresh one");
    }
    EventBus::with_intake()
}
