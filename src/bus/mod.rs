//! The shared event bus.
//!
//! The bus is the only way in and out of a machine: commands go in through a
//! single-consumer FIFO intake, outcomes come back out on broadcast channels
//! (errors, state reports, registry reports, history reports).
//!
//! Publishing never applies a command synchronously - it only enqueues it.
//! The machine's own task drains the intake one command at a time, which is
//! what gives the protocol its FIFO ordering and non-reentrancy guarantees.
//!
//! Outcome channels have at-most-once fan-out: only receivers subscribed at
//! publish time see an outcome, and a lagged receiver observes a lag error
//! rather than a replay.

use crate::core::{State, Transition, TransitionRecord};
use crate::machine::ProtocolError;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc};

/// Commands routed through the bus to the machine's command loop.
#[derive(Debug)]
pub(crate) enum Command<S: State> {
    Trigger(String),
    Add(Transition<S>),
    Remove(String),
    QueryState,
    QueryRegistry,
    QueryHistory,
}

/// Buffered outcomes per broadcast channel before slow receivers lag.
const OUTCOME_CAPACITY: usize = 64;

/// Broadcast senders for every outcome channel.
///
/// The machine keeps a clone of these (and only these), so an idle machine
/// whose last external bus handle is dropped also loses its command sender
/// and its loop terminates.
pub(crate) struct OutcomePorts<S: State> {
    pub(crate) errors: broadcast::Sender<ProtocolError>,
    pub(crate) states: broadcast::Sender<S>,
    pub(crate) registry: broadcast::Sender<Vec<String>>,
    pub(crate) history: broadcast::Sender<Vec<TransitionRecord<S>>>,
}

impl<S: State> OutcomePorts<S> {
    fn new() -> Self {
        Self {
            errors: broadcast::channel(OUTCOME_CAPACITY).0,
            states: broadcast::channel(OUTCOME_CAPACITY).0,
            registry: broadcast::channel(OUTCOME_CAPACITY).0,
            history: broadcast::channel(OUTCOME_CAPACITY).0,
        }
    }
}

impl<S: State> Clone for OutcomePorts<S> {
    fn clone(&self) -> Self {
        Self {
            errors: self.errors.clone(),
            states: self.states.clone(),
            registry: self.registry.clone(),
            history: self.history.clone(),
        }
    }
}

/// Handle to the shared bus.
///
/// Cloning the handle shares the underlying channels; any clone may publish
/// commands or subscribe to outcomes. Exactly one machine can attach to a
/// bus: attaching claims the intake receiver, and a bus whose intake is
/// already claimed counts as invalid when supplied to a new machine.
pub struct EventBus<S: State> {
    commands: mpsc::UnboundedSender<Command<S>>,
    intake: Arc<Mutex<Option<mpsc::UnboundedReceiver<Command<S>>>>>,
    outcomes: OutcomePorts<S>,
}

impl<S: State> EventBus<S> {
    /// Create a bus with an unclaimed intake, ready to be supplied to a
    /// machine at construction.
    pub fn new() -> Self {
        let (commands, intake) = mpsc::unbounded_channel();
        Self {
            commands,
            intake: Arc::new(Mutex::new(Some(intake))),
            outcomes: OutcomePorts::new(),
        }
    }

    /// Create a bus handing the intake receiver straight to the caller.
    pub(crate) fn with_intake() -> (Self, mpsc::UnboundedReceiver<Command<S>>) {
        let (commands, intake) = mpsc::unbounded_channel();
        let bus = Self {
            commands,
            intake: Arc::new(Mutex::new(None)),
            outcomes: OutcomePorts::new(),
        };
        (bus, intake)
    }

    /// Hand the command intake to a machine.
    ///
    /// Returns `None` if another machine already claimed it.
    pub(crate) fn claim_intake(&self) -> Option<mpsc::UnboundedReceiver<Command<S>>> {
        self.intake.lock().ok()?.take()
    }

    pub(crate) fn outcome_ports(&self) -> OutcomePorts<S> {
        self.outcomes.clone()
    }

    fn publish(&self, command: Command<S>) {
        // Fire-and-forget: with no machine attached the command is dropped,
        // like a pub-sub channel with no listener.
        if self.commands.send(command).is_err() {
            tracing::debug!("command dropped: no machine attached to this bus");
        }
    }

    /// Request execution of the named transition.
    pub fn trigger(&self, name: impl Into<String>) {
        self.publish(Command::Trigger(name.into()));
    }

    /// Request registration of a new transition.
    pub fn add_transition(&self, transition: Transition<S>) {
        self.publish(Command::Add(transition));
    }

    /// Request removal of the named transition.
    pub fn remove_transition(&self, name: impl Into<String>) {
        self.publish(Command::Remove(name.into()));
    }

    /// Request a report of the current state on the state channel.
    pub fn request_state(&self) {
        self.publish(Command::QueryState);
    }

    /// Request a report of registered transition names, in registration
    /// order, on the registry channel.
    pub fn request_registry(&self) {
        self.publish(Command::QueryRegistry);
    }

    /// Request a report of applied transitions on the history channel.
    pub fn request_history(&self) {
        self.publish(Command::QueryHistory);
    }

    /// Subscribe to protocol errors.
    ///
    /// Subscribe before publishing the command whose failure you want to
    /// observe; outcomes are not replayed.
    pub fn subscribe_errors(&self) -> broadcast::Receiver<ProtocolError> {
        self.outcomes.errors.subscribe()
    }

    /// Subscribe to state reports (responses to [`EventBus::request_state`]).
    pub fn subscribe_states(&self) -> broadcast::Receiver<S> {
        self.outcomes.states.subscribe()
    }

    /// Subscribe to registry reports (responses to
    /// [`EventBus::request_registry`]).
    pub fn subscribe_registry(&self) -> broadcast::Receiver<Vec<String>> {
        self.outcomes.registry.subscribe()
    }

    /// Subscribe to history reports (responses to
    /// [`EventBus::request_history`]).
    pub fn subscribe_history(&self) -> broadcast::Receiver<Vec<TransitionRecord<S>>> {
        self.outcomes.history.subscribe()
    }
}

impl<S: State> Default for EventBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Clone for EventBus<S> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
            intake: Arc::clone(&self.intake),
            outcomes: self.outcomes.clone(),
        }
    }
}
