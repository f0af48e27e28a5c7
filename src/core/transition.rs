//! Transition descriptors and the name-keyed registry.
//!
//! The registry is the authoritative mapping of transition name to
//! (from, to) edge. Names are unique at all times and enumeration order
//! is registration order.

use super::state::State;
use serde::{Deserialize, Serialize};

/// A named, directed edge between two states.
///
/// `from == to` is permitted; the registry only enforces name uniqueness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// Unique name, also the command used to execute this transition.
    pub name: String,
    /// State the machine must be in for execution to succeed.
    pub from: S,
    /// State the machine moves to on success.
    pub to: S,
}

impl<S: State> Transition<S> {
    /// Create a transition descriptor.
    pub fn new(name: impl Into<String>, from: S, to: S) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }
}

/// Ordered, name-unique collection of transitions.
///
/// Construction-time registration and the add-transition command both go
/// through [`Registry::insert`], so the duplicate check is identical on
/// both paths.
#[derive(Clone, Debug, Default)]
pub struct Registry<S: State> {
    entries: Vec<Transition<S>>,
}

impl<S: State> Registry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look up a transition by name.
    pub fn get(&self, name: &str) -> Option<&Transition<S>> {
        self.entries.iter().find(|t| t.name == name)
    }

    /// Whether a transition with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Register a transition, preserving registration order.
    ///
    /// Returns `false` (and leaves the registry unchanged) if the name is
    /// already taken.
    pub fn insert(&mut self, transition: Transition<S>) -> bool {
        if self.contains(&transition.name) {
            return false;
        }
        self.entries.push(transition);
        true
    }

    /// Unregister a transition by name.
    ///
    /// Returns `false` if no transition with this name exists.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.name != name);
        self.entries.len() < before
    }

    /// Names of all registered transitions, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|t| t.name.clone()).collect()
    }

    /// Whether any registered transition references `state` as its
    /// from or to endpoint.
    pub fn reaches(&self, state: &S) -> bool {
        self.entries
            .iter()
            .any(|t| t.from == *state || t.to == *state)
    }

    /// Number of registered transitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
