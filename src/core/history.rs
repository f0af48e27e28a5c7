//! In-memory journal of applied transitions.
//!
//! Every successful transition execution is recorded with a timestamp.
//! The journal is queryable over the bus like state and registry, and is
//! never persisted.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single applied transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// Name of the transition that was executed
    pub name: String,
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of applied transitions.
///
/// The journal is immutable - [`TransitionLog::record`] returns a new
/// journal with the record appended.
///
/// # Example
///
/// ```rust
/// use statebus::core::{State, TransitionLog, TransitionRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase { One, Two }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "one",
///             Self::Two => "two",
///         }
///     }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     name: "advance".into(),
///     from: Phase::One,
///     to: Phase::Two,
///     timestamp: Utc::now(),
/// });
/// assert_eq!(log.records().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new journal.
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in application order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// The most recently applied transition, if any.
    pub fn last(&self) -> Option<&TransitionRecord<S>> {
        self.records.last()
    }

    /// Number of applied transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no transition has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
