//! Core State trait for state machine states.
//!
//! All machine states implement this trait, which provides pure methods
//! for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are immutable values describing the current position of the
/// machine. The machine clones them into query reports and journal records,
/// so they should be cheap to clone.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into reports and journal records
/// - `PartialEq`: transition validation compares states for equality
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: reports and records are serializable
///
/// # Example
///
/// ```rust
/// use statebus::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TrafficLight {
///     Red,
///     Green,
///     Yellow,
/// }
///
/// impl State for TrafficLight {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "red",
///             Self::Green => "green",
///             Self::Yellow => "yellow",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display, logging, and error messages.
    ///
    /// Protocol errors quote this name verbatim, e.g.
    /// `expected state "red", got "yellow"`.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Red,
        Green,
        Yellow,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Red => "red",
                Self::Green => "green",
                Self::Yellow => "yellow",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Red.name(), "red");
        assert_eq!(TestState::Green.name(), "green");
        assert_eq!(TestState::Yellow.name(), "yellow");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Green;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Red, TestState::Red);
        assert_ne!(TestState::Red, TestState::Green);
    }
}
