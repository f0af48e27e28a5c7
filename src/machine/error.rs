//! Protocol errors published on the bus error channel.

use thiserror::Error;

/// Recoverable protocol failures.
///
/// These are never returned from publish calls and never panic; they are
/// observable only by subscribing to the error channel before publishing
/// the command that fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// A transition was executed while the machine was not in its
    /// from-state.
    #[error("expected state \"{current}\", got \"{requested}\"")]
    WrongState {
        /// The machine's current state name
        current: String,
        /// The executed transition's from-state name
        requested: String,
    },

    /// Add-transition named a transition that is already registered.
    #[error("change \"{name}\" already registered")]
    AlreadyRegistered { name: String },

    /// Remove-transition named a transition that is not registered.
    #[error("unexpected change: \"{name}\"")]
    UnknownChange { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_state_message_quotes_both_states() {
        let err = ProtocolError::WrongState {
            current: "yellow".into(),
            requested: "red".into(),
        };
        assert_eq!(err.to_string(), "expected state \"yellow\", got \"red\"");
    }

    #[test]
    fn already_registered_message_names_the_change() {
        let err = ProtocolError::AlreadyRegistered { name: "go".into() };
        assert_eq!(err.to_string(), "change \"go\" already registered");
    }

    #[test]
    fn unknown_change_message_names_the_change() {
        let err = ProtocolError::UnknownChange { name: "warp".into() };
        assert_eq!(err.to_string(), "unexpected change: \"warp\"");
    }
}
