//! Construction errors.

use thiserror::Error;

/// Errors that abort machine construction.
///
/// Construction is fail-fast and synchronous: on error no command loop is
/// started and a supplied bus is left unclaimed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Two transitions in the input share a name.
    #[error("change \"{name}\" already registered")]
    DuplicateTransition { name: String },

    /// The initial state matches no supplied transition's from or to state.
    #[error("unexpected initial state: \"{state}\"")]
    UnknownInitialState { state: String },

    /// Builder misuse: `.initial()` was never called.
    #[error("initial state not specified. Call .initial(state) before .spawn()")]
    MissingInitialState,
}
