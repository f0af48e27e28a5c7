//! Core state machine types.
//!
//! This module contains the pure core of the machine:
//! - State definitions via the `State` trait
//! - Transition descriptors and the name-keyed registry
//! - Immutable journal of applied transitions
//!
//! All logic in this module is pure (no side effects); the bus and the
//! command loop form the imperative shell around it.

mod history;
mod state;
mod transition;

pub use history::{TransitionLog, TransitionRecord};
pub use state::State;
pub use transition::{Registry, Transition};
