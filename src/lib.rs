//! Statebus: a state machine driven entirely by messages on a shared event bus.
//!
//! Every mutation and query - executing a transition, adding or removing one,
//! reading the state, registry, or history - is a command published on the
//! bus. The machine never applies a command inside the publishing call:
//! commands queue onto a single-consumer FIFO and are applied one at a time
//! by the machine's own task. Back-to-back publishes from one caller are
//! applied strictly in publish order, and no handler ever runs nested inside
//! another publish.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the [`State`] trait
//! - **Transitions**: named, directed edges between states, validated at
//!   construction and mutable over the bus afterwards
//! - **Outcomes**: protocol errors and query reports, published on broadcast
//!   channels that callers subscribe to before issuing commands
//!
//! # Example
//!
//! ```rust
//! use statebus::{State, StateMachineBuilder};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! enum Light {
//!     Red,
//!     Green,
//! }
//!
//! impl State for Light {
//!     fn name(&self) -> &str {
//!         match self {
//!             Self::Red => "red",
//!             Self::Green => "green",
//!         }
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bus = StateMachineBuilder::new()
//!     .initial(Light::Red)
//!     .transition("go", Light::Red, Light::Green)
//!     .spawn()
//!     .unwrap();
//!
//! let mut states = bus.subscribe_states();
//! bus.trigger("go");
//! bus.request_state();
//! assert_eq!(states.recv().await.unwrap(), Light::Green);
//! # }
//! ```

pub mod builder;
pub mod bus;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::bus::EventBus;
pub use crate::core::{Registry, State, Transition, TransitionLog, TransitionRecord};
pub use crate::machine::{ProtocolError, StateMachine};
