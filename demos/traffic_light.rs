//! Traffic Light over the Event Bus
//!
//! This example demonstrates the full command protocol:
//! - Querying state and registry through the bus
//! - Executing transitions and observing the new state
//! - Protocol errors for wrong-state execution
//! - The transition journal
//!
//! Run with: cargo run --example traffic_light

use serde::{Deserialize, Serialize};
use statebus::{State, StateMachineBuilder};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum Light {
    Red,
    Green,
    Yellow,
}

impl State for Light {
    fn name(&self) -> &str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bus = StateMachineBuilder::new()
        .initial(Light::Red)
        .transition("go", Light::Red, Light::Green)
        .transition("slow", Light::Green, Light::Yellow)
        .transition("stop", Light::Yellow, Light::Red)
        .spawn()
        .expect("traffic light transition set is valid");

    let mut states = bus.subscribe_states();
    let mut errors = bus.subscribe_errors();
    let mut registry = bus.subscribe_registry();
    let mut history = bus.subscribe_history();

    println!("=== Traffic Light over the Event Bus ===\n");

    bus.request_registry();
    println!("registered transitions: {:?}", registry.recv().await.unwrap());

    bus.request_state();
    println!("initial state: {}\n", states.recv().await.unwrap().name());

    for name in ["go", "slow", "stop"] {
        bus.trigger(name);
        bus.request_state();
        println!("after {name:>4}: {}", states.recv().await.unwrap().name());
    }

    // Wrong state on purpose: stop expects yellow, but we are back at red.
    bus.trigger("stop");
    println!("\nprotocol error: {}", errors.recv().await.unwrap());

    bus.request_history();
    let journal = history.recv().await.unwrap();
    println!(
        "\njournal:\n{}",
        serde_json::to_string_pretty(&journal).unwrap()
    );

    println!("\n=== Example Complete ===");
}
