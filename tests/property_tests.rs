//! Property-based tests for construction validation and the registry.
//!
//! These use proptest to verify the fail-fast construction contract across
//! many randomly generated transition sets.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use statebus::{BuildError, Registry, State, StateMachine, Transition};

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

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> TestState {
        match variant {
            0 => TestState::Red,
            1 => TestState::Green,
            _ => TestState::Yellow,
        }
    }
}

/// Transition sets with unique names and arbitrary endpoints.
fn arbitrary_transitions(max: usize) -> impl Strategy<Value = Vec<Transition<TestState>>> {
    proptest::collection::hash_set("[a-z]{2,6}", 1..max)
        .prop_flat_map(|names| {
            let names: Vec<String> = names.into_iter().collect();
            let endpoints =
                proptest::collection::vec((arbitrary_state(), arbitrary_state()), names.len());
            (Just(names), endpoints)
        })
        .prop_map(|(names, endpoints)| {
            names
                .into_iter()
                .zip(endpoints)
                .map(|(name, (from, to))| Transition::new(name, from, to))
                .collect()
        })
}

proptest! {
    #[test]
    fn construction_succeeds_when_initial_state_is_reachable(
        transitions in arbitrary_transitions(6)
    ) {
        // Any transition endpoint is a valid initial state.
        let initial = transitions[0].from.clone();

        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        let _guard = rt.enter();

        let result = StateMachine::spawn(None, initial, transitions);
        prop_assert!(result.is_ok());
    }

    #[test]
    fn duplicate_name_always_aborts_construction(
        transitions in arbitrary_transitions(6),
        from in arbitrary_state(),
        to in arbitrary_state(),
    ) {
        let duplicated = transitions[0].name.clone();
        let mut transitions = transitions;
        transitions.push(Transition::new(duplicated.clone(), from, to));

        let result = StateMachine::spawn(None, TestState::Red, transitions);
        prop_assert_eq!(
            result.err(),
            Some(BuildError::DuplicateTransition { name: duplicated })
        );
    }

    #[test]
    fn unreachable_initial_state_always_aborts_construction(
        names in proptest::collection::hash_set("[a-z]{2,6}", 1..6)
    ) {
        // Every transition stays inside {red, green}; yellow is unreachable.
        let transitions: Vec<Transition<TestState>> = names
            .into_iter()
            .map(|name| Transition::new(name, TestState::Red, TestState::Green))
            .collect();

        let result = StateMachine::spawn(None, TestState::Yellow, transitions);
        prop_assert_eq!(
            result.err(),
            Some(BuildError::UnknownInitialState { state: "yellow".to_string() })
        );
    }

    #[test]
    fn registry_enumerates_in_registration_order(
        transitions in arbitrary_transitions(8)
    ) {
        let mut registry = Registry::new();
        for transition in &transitions {
            prop_assert!(registry.insert(transition.clone()));
        }

        let expected: Vec<String> = transitions.iter().map(|t| t.name.clone()).collect();
        prop_assert_eq!(registry.names(), expected);
    }

    #[test]
    fn registry_remove_preserves_relative_order(
        transitions in arbitrary_transitions(8)
    ) {
        let mut registry = Registry::new();
        for transition in &transitions {
            registry.insert(transition.clone());
        }

        let victim = transitions[0].name.clone();
        prop_assert!(registry.remove(&victim));

        let expected: Vec<String> = transitions
            .iter()
            .skip(1)
            .map(|t| t.name.clone())
            .collect();
        prop_assert_eq!(registry.names(), expected);
    }

    #[test]
    fn build_error_messages_quote_the_offender(name in "[a-z]{2,6}") {
        let quoted = format!("\"{name}\"");

        let dup = BuildError::DuplicateTransition { name: name.clone() };
        prop_assert!(dup.to_string().contains(&quoted));
        prop_assert!(dup.to_string().contains("already registered"));

        let init = BuildError::UnknownInitialState { state: name.clone() };
        prop_assert!(init.to_string().contains("unexpected initial state"));
        prop_assert!(init.to_string().contains(&quoted));
    }
}
