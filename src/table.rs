//! This module provides the `TransitionTable`, the immutable-after-construction mapping from
//! (state, input symbol) pairs to transitions.
//!
//! States are kept in insertion order and addressed by index; names are resolved once when a
//! transition is added, so lookups during execution never touch strings.

use crate::types::{Action, StateRole, Symbol, Transition, TuringMachineError};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A named state and its accepting flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub accepting: bool,
}

/// The states of a machine and the transitions between them.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    states: Vec<State>,
    index: HashMap<String, usize>,
    transitions: HashMap<(usize, Symbol), Transition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new state.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` with the index of the new state.
    /// * `Err(TuringMachineError::DuplicateState)` if the name is already taken.
    pub fn add_state(&mut self, name: &str, accepting: bool) -> Result<usize, TuringMachineError> {
        match self.index.entry(name.to_string()) {
            Entry::Occupied(_) => Err(TuringMachineError::DuplicateState(name.to_string())),
            Entry::Vacant(e) => {
                let id = self.states.len();
                self.states.push(State {
                    name: name.to_string(),
                    accepting,
                });
                e.insert(id);
                Ok(id)
            }
        }
    }

    /// Adds the transition taken when state `from` reads `read`.
    ///
    /// Both endpoints must already exist and the (state, symbol) pair must be free; on any
    /// error the table is left untouched.
    pub fn add_transition(
        &mut self,
        from: &str,
        read: Symbol,
        write: Symbol,
        action: Action,
        to: &str,
    ) -> Result<(), TuringMachineError> {
        let source = self.resolve(from, StateRole::Source)?;
        let next_state = self.resolve(to, StateRole::Destination)?;

        match self.transitions.entry((source, read)) {
            Entry::Occupied(_) => Err(TuringMachineError::DuplicateTransition(
                from.to_string(),
                read,
            )),
            Entry::Vacant(e) => {
                e.insert(Transition {
                    write,
                    action,
                    next_state,
                });
                Ok(())
            }
        }
    }

    /// Resolves a state name to its index, reporting `role` if it is unknown.
    pub fn resolve(&self, name: &str, role: StateRole) -> Result<usize, TuringMachineError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| TuringMachineError::UnknownState {
                role,
                name: name.to_string(),
            })
    }

    /// Looks up the transition for `state` reading `symbol`.
    pub fn transition(&self, state: usize, symbol: Symbol) -> Option<&Transition> {
        self.transitions.get(&(state, symbol))
    }

    pub fn state(&self, id: usize) -> Option<&State> {
        self.states.get(id)
    }

    /// Iterates over states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_table() -> TransitionTable {
        let mut table = TransitionTable::new();
        table.add_state("q0", false).unwrap();
        table.add_state("q1", true).unwrap();
        table
    }

    #[test]
    fn test_add_state_assigns_indices() {
        let table = create_table();

        assert_eq!(table.state_count(), 2);
        assert_eq!(table.resolve("q1", StateRole::Source), Ok(1));
        assert!(table.state(1).unwrap().accepting);
    }

    #[test]
    fn test_add_duplicate_state() {
        let mut table = create_table();

        let result = table.add_state("q0", true);

        assert_eq!(
            result,
            Err(TuringMachineError::DuplicateState("q0".to_string()))
        );
        assert_eq!(table.state_count(), 2);
        assert!(!table.state(0).unwrap().accepting);
    }

    #[test]
    fn test_empty_name_is_an_ordinary_state() {
        let mut table = TransitionTable::new();

        assert_eq!(table.add_state("", true), Ok(0));
        assert_eq!(
            table.add_state("", false),
            Err(TuringMachineError::DuplicateState(String::new()))
        );
        table.add_transition("", 'a', 'a', Action::Halt, "").unwrap();

        assert_eq!(table.resolve("", StateRole::Initial), Ok(0));
        assert_eq!(table.transition(0, 'a').unwrap().next_state, 0);
    }

    #[test]
    fn test_states_in_insertion_order() {
        let mut table = create_table();
        table.add_state("a", false).unwrap();

        let names: Vec<&str> = table.states().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["q0", "q1", "a"]);

        let accepting: Vec<bool> = table.states().map(|s| s.accepting).collect();
        assert_eq!(accepting, vec![false, true, false]);
    }

    #[test]
    fn test_add_transition_unknown_endpoints() {
        let mut table = create_table();

        let missing_source = table.add_transition("x", 'a', 'b', Action::Right, "q1");
        assert_eq!(
            missing_source,
            Err(TuringMachineError::UnknownState {
                role: StateRole::Source,
                name: "x".to_string(),
            })
        );

        let missing_destination = table.add_transition("q0", 'a', 'b', Action::Right, "y");
        assert_eq!(
            missing_destination,
            Err(TuringMachineError::UnknownState {
                role: StateRole::Destination,
                name: "y".to_string(),
            })
        );

        assert_eq!(table.transition_count(), 0);
    }

    #[test]
    fn test_add_duplicate_transition_keeps_original() {
        let mut table = create_table();

        table
            .add_transition("q0", 'a', 'b', Action::Right, "q1")
            .unwrap();
        let result = table.add_transition("q0", 'a', 'c', Action::Left, "q0");

        assert_eq!(
            result,
            Err(TuringMachineError::DuplicateTransition("q0".to_string(), 'a'))
        );

        let transition = table.transition(0, 'a').unwrap();
        assert_eq!(transition.write, 'b');
        assert_eq!(transition.action, Action::Right);
        assert_eq!(transition.next_state, 1);
    }

    #[test]
    fn test_self_loop_and_exact_lookup() {
        let mut table = create_table();

        table
            .add_transition("q0", 'a', 'a', Action::Right, "q0")
            .unwrap();

        assert_eq!(table.transition(0, 'a').unwrap().next_state, 0);
        assert!(table.transition(0, 'A').is_none());
        assert!(table.transition(1, 'a').is_none());
    }
}
