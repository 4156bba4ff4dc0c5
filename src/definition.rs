//! This module defines `MachineDefinition`, the serializable description of a machine: its
//! states, transitions, initial state and an optional default input.

use crate::machine::TuringMachine;
use crate::types::{Action, Symbol, TuringMachineError, DEFAULT_BLANK_SYMBOL};
use serde::{Deserialize, Serialize};

/// A serializable machine definition.
///
/// ```json
/// {
///   "name": "Flip",
///   "initial_state": "q0",
///   "blank": "_",
///   "states": [{ "name": "q0" }, { "name": "done", "accepting": true }],
///   "transitions": [
///     { "from": "q0", "read": "0", "write": "1", "action": "RIGHT", "to": "q0" },
///     { "from": "q0", "read": "_", "write": "_", "action": "HALT", "to": "done" }
///   ],
///   "input": { "content": "0101" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineDefinition {
    pub name: String,
    #[serde(default)]
    pub initial_state: Option<String>,
    #[serde(default = "default_blank")]
    pub blank: Symbol,
    pub states: Vec<StateDefinition>,
    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
    #[serde(default)]
    pub input: Input,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub name: String,
    #[serde(default)]
    pub accepting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub from: String,
    pub read: Symbol,
    pub write: Symbol,
    pub action: Action,
    pub to: String,
}

/// The tape a definition runs on by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub head: i64,
}

fn default_blank() -> Symbol {
    DEFAULT_BLANK_SYMBOL
}

impl MachineDefinition {
    /// Decodes a definition from JSON.
    pub fn from_json(content: &str) -> Result<Self, TuringMachineError> {
        serde_json::from_str(content)
            .map_err(|e| TuringMachineError::DefinitionError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, TuringMachineError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TuringMachineError::DefinitionError(e.to_string()))
    }

    /// Builds a machine by replaying every state, transition and the initial state through
    /// the machine's validating operations. The first failure is returned.
    pub fn build(&self) -> Result<TuringMachine, TuringMachineError> {
        let mut machine = TuringMachine::new();

        for state in &self.states {
            machine.add_state(&state.name, state.accepting)?;
        }

        for t in &self.transitions {
            machine.add_transition(&t.from, t.read, t.write, t.action, &t.to)?;
        }

        let initial_state = self
            .initial_state
            .as_deref()
            .ok_or(TuringMachineError::MissingArgument("initial state name"))?;
        machine.set_initial_state(initial_state)?;

        Ok(machine)
    }
}
