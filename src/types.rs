//! This module defines the core data structures and types shared by the tape, the transition
//! table and the execution engine, including head actions, halt reasons and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single tape symbol. The blank symbol is an ordinary `Symbol` chosen per run.
pub type Symbol = char;

/// The blank symbol used when a definition does not name one.
pub const DEFAULT_BLANK_SYMBOL: Symbol = '\0';

/// Represents the action a transition performs on the head after writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Move the head one position to the left and keep running.
    Left,
    /// Move the head one position to the right and keep running.
    Right,
    /// Leave the head where it is and stop the run.
    Halt,
}

/// A single transition rule: what to write, how to move, and where to go next.
///
/// The destination is stored as an index into the owning `TransitionTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The symbol written under the head.
    pub write: Symbol,
    /// The head action applied after writing.
    pub action: Action,
    /// Index of the destination state.
    pub next_state: usize,
}

/// Represents the outcome of a single execution step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The machine applied a transition and keeps running.
    Continue,
    /// The machine has halted.
    Halt(Halt),
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// A transition with the `HALT` action was applied.
    Action,
    /// No transition exists for the current state and the symbol under the head.
    NoTransition {
        state: String,
        symbol: Symbol,
    },
}

/// Which end of a reference did not resolve to a known state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    Source,
    Destination,
    Initial,
}

impl std::fmt::Display for StateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateRole::Source => write!(f, "source"),
            StateRole::Destination => write!(f, "destination"),
            StateRole::Initial => write!(f, "initial"),
        }
    }
}

/// Represents the errors raised while building or executing a Turing Machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// A required identifier or field was absent.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    /// A state with this name is already registered.
    #[error("State {0} already exists")]
    DuplicateState(String),
    /// The source state already has a transition for this symbol.
    #[error("Transition from state {0} on symbol {1:?} already exists")]
    DuplicateTransition(String, Symbol),
    /// A referenced state does not exist in the table.
    #[error("Unknown {role} state: {name}")]
    UnknownState { role: StateRole, name: String },
    /// A head move or input position fell outside the representable tape.
    #[error("Tape boundary exceeded")]
    TapeBoundary,
    /// `run` was invoked before an initial state was designated.
    #[error("The initial state is not set")]
    NotReady,
    /// A post-run accessor was used before any run.
    #[error("The machine has not been executed")]
    NotExecuted,
    /// A machine definition could not be decoded.
    #[error("Definition error: {0}")]
    DefinitionError(String),
    /// Reading a definition from the file system failed.
    #[error("File error: {0}")]
    FileError(String),
}
