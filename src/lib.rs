//! This crate provides a deterministic single-tape Turing Machine interpreter.
//! It includes a sparse bi-infinite tape, a validated transition table, an execution engine
//! that runs until no transition applies, and loaders for serialized machine definitions.

pub mod definition;
pub mod loader;
pub mod machine;
pub mod programs;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the serializable definition types from the definition module.
pub use definition::{Input, MachineDefinition, StateDefinition, TransitionDefinition};
/// Re-exports the `ProgramLoader` struct from the loader module.
pub use loader::ProgramLoader;
/// Re-exports the `TuringMachine` struct from the machine module.
pub use machine::TuringMachine;
/// Re-exports `ProgramInfo`, `ProgramManager`, and `PROGRAMS` from the programs module.
pub use programs::{ProgramInfo, ProgramManager, PROGRAMS};
/// Re-exports `State` and `TransitionTable` from the table module.
pub use table::{State, TransitionTable};
/// Re-exports the sparse `Tape` from the tape module.
pub use tape::Tape;
/// Re-exports the shared types from the types module.
pub use types::{
    Action, Halt, StateRole, Step, Symbol, Transition, TuringMachineError, DEFAULT_BLANK_SYMBOL,
};
