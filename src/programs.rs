//! This module provides the `ProgramManager`, a registry of embedded sample machines that
//! can be looked up by index or name and built into ready-to-run machines.

use crate::definition::MachineDefinition;
use crate::machine::TuringMachine;
use crate::types::TuringMachineError;

use log::warn;
use std::sync::RwLock;

// Default embedded machines
const PROGRAM_TEXTS: [&str; 2] = [
    include_str!("../programs/doubling.json"),
    include_str!("../programs/balanced-abc.json"),
];

lazy_static::lazy_static! {
    pub static ref PROGRAMS: RwLock<Vec<MachineDefinition>> = RwLock::new(Vec::new());
}

pub struct ProgramManager;

impl ProgramManager {
    /// Decodes the embedded definitions into the shared registry.
    pub fn load() -> Result<(), TuringMachineError> {
        let mut programs = Vec::new();

        for program_text in PROGRAM_TEXTS {
            match MachineDefinition::from_json(program_text) {
                Ok(definition) => programs.push(definition),
                Err(e) => warn!("Failed to decode embedded program: {}", e),
            }
        }

        let mut write_guard = PROGRAMS.write().map_err(|_| {
            TuringMachineError::FileError("Failed to acquire write lock".to_string())
        })?;
        *write_guard = programs;

        Ok(())
    }

    fn ensure_loaded() {
        let empty = PROGRAMS.read().map(|p| p.is_empty()).unwrap_or(true);
        if empty {
            if let Err(e) = Self::load() {
                warn!("Failed to load embedded programs: {}", e);
            }
        }
    }

    /// Get the number of available programs
    pub fn get_program_count() -> usize {
        Self::ensure_loaded();

        PROGRAMS.read().map(|programs| programs.len()).unwrap_or(0)
    }

    /// Get a program by its index
    pub fn get_program_by_index(index: usize) -> Result<MachineDefinition, TuringMachineError> {
        Self::ensure_loaded();

        PROGRAMS
            .read()
            .map_err(|_| TuringMachineError::FileError("Failed to acquire read lock".to_string()))?
            .get(index)
            .cloned()
            .ok_or_else(|| {
                TuringMachineError::DefinitionError(format!("Program index {} out of range", index))
            })
    }

    /// Get a program by its name, ignoring case
    pub fn get_program_by_name(name: &str) -> Result<MachineDefinition, TuringMachineError> {
        Self::ensure_loaded();

        PROGRAMS
            .read()
            .map_err(|_| TuringMachineError::FileError("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|program| program.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| {
                TuringMachineError::DefinitionError(format!("Program '{}' not found", name))
            })
    }

    /// Builds a ready-to-run machine from the named program.
    pub fn build_by_name(name: &str) -> Result<TuringMachine, TuringMachineError> {
        Self::get_program_by_name(name)?.build()
    }

    /// List all program names
    pub fn list_program_names() -> Vec<String> {
        Self::ensure_loaded();

        PROGRAMS
            .read()
            .map(|programs| {
                programs
                    .iter()
                    .map(|program| program.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get information about a program by its index
    pub fn get_program_info(index: usize) -> Result<ProgramInfo, TuringMachineError> {
        let program = Self::get_program_by_index(index)?;

        Ok(ProgramInfo {
            index,
            name: program.name.clone(),
            initial_state: program.initial_state.clone(),
            initial_tape: program.input.content.clone(),
            state_count: program.states.len(),
            transition_count: program.transitions.len(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProgramInfo {
    pub index: usize,
    pub name: String,
    pub initial_state: Option<String>,
    pub initial_tape: String,
    pub state_count: usize,
    pub transition_count: usize,
}
