//! This module provides the `ProgramLoader` struct, responsible for loading machine
//! definitions from files, strings and directories.

use crate::definition::MachineDefinition;
use crate::types::TuringMachineError;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of machine definition files.
pub const DEFINITION_EXTENSION: &str = "json";

/// `ProgramLoader` reads `MachineDefinition`s from individual files, from string content,
/// and from every definition file within a directory.
pub struct ProgramLoader;

impl ProgramLoader {
    /// Loads a single machine definition from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(MachineDefinition)` if the file is read and decoded.
    /// * `Err(TuringMachineError::FileError)` if the file cannot be read.
    /// * `Err(TuringMachineError::DefinitionError)` if the content is not a valid definition.
    pub fn load_program(path: &Path) -> Result<MachineDefinition, TuringMachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TuringMachineError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        MachineDefinition::from_json(&content)
    }

    /// Loads a single machine definition from the provided string content.
    pub fn load_program_from_string(content: &str) -> Result<MachineDefinition, TuringMachineError> {
        MachineDefinition::from_json(content)
    }

    /// Loads every definition file (`.json`) from a directory.
    ///
    /// Directories and files with other extensions are skipped. Each element of the result
    /// is either the loaded definition with its path, or the error that prevented loading it.
    pub fn load_programs(
        directory: &Path,
    ) -> Vec<Result<(PathBuf, MachineDefinition), TuringMachineError>> {
        if !directory.exists() {
            return vec![Err(TuringMachineError::FileError(format!(
                "Directory {} does not exist",
                directory.display()
            )))];
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                return vec![Err(TuringMachineError::FileError(format!(
                    "Failed to read directory {}: {}",
                    directory.display(),
                    e
                )))]
            }
        };

        entries
            .filter_map(|entry| {
                let path = match entry {
                    Ok(entry) => entry.path(),
                    Err(e) => {
                        return Some(Err(TuringMachineError::FileError(format!(
                            "Failed to read directory entry: {}",
                            e
                        ))))
                    }
                };

                if path.is_dir() || path.extension().is_none_or(|ext| ext != DEFINITION_EXTENSION)
                {
                    return None;
                }

                Some(Self::load_program(&path).map(|definition| (path, definition)))
            })
            .collect()
    }
}
