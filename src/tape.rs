//! This module defines the `Tape`, a sparse bi-infinite tape of symbols with a single head.
//!
//! Only non-blank cells are stored. Writing the blank symbol removes the cell, so the
//! leftmost and rightmost stored positions are always the bounds of the non-blank content.

use crate::types::{Symbol, TuringMachineError};
use std::collections::BTreeMap;

/// A sparse, unbounded tape in both directions.
///
/// ```text
///  ... _ | a | _ | b | _ ...
///       -1   0   1   2
/// ```
///
/// The tape above stores only `{-1: 'a', 1: 'b'}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: BTreeMap<i64, Symbol>,
    head: i64,
    blank: Symbol,
}

impl Tape {
    /// Creates a tape holding `content` starting at `offset`, with the head at `head`.
    ///
    /// Characters equal to `blank` are skipped since blank cells are never stored.
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::TapeBoundary)` if the content runs past `i64::MAX`.
    pub fn new(
        content: &str,
        offset: i64,
        head: i64,
        blank: Symbol,
    ) -> Result<Self, TuringMachineError> {
        let mut cells = BTreeMap::new();

        for (i, symbol) in content.chars().enumerate() {
            let position = i64::try_from(i)
                .ok()
                .and_then(|i| offset.checked_add(i))
                .ok_or(TuringMachineError::TapeBoundary)?;

            if symbol != blank {
                cells.insert(position, symbol);
            }
        }

        Ok(Self { cells, head, blank })
    }

    /// Returns the symbol under the head.
    pub fn read(&self) -> Symbol {
        self.cells.get(&self.head).copied().unwrap_or(self.blank)
    }

    /// Writes `symbol` under the head. Writing the blank symbol erases the cell.
    pub fn write(&mut self, symbol: Symbol) {
        if symbol == self.blank {
            self.cells.remove(&self.head);
        } else {
            self.cells.insert(self.head, symbol);
        }
    }

    /// Moves the head one cell left. Fails without moving at `i64::MIN`.
    pub fn left(&mut self) -> Result<(), TuringMachineError> {
        self.head = self
            .head
            .checked_sub(1)
            .ok_or(TuringMachineError::TapeBoundary)?;
        Ok(())
    }

    /// Moves the head one cell right. Fails without moving at `i64::MAX`.
    pub fn right(&mut self) -> Result<(), TuringMachineError> {
        self.head = self
            .head
            .checked_add(1)
            .ok_or(TuringMachineError::TapeBoundary)?;
        Ok(())
    }

    /// Returns the content from the leftmost to the rightmost non-blank cell, inclusive.
    /// Blank cells in between are rendered with the blank symbol.
    pub fn content(&self) -> String {
        match (self.leftmost(), self.rightmost()) {
            (Some(left), Some(right)) => (left..=right).map(|i| self.symbol_at(i)).collect(),
            _ => String::new(),
        }
    }

    /// Position of the first non-blank cell, `None` if the tape is entirely blank.
    pub fn leftmost(&self) -> Option<i64> {
        self.cells.keys().next().copied()
    }

    /// Position of the last non-blank cell, `None` if the tape is entirely blank.
    pub fn rightmost(&self) -> Option<i64> {
        self.cells.keys().next_back().copied()
    }

    /// Returns the symbol stored at `position`, or the blank symbol.
    pub fn symbol_at(&self, position: i64) -> Symbol {
        self.cells.get(&position).copied().unwrap_or(self.blank)
    }

    pub fn head(&self) -> i64 {
        self.head
    }

    pub fn blank(&self) -> Symbol {
        self.blank
    }

    /// Number of stored (non-blank) cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
