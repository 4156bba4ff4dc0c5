//! This module defines the `TuringMachine` struct, which owns a transition table and runs it
//! against a fresh sparse tape. It handles the current state, the halting policy and the
//! post-run queries.

use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{Action, Halt, StateRole, Step, Symbol, TuringMachineError};
use log::{debug, trace};

/// The tape, state and progress of one run.
#[derive(Debug, Clone)]
struct Run {
    tape: Tape,
    state: usize,
    step_count: usize,
    halt: Option<Halt>,
}

/// Represents a deterministic single-tape Turing Machine.
///
/// The transition table and initial state are configured first; each call to `run` (or
/// `start`) then discards the previous tape and begins again from the initial state.
#[derive(Debug, Clone, Default)]
pub struct TuringMachine {
    table: TransitionTable,
    initial_state: Option<usize>,
    run: Option<Run>,
}

impl TuringMachine {
    /// Creates a machine with no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine around an already built table. No initial state is designated.
    pub fn with_table(table: TransitionTable) -> Self {
        Self {
            table,
            initial_state: None,
            run: None,
        }
    }

    /// Adds a state. See [`TransitionTable::add_state`].
    pub fn add_state(&mut self, name: &str, accepting: bool) -> Result<(), TuringMachineError> {
        self.table.add_state(name, accepting).map(|_| ())
    }

    /// Adds a transition. See [`TransitionTable::add_transition`].
    pub fn add_transition(
        &mut self,
        from: &str,
        read: Symbol,
        write: Symbol,
        action: Action,
        to: &str,
    ) -> Result<(), TuringMachineError> {
        self.table.add_transition(from, read, write, action, to)
    }

    /// Designates the initial state. On error the previous designation is kept.
    pub fn set_initial_state(&mut self, name: &str) -> Result<(), TuringMachineError> {
        self.initial_state = Some(self.table.resolve(name, StateRole::Initial)?);
        Ok(())
    }

    /// Returns the name of the designated initial state, if any.
    pub fn initial_state(&self) -> Option<&str> {
        self.initial_state
            .and_then(|id| self.table.state(id))
            .map(|state| state.name.as_str())
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Prepares a new run without applying any transition.
    ///
    /// The tape is seeded with `content` starting at `offset`, the head is placed at `head`
    /// and the current state is reset to the initial state.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the machine is ready to step.
    /// * `Err(TuringMachineError::NotReady)` if no initial state has been designated.
    /// * `Err(TuringMachineError::TapeBoundary)` if the content runs past `i64::MAX`.
    pub fn start(
        &mut self,
        content: &str,
        offset: i64,
        head: i64,
        blank: Symbol,
    ) -> Result<(), TuringMachineError> {
        let state = self.initial_state.ok_or(TuringMachineError::NotReady)?;

        debug!(
            "Starting run in state {} with {} input symbols at offset {}, head {}",
            self.state_name(state),
            content.chars().count(),
            offset,
            head
        );

        self.run = Some(Run {
            tape: Tape::new(content, offset, head, blank)?,
            state,
            step_count: 0,
            halt: None,
        });

        Ok(())
    }

    /// Executes a single step of the current run.
    ///
    /// # Returns
    ///
    /// * `Ok(Step::Continue)` if a `LEFT` or `RIGHT` transition was applied.
    /// * `Ok(Step::Halt(_))` if the run has halted, either now or on an earlier step.
    /// * `Err(TuringMachineError::NotExecuted)` if no run has been started.
    /// * `Err(TuringMachineError::TapeBoundary)` if the head would leave the `i64` range; the
    ///   transition is not applied.
    pub fn step(&mut self) -> Result<Step, TuringMachineError> {
        let run = self.run.as_mut().ok_or(TuringMachineError::NotExecuted)?;

        if let Some(halt) = &run.halt {
            return Ok(Step::Halt(halt.clone()));
        }

        let symbol = run.tape.read();
        let Some(transition) = self.table.transition(run.state, symbol).copied() else {
            let halt = Halt::NoTransition {
                state: self.table.state(run.state).map(|s| s.name.clone()).unwrap_or_default(),
                symbol,
            };
            run.halt = Some(halt.clone());
            return Ok(Step::Halt(halt));
        };

        trace!(
            "step {}: state {} reads {:?} at {} -> write {:?}, {:?}, state {}",
            run.step_count,
            run.state,
            symbol,
            run.tape.head(),
            transition.write,
            transition.action,
            transition.next_state
        );

        // The move is checked first so a failing step leaves the tape and state untouched.
        let head = run.tape.head();
        let in_bounds = match transition.action {
            Action::Left => head.checked_sub(1).is_some(),
            Action::Right => head.checked_add(1).is_some(),
            Action::Halt => true,
        };
        if !in_bounds {
            return Err(TuringMachineError::TapeBoundary);
        }

        run.tape.write(transition.write);
        run.state = transition.next_state;
        run.step_count += 1;

        match transition.action {
            Action::Left => run.tape.left()?,
            Action::Right => run.tape.right()?,
            Action::Halt => {
                run.halt = Some(Halt::Action);
                return Ok(Step::Halt(Halt::Action));
            }
        }

        Ok(Step::Continue)
    }

    /// Runs the machine on a fresh tape until it halts.
    ///
    /// There is no step limit: a table that never halts on this input never returns. Use
    /// `start` and `step` to drive a bounded run instead.
    pub fn run(
        &mut self,
        content: &str,
        offset: i64,
        head: i64,
        blank: Symbol,
    ) -> Result<Halt, TuringMachineError> {
        self.start(content, offset, head, blank)?;

        loop {
            if let Step::Halt(halt) = self.step()? {
                debug!(
                    "Run halted in state {} after {} steps: {:?}",
                    self.current_state_name()?,
                    self.step_count()?,
                    halt
                );
                return Ok(halt);
            }
        }
    }

    fn current(&self) -> Result<&Run, TuringMachineError> {
        self.run.as_ref().ok_or(TuringMachineError::NotExecuted)
    }

    fn state_name(&self, id: usize) -> &str {
        self.table.state(id).map_or("", |state| state.name.as_str())
    }

    /// Returns `true` if the current state is accepting.
    pub fn is_accepted(&self) -> Result<bool, TuringMachineError> {
        let run = self.current()?;
        Ok(self.table.state(run.state).is_some_and(|s| s.accepting))
    }

    pub fn current_state_name(&self) -> Result<&str, TuringMachineError> {
        let run = self.current()?;
        Ok(self.state_name(run.state))
    }

    /// Returns the tape content from the leftmost to the rightmost non-blank cell.
    pub fn content(&self) -> Result<String, TuringMachineError> {
        Ok(self.current()?.tape.content())
    }

    /// Returns the position of the leftmost non-blank cell, or `i64::MAX` for a blank tape.
    pub fn content_offset(&self) -> Result<i64, TuringMachineError> {
        Ok(self.current()?.tape.leftmost().unwrap_or(i64::MAX))
    }

    pub fn head_position(&self) -> Result<i64, TuringMachineError> {
        Ok(self.current()?.tape.head())
    }

    pub fn blank_symbol(&self) -> Result<Symbol, TuringMachineError> {
        Ok(self.current()?.tape.blank())
    }

    /// Returns the number of transitions applied in the current run.
    pub fn step_count(&self) -> Result<usize, TuringMachineError> {
        Ok(self.current()?.step_count)
    }

    /// Returns the halt reason, or `None` while the run is still in progress.
    pub fn halt(&self) -> Result<Option<&Halt>, TuringMachineError> {
        Ok(self.current()?.halt.as_ref())
    }

    pub fn tape(&self) -> Result<&Tape, TuringMachineError> {
        Ok(&self.current()?.tape)
    }
}
