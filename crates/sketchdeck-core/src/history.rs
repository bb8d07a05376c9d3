//! Undo/redo history of executed commands.

use crate::commands::Command;
use crate::state::ApplicationState;

/// Default number of undo steps kept.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Two stacks of executed commands.
///
/// Executing a command clears the redo stack. With a non-zero `max_depth`
/// the oldest undo entry is dropped once the stack grows past it.
#[derive(Debug)]
pub struct History {
    /// Undo history stack.
    undo_stack: Vec<Box<dyn Command>>,
    /// Redo history stack.
    redo_stack: Vec<Box<dyn Command>>,
    /// Maximum undo entries, `0` for no limit.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl History {
    /// Create empty history keeping at most `max_depth` undo steps.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Run a command and record it.
    pub fn execute(&mut self, state: &mut ApplicationState, command: Box<dyn Command>) {
        log::debug!("Execute: {}", command.description());
        command.run(state);
        self.undo_stack.push(command);

        // Clear redo stack when new changes are made
        self.redo_stack.clear();

        if self.max_depth > 0 && self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        debug_assert!(state.selection_is_consistent());
    }

    /// Undo the last command.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self, state: &mut ApplicationState) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            log::info!("Nothing to undo");
            return false;
        };
        log::debug!("Undo: {}", command.description());
        command.undo(state);
        self.redo_stack.push(command);
        debug_assert!(state.selection_is_consistent());
        true
    }

    /// Redo the last undone command.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self, state: &mut ApplicationState) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            log::info!("Nothing to redo");
            return false;
        };
        log::debug!("Redo: {}", command.description());
        command.redo(state);
        self.undo_stack.push(command);
        debug_assert!(state.selection_is_consistent());
        true
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Forget every recorded command.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Label of the command `undo` would revert.
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Label of the command `redo` would re-apply.
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }
}
