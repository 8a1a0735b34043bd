//! Undo/Redo command stack.
//!
//! Every undoable mutation is a reversible `Command`. Commands are
//! executed once, pushed to a stack, and undo pops and applies the inverse.
//! Color changes deliberately bypass this layer and are not undoable.

use sd_core::ShapeId;
use sd_core::model::Scene;

/// A reversible action against the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Translate one shape by an integer offset.
    Move { id: ShapeId, dx: i32, dy: i32 },
}

impl Command {
    /// Apply the command. A target that is no longer in the scene is ignored.
    pub fn execute(&self, scene: &mut Scene) {
        match *self {
            Command::Move { id, dx, dy } => {
                if let Some(shape) = scene.get_mut(id) {
                    shape.move_by(dx, dy);
                }
            }
        }
    }

    /// Apply the exact inverse of [`execute`](Self::execute).
    pub fn undo(&self, scene: &mut Scene) {
        self.inverse().execute(scene);
    }

    /// The command that reverts this one.
    pub fn inverse(&self) -> Command {
        match *self {
            Command::Move { id, dx, dy } => Command::Move {
                id,
                dx: dx.wrapping_neg(),
                dy: dy.wrapping_neg(),
            },
        }
    }

    /// Human-readable description for UI display, e.g. `Move circle #0`.
    pub fn describe(&self, scene: &Scene) -> String {
        match self {
            Command::Move { id, .. } => {
                let name = scene.get(*id).map_or("shape", |s| s.kind().name());
                format!("Move {name} {id}")
            }
        }
    }
}

/// An executed command with its display text.
#[derive(Debug, Clone)]
struct Entry {
    command: Command,
    description: String,
}

/// Manages undo/redo stacks.
pub struct CommandStack {
    undo_stack: Vec<Entry>,
    redo_stack: Vec<Entry>,
    /// Maximum undo depth.
    max_depth: usize,
}

impl CommandStack {
    /// Create a stack holding at most `max_depth` commands (at least one).
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Execute a command against the scene and push it to the undo stack.
    pub fn execute(&mut self, scene: &mut Scene, command: Command) {
        let description = command.describe(scene);
        command.execute(scene);
        log::debug!("execute: {description}");

        self.undo_stack.push(Entry {
            command,
            description,
        });
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }

        // Clear redo stack on new action
        self.redo_stack.clear();
    }

    /// Undo the last command. Returns its description, or `None` if
    /// there was nothing to undo.
    pub fn undo(&mut self, scene: &mut Scene) -> Option<String> {
        let entry = self.undo_stack.pop()?;
        entry.command.undo(scene);
        log::debug!("undo: {}", entry.description);
        let desc = entry.description.clone();
        self.redo_stack.push(entry);
        Some(desc)
    }

    /// Redo the last undone command.
    pub fn redo(&mut self, scene: &mut Scene) -> Option<String> {
        let entry = self.redo_stack.pop()?;
        entry.command.execute(scene);
        log::debug!("redo: {}", entry.description);
        let desc = entry.description.clone();
        self.undo_stack.push(entry);
        Some(desc)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undoable commands.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// The most recent undoable command, if any.
    pub fn peek(&self) -> Option<&Command> {
        self.undo_stack.last().map(|e| &e.command)
    }
}
