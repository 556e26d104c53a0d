//! # Undo/Redo Stack
//!
//! Bounded history of whole-document snapshots.
//!
//! ## Design
//!
//! - Before a mutation is applied, the pre-state is recorded
//! - Undo swaps the current document with the most recent snapshot and
//!   pushes the current state onto the redo stack
//! - Redo is the mirror image
//! - New entries clear the redo stack
//! - When the undo stack is full the oldest snapshot is dropped
//! - Batches group several mutations into one undo step
//!
//! Snapshots are full copies. Level documents are small and a copy cannot
//! drift the way an inverse mutation can.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let mut doc = boxlevel_parser::new_document();
//!
//! stack.apply(&Mutation::Resize { block_id: 0, width: 7, height: 7 }, &mut doc)?;
//! stack.undo(&mut doc);
//! stack.redo(&mut doc);
//! ```

use crate::mutations::{Declined, Mutation, MutationOutcome};
use boxlevel_parser::ast::Document;
use std::collections::VecDeque;

/// Default number of undo levels
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A document state together with the label of the step that left it
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub document: Document,
    pub description: Option<String>,
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Pre-states, most recent last
    undo_stack: VecDeque<Snapshot>,

    /// States that were undone, most recent last
    redo_stack: Vec<Snapshot>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Pre-state captured by `begin_batch`
    current_batch: Option<Batch>,
}

#[derive(Debug)]
struct Batch {
    before: Snapshot,
    applied: usize,
}

impl UndoStack {
    /// Create a new undo stack with the default capacity
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Validate, record the pre-state, then apply
    pub fn apply(
        &mut self,
        mutation: &Mutation,
        doc: &mut Document,
    ) -> Result<MutationOutcome, Declined> {
        mutation.validate(doc)?;

        let before = doc.clone();
        let outcome = mutation.apply(doc)?;

        match &mut self.current_batch {
            Some(batch) => {
                batch.applied += 1;
                self.redo_stack.clear();
            }
            None => self.record(before, Some(mutation.describe())),
        }

        Ok(outcome)
    }

    /// Push a pre-state taken by the caller, e.g. before a wholesale import
    pub fn record(&mut self, before: Document, description: Option<String>) {
        self.push(Snapshot {
            document: before,
            description,
        });
    }

    /// Start a batch of mutations (undone/redone together)
    pub fn begin_batch(&mut self, doc: &Document, description: impl Into<String>) {
        self.current_batch = Some(Batch {
            before: Snapshot {
                document: doc.clone(),
                description: Some(description.into()),
            },
            applied: 0,
        });
    }

    /// End the current batch and push it as a single step
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if batch.applied > 0 {
                self.push(batch.before);
            }
        }
    }

    fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            if let Some(evicted) = self.undo_stack.pop_front() {
                tracing::trace!(
                    description = evicted.description.as_deref().unwrap_or(""),
                    "history full, dropping oldest snapshot"
                );
            }
        }

        // A new step invalidates the future
        self.redo_stack.clear();
    }

    /// Restore the previous state. Returns false when there is nothing to undo.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };

        let current = std::mem::replace(doc, previous.document);
        self.redo_stack.push(Snapshot {
            document: current,
            description: previous.description,
        });
        true
    }

    /// Re-apply the most recently undone step
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };

        let current = std::mem::replace(doc, next.document);
        self.undo_stack.push_back(Snapshot {
            document: current,
            description: next.description,
        });
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Label of the step `undo` would revert
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .back()
            .and_then(|snapshot| snapshot.description.as_deref())
    }

    /// Label of the step `redo` would re-apply
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
