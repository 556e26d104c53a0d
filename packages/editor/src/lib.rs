//! # Boxlevel Editor
//!
//! Editing engine for recursive box-pushing levels.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ parser: level text ⇄ Document               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Fresh Block ids and Ref remapping        │
//! │  - Apply mutations with validation          │
//! │  - Snapshot undo/redo                       │
//! │  - Clipboard (cut / copy / paste)           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ linter: advisory warnings                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is the only state**: no selection, no current tool
//! 2. **Declines are values**: a rejected edit returns `Declined` and
//!    changes nothing
//! 3. **Ids are document-wide**: anything entering the tree is renumbered
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxlevel_editor::{Editor, EditorConfig, Mutation};
//!
//! let mut editor = Editor::open("level.txt", &EditorConfig::default())?;
//!
//! editor.apply(Mutation::Insert {
//!     parent_id: 0,
//!     object: LevelObject::Wall(Wall::new(0, 0)),
//!     x: 0,
//!     y: 0,
//! })?;
//! editor.undo();
//!
//! editor.save()?;
//! ```

mod config;
mod editor;
mod errors;
mod identity;
mod mutations;
mod undo_stack;

pub use config::EditorConfig;
pub use editor::Editor;
pub use errors::EditorError;
pub use identity::{assign_fresh_ids, duplicate_subtree, IdMap};
pub use mutations::{copy, cut, Declined, HeaderProperty, Mutation, MutationOutcome, Property};
pub use undo_stack::{Snapshot, UndoStack, DEFAULT_HISTORY_CAPACITY};

// Re-export common types for convenience
pub use boxlevel_common::ObjectPath;
pub use boxlevel_parser::ast::Document;
