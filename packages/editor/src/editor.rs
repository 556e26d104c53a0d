//! # Editor Session
//!
//! One loaded level plus its history and clipboard.
//!
//! ## Lifecycle
//!
//! ```text
//! Open/Import → Parse → Edit (history) → Validate → Export/Save
//!      ↓          ↓         ↓               ↓           ↓
//!    Text     Document  Mutations      Warnings       Text
//! ```
//!
//! Replacing the document wholesale (new, import) clears history. A failed
//! import leaves the loaded document as it was.

use crate::config::EditorConfig;
use crate::mutations::{self, Declined, Mutation, MutationOutcome};
use crate::undo_stack::UndoStack;
use crate::EditorError;
use boxlevel_common::ObjectPath;
use boxlevel_parser::ast::{BlockId, Document, LevelObject};
use boxlevel_parser::{parse, parse_with_warnings, serialize, FormatError, ParseWarning};
use std::path::{Path, PathBuf};

/// Editable level with undo/redo and a one-slot clipboard
#[derive(Debug)]
pub struct Editor {
    /// Backing file, if any
    path: Option<PathBuf>,

    /// Increments on every committed change
    version: u64,

    document: Document,
    history: UndoStack,
    clipboard: Option<LevelObject>,

    /// Unsaved changes since open/save
    dirty: bool,
}

impl Editor {
    /// Session on the default template
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_document(boxlevel_parser::new_document(), config)
    }

    pub fn with_document(document: Document, config: &EditorConfig) -> Self {
        Self {
            path: None,
            version: 0,
            document,
            history: UndoStack::with_max_levels(config.history_capacity),
            clipboard: None,
            dirty: false,
        }
    }

    /// Create session from level text (memory-backed)
    pub fn from_source(source: &str, config: &EditorConfig) -> Result<Self, EditorError> {
        let document = parse(source)?;
        Ok(Self::with_document(document, config))
    }

    /// Load session from a level file (file-backed)
    pub fn open(path: impl AsRef<Path>, config: &EditorConfig) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let mut editor = Self::from_source(&source, config)?;
        editor.path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "opened level");
        Ok(editor)
    }

    /// Write the canonical serialization back to the backing file
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.as_ref().ok_or(EditorError::NotFileBacked)?;
        std::fs::write(path, self.export())?;
        self.dirty = false;
        Ok(())
    }

    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), EditorError> {
        self.path = Some(path.into());
        self.save()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clipboard(&self) -> Option<&LevelObject> {
        self.clipboard.as_ref()
    }

    /// Validate, snapshot, then apply. Declines leave everything untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome, Declined> {
        match self.history.apply(&mutation, &mut self.document) {
            Ok(outcome) => {
                self.touch();
                tracing::debug!(version = self.version, "{}", mutation.describe());
                Ok(outcome)
            }
            Err(declined) => {
                tracing::debug!(%declined, "{} declined", mutation.describe());
                Err(declined)
            }
        }
    }

    /// Group the following mutations into one undo step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.history.begin_batch(&self.document, description);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    /// Deep-copy the object at `path` into the clipboard
    pub fn copy(&mut self, path: &ObjectPath) -> Result<(), Declined> {
        let value = mutations::copy(&self.document, path)
            .ok_or_else(|| Declined::InvalidPath(path.clone()))?;
        self.clipboard = Some(value);
        Ok(())
    }

    /// Copy then delete, as one undo step
    pub fn cut(&mut self, path: &ObjectPath) -> Result<(), Declined> {
        let outcome = self.apply(Mutation::Delete { path: path.clone() })?;
        if let MutationOutcome::Removed(object) = outcome {
            self.clipboard = Some(object);
        }
        Ok(())
    }

    /// Insert the clipboard value with fresh Block ids. The clipboard keeps
    /// its value, so repeated pastes are independent copies.
    pub fn paste(
        &mut self,
        parent_id: BlockId,
        x: i32,
        y: i32,
    ) -> Result<MutationOutcome, Declined> {
        let value = self.clipboard.clone().ok_or(Declined::ClipboardEmpty)?;
        self.apply(Mutation::Paste {
            value,
            parent_id,
            x,
            y,
        })
    }

    /// Returns false when there was nothing to undo
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.document);
        if undone {
            self.touch();
            tracing::debug!(version = self.version, "undo");
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.document);
        if redone {
            self.touch();
            tracing::debug!(version = self.version, "redo");
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    /// Swap in a different document. History does not carry over.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.history.clear();
        self.touch();
    }

    /// Reset to the default template
    pub fn new_document(&mut self) {
        self.replace_document(boxlevel_parser::new_document());
    }

    /// Replace the document with parsed text. On error nothing changes.
    pub fn import(&mut self, source: &str) -> Result<Vec<ParseWarning>, FormatError> {
        let output = parse_with_warnings(source)?;
        self.replace_document(output.document);
        Ok(output.warnings)
    }

    /// Canonical level text
    pub fn export(&self) -> String {
        serialize(&self.document)
    }

    /// Advisory warnings for the current document
    pub fn validate(&self) -> Vec<String> {
        boxlevel_linter::validate(&self.document)
    }

    fn touch(&mut self) {
        self.version += 1;
        self.dirty = true;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxlevel_parser::ast::Wall;

    #[test]
    fn test_new_session() {
        let editor = Editor::default();
        assert_eq!(editor.document(), &boxlevel_parser::new_document());
        assert_eq!(editor.version(), 0);
        assert!(!editor.is_dirty());
        assert!(!editor.can_undo());
        assert!(editor.validate().is_empty());
    }

    #[test]
    fn test_apply_marks_dirty() {
        let mut editor = Editor::default();
        editor
            .apply(Mutation::Recolor {
                block_id: 1,
                hue: 0.1,
                sat: 0.2,
                val: 0.3,
            })
            .unwrap();

        assert_eq!(editor.version(), 1);
        assert!(editor.is_dirty());
        assert_eq!(editor.undo_description(), Some("Recolor block 1"));
    }

    #[test]
    fn test_declined_apply_keeps_version() {
        let mut editor = Editor::default();
        let result = editor.apply(Mutation::Recolor {
            block_id: 99,
            hue: 0.0,
            sat: 0.0,
            val: 0.0,
        });

        assert_eq!(result, Err(Declined::BlockNotFound(99)));
        assert_eq!(editor.version(), 0);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_paste_without_clipboard() {
        let mut editor = Editor::default();
        assert_eq!(editor.paste(0, 0, 0), Err(Declined::ClipboardEmpty));
    }

    #[test]
    fn test_cut_fills_clipboard() {
        let mut editor = Editor::default();
        editor.cut(&ObjectPath::new(0, vec![0])).unwrap();

        assert_eq!(editor.document().root.children.len(), 1);
        assert!(matches!(editor.clipboard(), Some(LevelObject::Block(b)) if b.id == 1));

        assert!(editor.undo());
        assert_eq!(editor.document(), &boxlevel_parser::new_document());
    }

    #[test]
    fn test_failed_import_keeps_document() {
        let mut editor = Editor::default();
        editor
            .apply(Mutation::Insert {
                parent_id: 0,
                object: LevelObject::Wall(Wall::new(0, 0)),
                x: 0,
                y: 0,
            })
            .unwrap();
        let before = editor.document().clone();

        assert!(editor.import("version 4\nBlock 0 0 0 5 5").is_err());
        assert_eq!(editor.document(), &before);
        assert!(editor.can_undo());
    }

    #[test]
    fn test_import_clears_history() {
        let mut editor = Editor::default();
        editor
            .apply(Mutation::Resize {
                block_id: 0,
                width: 9,
                height: 9,
            })
            .unwrap();

        let warnings = editor
            .import("version 4\n#\nBlock 0 0 0 3 3 0 0 0 1 0 0 0 0 0 0 0\n")
            .unwrap();

        assert!(warnings.is_empty());
        let root = &editor.document().root;
        assert_eq!((root.width, root.height, root.hue), (3, 3, 0.0));
        assert!(root.children.is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_save_requires_path() {
        let mut editor = Editor::default();
        assert!(matches!(editor.save(), Err(EditorError::NotFileBacked)));
    }

    #[test]
    fn test_history_capacity_from_config() {
        let mut editor = Editor::new(&EditorConfig {
            history_capacity: 1,
        });
        for width in 6..9 {
            editor
                .apply(Mutation::Resize {
                    block_id: 0,
                    width,
                    height: 5,
                })
                .unwrap();
        }

        assert!(editor.undo());
        assert!(!editor.undo());
        assert_eq!(editor.document().root.width, 7);
    }
}
