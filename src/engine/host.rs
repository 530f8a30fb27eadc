//! The seam between the engine and the editor it runs inside.
//!
//! The engine owns no document. Everything it reads (configuration, line
//! text, which document is active) and everything it does (replace text,
//! move the cursor, draw hints) goes through [`EditorHost`]. Change
//! notifications flow the other way through [`ChangeListener`].

use std::time::Duration;

use crate::config::AutocorrectConfig;
use crate::position::{Position, TextRange};

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// One discrete edit inside a change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    /// Range that was replaced, in coordinates from before the change
    pub range: TextRange,
    /// Text that now occupies the range
    pub text: String,
}

impl TextChange {
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            range: TextRange::point(at),
            text: text.into(),
        }
    }
}

/// A document-change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub document: DocumentId,
    pub changes: Vec<TextChange>,
}

impl ChangeEvent {
    pub fn single(document: DocumentId, change: TextChange) -> Self {
        Self {
            document,
            changes: vec![change],
        }
    }
}

/// A replace request sent to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub document: DocumentId,
    pub range: TextRange,
    pub text: String,
    /// Document version the edit was planned against
    pub version: u64,
}

/// Why the host refused an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    DocumentNotFound(DocumentId),
    ReadOnly(DocumentId),
    /// The document changed between planning and applying
    VersionMismatch { expected: u64, actual: u64 },
    RangeOutOfBounds(TextRange),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::DocumentNotFound(id) => write!(f, "document {} not found", id.0),
            EditError::ReadOnly(id) => write!(f, "document {} is read-only", id.0),
            EditError::VersionMismatch { expected, actual } => write!(
                f,
                "document changed concurrently (expected version {}, found {})",
                expected, actual
            ),
            EditError::RangeOutOfBounds(range) => {
                write!(f, "range {}..{} is out of bounds", range.start, range.end)
            }
        }
    }
}

impl std::error::Error for EditError {}

/// Editor services the engine depends on
pub trait EditorHost {
    /// Current configuration; read on every event, never cached by the engine
    fn configuration(&self) -> &AutocorrectConfig;

    /// Document shown in the active editing view, if any
    fn active_document(&self) -> Option<DocumentId>;

    /// Language id of a document (e.g. `rust`, `plaintext`)
    fn document_language(&self, document: DocumentId) -> Option<String>;

    /// Monotonic version counter, bumped on every mutation
    fn document_version(&self, document: DocumentId) -> Option<u64>;

    /// Text of a line without its line ending
    fn line_text(&self, document: DocumentId, line: usize) -> Option<String>;

    /// Atomically replace `edit.range` with `edit.text`
    ///
    /// Hosts deliver the resulting change notification before returning.
    fn apply_edit(&mut self, edit: &TextEdit) -> Result<(), EditError>;

    /// Collapse the selection to a cursor at `pos`
    fn set_cursor(&mut self, pos: Position);

    /// Scroll so that `pos` is visible
    fn reveal(&mut self, pos: Position);

    /// Draw a decorative hint at `pos`, cleared after `duration`
    fn show_annotation(&mut self, pos: Position, label: &str, duration: Duration);

    /// Remove every hint; a no-op when none are shown
    fn clear_annotations(&mut self);

    /// Show a status message that disappears after `duration`
    fn show_status_message(&mut self, text: String, duration: Duration);

    /// Update the persistent on/off indicator
    fn set_indicator(&mut self, text: &str, tooltip: &str);
}

/// Receiver of document-change notifications
pub trait ChangeListener {
    fn on_document_change(&self, event: &ChangeEvent, host: &mut dyn EditorHost);
}
