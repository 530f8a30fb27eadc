//! Document model - represents the text buffer and file state

use ropey::Rope;
use std::borrow::Cow;
use std::path::PathBuf;

use super::language::{language_from_path, PLAIN_TEXT};
use crate::engine::{DocumentId, EditError, TextChange};
use crate::position::{Position, TextRange};

/// One undoable replacement, in char offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    pub start: usize,
    pub deleted: String,
    pub inserted: String,
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Language id used to pick rule scopes
    pub language: String,
    /// Edits are rejected while set
    pub read_only: bool,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Incremented on each mutation; edits planned against an older
    /// version are rejected
    pub version: u64,
    pub undo_stack: Vec<EditOperation>,
    pub redo_stack: Vec<EditOperation>,
}

impl Document {
    /// Create a new empty document
    pub fn new(id: DocumentId) -> Self {
        Self::with_text(id, "")
    }

    /// Create a document with initial text
    pub fn with_text(id: DocumentId, text: &str) -> Self {
        Self {
            id,
            buffer: Rope::from(text),
            file_path: None,
            language: PLAIN_TEXT.to_string(),
            read_only: false,
            is_modified: false,
            version: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Load a document from a file path
    pub fn from_file(id: DocumentId, path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        let mut doc = Self::with_text(id, &content);
        doc.language = language_from_path(&path).to_string();
        doc.file_path = Some(path);
        Ok(doc)
    }

    /// Set the language id (builder pattern)
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// File name if saved, "Untitled" otherwise
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Line content without its trailing line ending
    ///
    /// Borrows when the line is stored contiguously in one rope chunk.
    pub fn line_text(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }

        let line = self.buffer.line(line_idx);
        let len = line.len_chars();
        let trim_len = if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2
            } else {
                1
            }
        } else {
            0
        };

        let trimmed = line.slice(..len - trim_len);
        match trimmed.as_str() {
            Some(s) => Some(Cow::Borrowed(s)),
            None => Some(Cow::Owned(trimmed.to_string())),
        }
    }

    /// Length of a line in chars (excluding line ending)
    pub fn line_length(&self, line_idx: usize) -> usize {
        self.line_text(line_idx)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    /// Char offset of a position, or None if it lies outside the text
    pub fn position_to_offset(&self, pos: Position) -> Option<usize> {
        if pos.line >= self.buffer.len_lines() || pos.column > self.line_length(pos.line) {
            return None;
        }
        Some(self.buffer.line_to_char(pos.line) + pos.column)
    }

    /// Position of a char offset (clamped to the end of the buffer)
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        Position::new(line, clamped - self.buffer.line_to_char(line))
    }

    /// Replace `range` with `text` as one undo step
    ///
    /// Returns the change in pre-edit coordinates for notification.
    pub fn replace(&mut self, range: TextRange, text: &str) -> Result<TextChange, EditError> {
        if self.read_only {
            return Err(EditError::ReadOnly(self.id));
        }
        let (Some(start), Some(end)) = (
            self.position_to_offset(range.start),
            self.position_to_offset(range.end),
        ) else {
            return Err(EditError::RangeOutOfBounds(range));
        };
        if end < start {
            return Err(EditError::RangeOutOfBounds(range));
        }

        let deleted = self.splice(start, end, text);
        self.undo_stack.push(EditOperation {
            start,
            deleted,
            inserted: text.to_string(),
        });
        self.redo_stack.clear();

        Ok(TextChange {
            range,
            text: text.to_string(),
        })
    }

    /// Revert the last edit; returns the change and where the cursor goes
    pub fn undo(&mut self) -> Option<(TextChange, Position)> {
        let op = self.undo_stack.pop()?;
        let change = self.revert(&op.inserted, &op.deleted, op.start);
        let cursor = self.offset_to_position(op.start + op.deleted.chars().count());
        self.redo_stack.push(op);
        Some((change, cursor))
    }

    /// Re-apply the last undone edit
    pub fn redo(&mut self) -> Option<(TextChange, Position)> {
        let op = self.redo_stack.pop()?;
        let change = self.revert(&op.deleted, &op.inserted, op.start);
        let cursor = self.offset_to_position(op.start + op.inserted.chars().count());
        self.undo_stack.push(op);
        Some((change, cursor))
    }

    /// Swap `current` (at `start`) back to `restored`
    fn revert(&mut self, current: &str, restored: &str, start: usize) -> TextChange {
        let end = start + current.chars().count();
        let range = TextRange::new(self.offset_to_position(start), self.offset_to_position(end));
        self.splice(start, end, restored);
        TextChange {
            range,
            text: restored.to_string(),
        }
    }

    fn splice(&mut self, start: usize, end: usize, text: &str) -> String {
        let deleted = self.buffer.slice(start..end).to_string();
        self.buffer.remove(start..end);
        self.buffer.insert(start, text);
        self.is_modified = true;
        self.version = self.version.wrapping_add(1);
        deleted
    }
}
