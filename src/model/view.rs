//! Editor view - cursor, viewport, and decorative annotations for the
//! document being edited

use std::time::{Duration, Instant};

use crate::engine::DocumentId;
use crate::position::Position;

/// Visible region of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Number of columns that fit in the viewport
    pub visible_columns: usize,
}

impl Viewport {
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.line >= self.top_line
            && pos.line < self.top_line + self.visible_lines
            && pos.column >= self.left_column
            && pos.column < self.left_column + self.visible_columns
    }

    /// Scroll the minimum amount needed to show `pos`
    pub fn reveal(&mut self, pos: Position) {
        if self.visible_lines > 0 {
            if pos.line < self.top_line {
                self.top_line = pos.line;
            } else if pos.line >= self.top_line + self.visible_lines {
                self.top_line = pos.line + 1 - self.visible_lines;
            }
        }

        if self.visible_columns > 0 {
            if pos.column < self.left_column {
                self.left_column = pos.column;
            } else if pos.column >= self.left_column + self.visible_columns {
                self.left_column = pos.column + 1 - self.visible_columns;
            }
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(25, 80)
    }
}

/// A short-lived inline hint drawn after a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub position: Position,
    pub label: String,
    pub expires_at: Instant,
}

impl Annotation {
    pub fn new(position: Position, label: impl Into<String>, duration: Duration) -> Self {
        Self {
            position,
            label: label.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// The editing view bound to one document
#[derive(Debug, Clone)]
pub struct EditorView {
    pub document_id: DocumentId,
    pub cursor: Position,
    pub viewport: Viewport,
    pub annotations: Vec<Annotation>,
}

impl EditorView {
    pub fn new(document_id: DocumentId) -> Self {
        Self {
            document_id,
            cursor: Position::zero(),
            viewport: Viewport::default(),
            annotations: Vec::new(),
        }
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Remove every annotation; clearing an empty set does nothing
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    /// Drop expired annotations, returning whether any were removed
    pub fn expire_annotations(&mut self, now: Instant) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| !a.is_expired_at(now));
        self.annotations.len() != before
    }
}
