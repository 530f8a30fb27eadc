//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

use crate::commands::CommandId;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to end of document (Ctrl+End)
    MoveCursorDocumentEnd,
    /// Set cursor to specific position
    SetCursorPosition { line: usize, column: usize },
}

/// Document messages (text editing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a character at cursor position
    InsertChar(char),
    /// Insert a newline at cursor position
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
}

/// UI messages (status, timers)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Set a transient message that auto-expires
    SetTransientMessage { text: String, duration_ms: u64 },
    /// Clear the transient message
    ClearTransientMessage,
    /// Timer tick: expire annotations and transient messages
    Tick(Instant),
}

/// App messages (commands)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Run a registered command
    Command(CommandId),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Editor messages (cursor)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// UI messages (status, timers)
    Ui(UiMsg),
    /// App messages (commands)
    App(AppMsg),
}

impl Msg {
    /// Shorthand for typing one character
    pub fn typed(ch: char) -> Self {
        if ch == '\n' {
            Msg::Document(DocumentMsg::InsertNewline)
        } else {
            Msg::Document(DocumentMsg::InsertChar(ch))
        }
    }
}
