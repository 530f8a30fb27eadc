//! Editor update functions for cursor movement

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::AppModel;
use crate::position::Position;

/// Handle editor messages (cursor movement)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => model.move_cursor(direction),
        EditorMsg::MoveCursorLineEnd => model.move_cursor_line_end(),
        EditorMsg::MoveCursorDocumentEnd => model.move_cursor_document_end(),
        EditorMsg::SetCursorPosition { line, column } => {
            let line = line.min(model.document.line_count().saturating_sub(1));
            let column = column.min(model.document.line_length(line));
            model.move_cursor_to(Position::new(line, column));
        }
    }
    Some(Cmd::Redraw)
}
