//! Document update functions for text editing and undo/redo

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages (text editing, undo/redo)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let result = match msg {
        DocumentMsg::InsertChar(ch) => model.insert_char(ch),
        DocumentMsg::InsertNewline => model.insert_char('\n'),
        DocumentMsg::DeleteBackward => model.delete_backward(),
        DocumentMsg::Undo => {
            return model.undo().then_some(Cmd::Redraw);
        }
        DocumentMsg::Redo => {
            return model.redo().then_some(Cmd::Redraw);
        }
    };

    match result {
        Ok(()) => Some(Cmd::Redraw),
        Err(e) => {
            tracing::warn!(error = %e, "edit rejected");
            model
                .ui
                .set_transient(format!("Cannot edit: {}", e), Duration::from_millis(2000));
            Some(Cmd::redraw_status_bar())
        }
    }
}
