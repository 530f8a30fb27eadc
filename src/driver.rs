//! Typing text into a model one keystroke at a time
//!
//! The command-line driver and its tests share this loop, so both go through
//! the same `update` path an interactive editor would.

use crate::messages::{EditorMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

/// Width of the status line printed by the driver
pub const STATUS_LINE_WIDTH: usize = 100;

/// Type `text` into `model`, returning the last status message shown
///
/// With `append`, the cursor moves to the end of the document before each
/// character, so typing carries on after the trigger character of a
/// correction. Otherwise characters go wherever the cursor is. `\r` is
/// dropped so CRLF input types as a single newline.
pub fn type_input(model: &mut AppModel, text: &str, append: bool) -> Option<String> {
    let mut last_status: Option<String> = None;
    for ch in text.chars().filter(|&ch| ch != '\r') {
        if append {
            update(model, Msg::Editor(EditorMsg::MoveCursorDocumentEnd));
        }
        update(model, Msg::typed(ch));
        if let Some(status) = model.status_text() {
            if last_status.as_deref() != Some(status) {
                last_status = Some(status.to_string());
            }
        }
    }
    last_status
}

/// The status bar rendered as one line of `width` characters
pub fn status_line(model: &AppModel, width: usize) -> String {
    model.ui.status_bar.layout(width).to_line(width)
}
