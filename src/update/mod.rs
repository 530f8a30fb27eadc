//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;
mod ui;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::{Msg, UiMsg};
use crate::model::sync_status_bar;
use crate::model::AppModel;

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Skip logging for noisy periodic messages
    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::Tick(_)));
    let _span = if is_noisy {
        None
    } else {
        let msg_name = msg_type_name(&msg);
        debug!(target: "message", msg = %msg_name, "processing");
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let result = match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    // Sync status bar segments after state changes
    sync_status_bar(model);

    result
}

/// Short name of a message for logs (e.g. `Document::InsertChar`)
fn msg_type_name(msg: &Msg) -> String {
    let (group, inner) = match msg {
        Msg::Editor(m) => ("Editor", format!("{:?}", m)),
        Msg::Document(m) => ("Document", format!("{:?}", m)),
        Msg::Ui(m) => ("Ui", format!("{:?}", m)),
        Msg::App(m) => ("App", format!("{:?}", m)),
    };
    let variant = inner
        .split(|c: char| c == '(' || c == ' ' || c == '{')
        .next()
        .unwrap_or_default();
    format!("{}::{}", group, variant)
}
