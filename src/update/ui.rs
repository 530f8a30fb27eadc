//! UI update functions for status messages and timers

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetTransientMessage { text, duration_ms } => {
            model
                .ui
                .set_transient(text, Duration::from_millis(duration_ms));
            Some(Cmd::redraw_status_bar())
        }

        UiMsg::ClearTransientMessage => {
            model.ui.transient_message = None;
            Some(Cmd::redraw_status_bar())
        }

        UiMsg::Tick(now) => {
            if model.tick(now) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
