//! App update functions for registered commands

use std::time::Duration;

use crate::commands::{Cmd, CommandId};
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Command(id) => run_command(model, id),
    }
}

fn run_command(model: &mut AppModel, id: CommandId) -> Option<Cmd> {
    match id {
        CommandId::ToggleAutocorrect => {
            model.toggle_autocorrect();
            Some(Cmd::redraw_status_bar())
        }
        CommandId::Undo => model.undo().then_some(Cmd::Redraw),
        CommandId::Redo => model.redo().then_some(Cmd::Redraw),
        CommandId::ReloadConfiguration => {
            if !model.reload_config() {
                model
                    .ui
                    .set_transient("No configuration file to reload", Duration::from_millis(2000));
            }
            Some(Cmd::redraw_status_bar())
        }
    }
}
