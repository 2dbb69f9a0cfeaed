//! Add window updates

use delugram_prefs_core::types::EntryKind;

use crate::message::ModalMessage;
use crate::model::{AddField, App};

pub fn update<K: EntryKind>(app: &mut App<K>, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.prefs.page.cancel_add(),

        ModalMessage::NextField => app.add_field = app.add_field.toggle(),

        ModalMessage::Confirm => {
            let id = app
                .controller()
                .add_flow()
                .and_then(|flow| flow.draft())
                .map(|draft| draft.id.clone())
                .unwrap_or_default();
            match app.prefs.page.submit_add() {
                Ok(()) => app.set_progress(format!("Adding {} {id}...", K::LABEL)),
                Err(e) => {
                    e.log("submit add");
                    app.set_error(e.to_string());
                }
            }
        }

        ModalMessage::Input(c) => {
            let field = app.add_field;
            if let Some(draft) = app.prefs.page.controller_mut().add_draft_mut() {
                match field {
                    AddField::Id => draft.id.push(c),
                    AddField::Name => draft.name.push(c),
                }
            }
        }

        ModalMessage::Backspace => {
            let field = app.add_field;
            if let Some(draft) = app.prefs.page.controller_mut().add_draft_mut() {
                match field {
                    AddField::Id => draft.id.pop(),
                    AddField::Name => draft.name.pop(),
                };
            }
        }
    }
}
