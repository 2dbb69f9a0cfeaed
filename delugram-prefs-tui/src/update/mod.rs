//! Update layer
//!
//! The only place that mutates the model. Intents are forwarded to the page,
//! which queues the RPC calls; the main loop applies their results later.
//! Every update ends by moving controller notices into the status line.

mod modal;

use delugram_prefs_core::traits::PrefsHook;
use delugram_prefs_core::types::EntryKind;

use crate::message::AppMessage;
use crate::model::{AddField, App, Focus};

pub fn update<K: EntryKind>(app: &mut App<K>, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::NextFocus => app.focus = app.focus.next(),
        AppMessage::PrevFocus => app.focus = app.focus.prev(),

        AppMessage::Reload => {
            app.prefs.page.reload();
            app.set_progress("Reloading...");
        }

        AppMessage::Apply => {
            if app.host.is_subscribed(PrefsHook::ApplyPrefs) {
                app.prefs.on_hook(PrefsHook::ApplyPrefs);
                app.set_progress("Saving...");
            } else {
                app.set_error("Page is not registered, nothing to apply");
            }
        }

        AppMessage::OpenAdd => {
            app.prefs.page.open_add();
            app.add_field = AddField::Id;
        }

        AppMessage::Remove => {
            let id = app.controller().selected().map(|e| e.id.clone());
            match app.prefs.page.remove_selected() {
                Ok(()) => {
                    let id = id.unwrap_or_default();
                    app.set_progress(format!("Removing {} {id}...", K::LABEL));
                }
                Err(e) => {
                    e.log("remove");
                    app.set_error(format!("Select a {} to remove", K::LABEL));
                }
            }
        }

        AppMessage::SelectPrevious => {
            app.prefs.page.select_previous();
        }
        AppMessage::SelectNext => {
            app.prefs.page.select_next();
        }
        AppMessage::SelectFirst => {
            if !app.controller().list().is_empty() {
                app.prefs.page.select(Some(0));
            }
        }
        AppMessage::SelectLast => {
            let len = app.controller().list().len();
            if len > 0 {
                app.prefs.page.select(Some(len - 1));
            }
        }

        AppMessage::Input(c) => {
            if let Some(field) = focused_field(app) {
                field.push(c);
            }
        }
        AppMessage::Backspace => {
            if let Some(field) = focused_field(app) {
                field.pop();
            }
        }

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::ToggleHelp => app.show_help = !app.show_help,
        AppMessage::ClearStatus => app.clear_status(),

        AppMessage::Noop => {}
    }

    app.drain_notices();
}

/// Scalar field under the cursor, if a text field has focus
fn focused_field<K: EntryKind>(app: &mut App<K>) -> Option<&mut String> {
    let values = app.prefs.page.controller_mut().values_mut();
    match app.focus {
        Focus::Token => Some(&mut values.telegram_token),
        Focus::AdminChatId => Some(&mut values.admin_chat_id),
        Focus::List => None,
    }
}
