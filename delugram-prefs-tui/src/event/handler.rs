//! Event handler

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use delugram_prefs_core::types::EntryKind;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ModalMessage};
use crate::model::App;

/// Translate one terminal event into a message
pub fn handle_event<K: EntryKind>(event: &Event, app: &App<K>) -> AppMessage {
    match event {
        Event::Key(key) => handle_key_event(*key, app),
        // Resize only needs a redraw, which every loop turn does
        _ => AppMessage::Noop,
    }
}

fn handle_key_event<K: EntryKind>(key: KeyEvent, app: &App<K>) -> AppMessage {
    // Press only; some terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) && !app.is_add_open() {
        return AppMessage::Quit;
    }

    if app.show_help {
        return AppMessage::ToggleHelp;
    }

    if app.is_add_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ToggleHelp;
    }
    if DefaultKeymap::RELOAD.matches(&key) || DefaultKeymap::RELOAD_ALT.matches(&key) {
        return AppMessage::Reload;
    }
    if DefaultKeymap::APPLY.matches(&key) {
        return AppMessage::Apply;
    }
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::OpenAdd;
    }
    if DefaultKeymap::ACTION_REMOVE.matches(&key) {
        return AppMessage::Remove;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::NextFocus;
    }
    // Some terminals report BackTab without SHIFT
    if key.code == KeyCode::BackTab {
        return AppMessage::PrevFocus;
    }

    if app.focus.is_text() {
        handle_field_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// Keys while a scalar text field has focus
fn handle_field_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            AppMessage::Input(c)
        }
        KeyCode::Backspace => AppMessage::Backspace,
        KeyCode::Enter | KeyCode::Down => AppMessage::NextFocus,
        KeyCode::Up => AppMessage::PrevFocus,
        _ => AppMessage::Noop,
    }
}

/// Keys while the entry list has focus
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
        return AppMessage::Noop;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => AppMessage::SelectNext,
        KeyCode::Home | KeyCode::Char('g') => AppMessage::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => AppMessage::SelectLast,
        KeyCode::Char('a') | KeyCode::Insert => AppMessage::OpenAdd,
        KeyCode::Char('d') | KeyCode::Delete => AppMessage::Remove,
        KeyCode::Char('r') => AppMessage::Reload,
        KeyCode::Char('?') => AppMessage::ToggleHelp,
        KeyCode::Char('q') => AppMessage::Quit,
        _ => AppMessage::Noop,
    }
}

/// Keys while the add window is open
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    let msg = match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => ModalMessage::Close,
        (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down) => {
            ModalMessage::NextField
        }
        (_, KeyCode::Enter) => ModalMessage::Confirm,
        (_, KeyCode::Backspace) => ModalMessage::Backspace,
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            ModalMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Focus;
    use crate::test_utils::{create_test_app, press};
    use delugram_prefs_core::types::Chats;

    #[test]
    fn typing_goes_to_focused_field() {
        let app = create_test_app::<Chats>();
        assert_eq!(
            handle_event(&press(KeyCode::Char('q')), &app),
            AppMessage::Input('q')
        );
    }

    #[test]
    fn list_keys_select_and_act() {
        let mut app = create_test_app::<Chats>();
        app.focus = Focus::List;

        assert_eq!(handle_event(&press(KeyCode::Down), &app), AppMessage::SelectNext);
        assert_eq!(handle_event(&press(KeyCode::Delete), &app), AppMessage::Remove);
        assert_eq!(handle_event(&press(KeyCode::Char('a')), &app), AppMessage::OpenAdd);
        assert_eq!(handle_event(&press(KeyCode::Char('q')), &app), AppMessage::Quit);
    }

    #[test]
    fn open_add_window_captures_keys() {
        let mut app = create_test_app::<Chats>();
        app.prefs.page.open_add();

        assert_eq!(
            handle_event(&press(KeyCode::Char('x')), &app),
            AppMessage::Modal(ModalMessage::Input('x'))
        );
        assert_eq!(
            handle_event(&press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        assert_eq!(
            handle_event(&press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        );
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = create_test_app::<Chats>();
        app.show_help = true;
        assert_eq!(
            handle_event(&press(KeyCode::Char('d')), &app),
            AppMessage::ToggleHelp
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = create_test_app::<Chats>();
        let mut key = KeyEvent::from(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(&Event::Key(key), &app), AppMessage::Noop);
    }
}
