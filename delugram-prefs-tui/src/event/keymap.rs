//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const RELOAD: KeyBinding = KeyBinding::key(KeyCode::F(5));
    pub const RELOAD_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const APPLY: KeyBinding = KeyBinding::ctrl(KeyCode::Char('s'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Focus
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // List actions
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_REMOVE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
}
