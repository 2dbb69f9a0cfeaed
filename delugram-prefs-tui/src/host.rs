//! The terminal as preferences host
//!
//! Keeps the registered page names and hook subscriptions so the view can
//! show what the plugin registered and the loop knows which hooks to fire.

use std::sync::{Mutex, PoisonError};

use delugram_prefs_core::traits::{PreferencesHost, PrefsHook};

#[derive(Debug, Default)]
pub struct TuiHost {
    pages: Mutex<Vec<String>>,
    hooks: Mutex<Vec<PrefsHook>>,
}

impl TuiHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// First registered page, used as the window title
    pub fn page(&self) -> Option<String> {
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .first()
            .cloned()
    }

    pub fn is_subscribed(&self, hook: PrefsHook) -> bool {
        self.hooks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&hook)
    }
}

impl PreferencesHost for TuiHost {
    fn add_page(&self, name: &str) {
        log::debug!("page added: {name}");
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.to_string());
    }

    fn remove_page(&self, name: &str) {
        log::debug!("page removed: {name}");
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|p| p != name);
    }

    fn register_hook(&self, hook: PrefsHook) {
        self.hooks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(hook);
    }

    fn deregister_hook(&self, hook: PrefsHook) {
        self.hooks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|h| *h != hook);
    }
}
