//! Plugin UI activation boundary
//!
//! Enabling the plugin adds the preferences page to the host and subscribes it
//! to the show/apply hooks; disabling undoes both.

use std::sync::Arc;

use crate::traits::{PreferencesHost, PrefsHook};

/// Default page name in the host registry
pub const PAGE_NAME: &str = "delugram";

const HOOKS: [PrefsHook; 2] = [PrefsHook::ApplyPrefs, PrefsHook::ShowPrefs];

pub struct PluginUi {
    host: Arc<dyn PreferencesHost>,
    page_name: String,
    enabled: bool,
}

impl PluginUi {
    #[must_use]
    pub fn new(host: Arc<dyn PreferencesHost>) -> Self {
        Self::with_page_name(host, PAGE_NAME)
    }

    #[must_use]
    pub fn with_page_name(host: Arc<dyn PreferencesHost>, page_name: impl Into<String>) -> Self {
        Self {
            host,
            page_name: page_name.into(),
            enabled: false,
        }
    }

    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Register the page and its hooks. A second call does nothing.
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.host.add_page(&self.page_name);
        for hook in HOOKS {
            self.host.register_hook(hook);
        }
        self.enabled = true;
        log::info!("preferences page '{}' enabled", self.page_name);
    }

    /// Unregister the page and its hooks. A second call does nothing.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.host.remove_page(&self.page_name);
        for hook in HOOKS {
            self.host.deregister_hook(hook);
        }
        self.enabled = false;
        log::info!("preferences page '{}' disabled", self.page_name);
    }
}
