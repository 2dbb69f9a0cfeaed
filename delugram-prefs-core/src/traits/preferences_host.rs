//! Host page registry abstract Trait

use std::fmt;

/// Host callbacks a preferences page subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefsHook {
    /// The preferences dialog became visible
    ShowPrefs,
    /// The operator pressed Apply/OK in the preferences dialog
    ApplyPrefs,
}

impl PrefsHook {
    pub fn name(self) -> &'static str {
        match self {
            Self::ShowPrefs => "on_show_prefs",
            Self::ApplyPrefs => "on_apply_prefs",
        }
    }
}

impl fmt::Display for PrefsHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Page registry and hook manager of the hosting application.
pub trait PreferencesHost: Send + Sync {
    /// Add a named page to the preferences dialog
    fn add_page(&self, name: &str);

    /// Remove a previously added page
    fn remove_page(&self, name: &str);

    /// Subscribe the page to a host hook
    fn register_hook(&self, hook: PrefsHook);

    /// Drop a hook subscription
    fn deregister_hook(&self, hook: PrefsHook);
}
