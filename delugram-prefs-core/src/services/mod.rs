//! Preferences page service layer
//!
//! - `AllowListController`: pure state + decisions, returns commands
//! - `PreferencesPage`: runs commands against an injected `RemoteConfigClient`
//! - `PluginUi`: registers the page with the host

mod plugin_ui;
mod preferences_controller;
mod preferences_page;

pub use plugin_ui::{PluginUi, PAGE_NAME};
pub use preferences_controller::{AllowListController, Command, Notice, Outcome};
pub use preferences_page::PreferencesPage;
