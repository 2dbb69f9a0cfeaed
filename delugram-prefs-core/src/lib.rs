//! Delugram Preferences Core Library
//!
//! Client-side state reconciliation for the Delugram allow-list preferences page:
//! - the displayed entry list and scalar fields (`EntryListModel`, `AllowListController`)
//! - the modal add interaction (`AddEntryFlow`)
//! - the single-threaded driver that runs RPC calls and applies their results (`PreferencesPage`)
//! - the host activation boundary (`PluginUi`)
//!
//! This library performs no I/O of its own. The remote store is reached through the
//! `RemoteConfigClient` trait and the host page registry through `PreferencesHost`,
//! both injected by the platform layer.

pub mod error;
pub mod model;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{PrefsError, PrefsResult};
pub use model::{AddEntryFlow, EntryDraft, EntryListModel};
pub use services::{
    AllowListController, Command, Notice, Outcome, PluginUi, PreferencesPage, PAGE_NAME,
};
pub use traits::{PreferencesHost, PrefsHook, RemoteConfigClient};
pub use types::{Chats, ConfigSnapshot, ConfigValues, Entry, EntryKind, EntryKindId, Users};
