//! Collaborator abstraction trait definitions

mod preferences_host;
mod remote_config_client;

pub use preferences_host::{PreferencesHost, PrefsHook};
pub use remote_config_client::RemoteConfigClient;
