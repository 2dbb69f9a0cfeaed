//! Remote configuration store abstract Trait

use async_trait::async_trait;

use crate::error::PrefsResult;
use crate::types::{ConfigSnapshot, ConfigValues, EntryKind};

/// Asynchronous request/response boundary to the authoritative store.
///
/// `K` selects which allow-list (`chats` / `users`) the entry calls address.
///
/// Platform implementation:
/// - `InMemoryPrefsServer` (loopback, demos and tests)
/// - `DelugeWebClient` (Deluge Web UI JSON-RPC)
#[async_trait]
pub trait RemoteConfigClient<K: EntryKind>: Send + Sync {
    /// Read the complete configuration (`get_config`)
    async fn get_config(&self) -> PrefsResult<ConfigSnapshot>;

    /// Overwrite the scalar fields (`set_config`)
    ///
    /// # Arguments
    /// * `values` - Token and administrator identity
    async fn set_config(&self, values: &ConfigValues) -> PrefsResult<()>;

    /// Add one entry (`add_chat` / `add_user`)
    ///
    /// Returns `false` when the server already holds an entry with this id.
    ///
    /// # Arguments
    /// * `id` - Entry identifier, forwarded as-is
    /// * `name` - Display name, forwarded as-is
    async fn add_entry(&self, id: &str, name: &str) -> PrefsResult<bool>;

    /// Remove every entry with this id (`remove_chat` / `remove_user`)
    ///
    /// # Arguments
    /// * `id` - Entry identifier
    async fn remove_entry(&self, id: &str) -> PrefsResult<()>;
}
