//! In-process preferences server
//!
//! Behaves like the plugin's RPC surface: placeholder defaults, whole-value
//! `set_config`, validated and de-duplicated adds, filtering removes.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use delugram_prefs_core::error::{PrefsError, PrefsResult};
use delugram_prefs_core::traits::RemoteConfigClient;
use delugram_prefs_core::types::{ConfigSnapshot, ConfigValues, Entry, EntryKind};
use tokio::sync::RwLock;

/// Token value before the operator configured one; the bot stays stopped while it is set
pub const DEFAULT_TELEGRAM_TOKEN: &str =
    "Contact @BotFather, create a new bot and get a bot token";

pub const DEFAULT_ADMIN_CHAT_ID: &str =
    "Telegram chat id of the administrator. Use @userinfobot to get the chat id";

#[derive(Debug)]
struct ServerState {
    telegram_token: String,
    admin_chat_id: String,
    /// Entry lists keyed by `EntryKind::LIST_KEY`
    lists: HashMap<&'static str, Vec<Entry>>,
}

impl Default for ServerState {
    fn default() -> Self {
        Self {
            telegram_token: DEFAULT_TELEGRAM_TOKEN.to_string(),
            admin_chat_id: DEFAULT_ADMIN_CHAT_ID.to_string(),
            lists: HashMap::new(),
        }
    }
}

/// In-memory implementation of every allow-list kind
#[derive(Debug, Default)]
pub struct InMemoryPrefsServer {
    state: RwLock<ServerState>,
    /// Methods whose next call fails once
    fail_next: RwLock<HashSet<String>>,
}

impl InMemoryPrefsServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the list of kind `K`
    #[must_use]
    pub fn with_entries<K: EntryKind>(mut self, entries: Vec<Entry>) -> Self {
        self.state.get_mut().lists.insert(K::LIST_KEY, entries);
        self
    }

    /// Seed the scalar fields
    #[must_use]
    pub fn with_values(mut self, values: ConfigValues) -> Self {
        let state = self.state.get_mut();
        state.telegram_token = values.telegram_token;
        state.admin_chat_id = values.admin_chat_id;
        self
    }

    /// Whether the token was changed from its placeholder
    pub async fn is_token_configured(&self) -> bool {
        let state = self.state.read().await;
        state.telegram_token != DEFAULT_TELEGRAM_TOKEN
    }

    /// Entries of kind `K`, in insertion order
    pub async fn entries<K: EntryKind>(&self) -> Vec<Entry> {
        self.state
            .read()
            .await
            .lists
            .get(K::LIST_KEY)
            .cloned()
            .unwrap_or_default()
    }

    /// Make the next call of `method` fail with an RPC error
    pub async fn fail_next(&self, method: &str) {
        self.fail_next.write().await.insert(method.to_string());
    }

    async fn check_injected(&self, method: &str) -> PrefsResult<()> {
        if self.fail_next.write().await.remove(method) {
            log::warn!("injected failure for {method}");
            return Err(PrefsError::Rpc {
                method: method.to_string(),
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl<K: EntryKind> RemoteConfigClient<K> for InMemoryPrefsServer {
    async fn get_config(&self) -> PrefsResult<ConfigSnapshot> {
        self.check_injected("get_config").await?;
        let state = self.state.read().await;
        Ok(ConfigSnapshot {
            telegram_token: state.telegram_token.clone(),
            admin_chat_id: state.admin_chat_id.clone(),
            entries: state.lists.get(K::LIST_KEY).cloned().unwrap_or_default(),
        })
    }

    async fn set_config(&self, values: &ConfigValues) -> PrefsResult<()> {
        self.check_injected("set_config").await?;
        let mut state = self.state.write().await;
        state.telegram_token.clone_from(&values.telegram_token);
        state.admin_chat_id.clone_from(&values.admin_chat_id);
        log::debug!("config saved");
        Ok(())
    }

    async fn add_entry(&self, id: &str, name: &str) -> PrefsResult<bool> {
        self.check_injected(K::ADD_METHOD).await?;
        if id.is_empty() || name.is_empty() {
            return Err(PrefsError::Validation(format!(
                "Invalid {} ID or Name",
                K::title_label()
            )));
        }

        let mut state = self.state.write().await;
        let list = state.lists.entry(K::LIST_KEY).or_default();
        if list.iter().any(|e| e.id == id) {
            log::debug!("{} {id} already registered", K::LABEL);
            return Ok(false);
        }
        list.push(Entry::new(id, name));
        Ok(true)
    }

    async fn remove_entry(&self, id: &str) -> PrefsResult<()> {
        self.check_injected(K::REMOVE_METHOD).await?;
        let mut state = self.state.write().await;
        if let Some(list) = state.lists.get_mut(K::LIST_KEY) {
            list.retain(|e| e.id != id);
        }
        Ok(())
    }
}
