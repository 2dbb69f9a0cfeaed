//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};

use crate::error::{PrefsError, PrefsResult};
use crate::services::PreferencesPage;
use crate::traits::{PreferencesHost, PrefsHook, RemoteConfigClient};
use crate::types::{Chats, ConfigSnapshot, ConfigValues, Entry, EntryKind};

// ===== MockRemoteConfig =====

/// Scriptable remote store.
///
/// Records every call by method name, fails methods on request, and can hold
/// `get_config` answers behind a gate to simulate reordered responses.
pub struct MockRemoteConfig {
    state: Mutex<ConfigSnapshot>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<String>>,
    /// Consumed by `get_config` in call order before falling back to `state`
    scripted: Mutex<VecDeque<(ConfigSnapshot, oneshot::Receiver<()>)>>,
}

impl MockRemoteConfig {
    pub fn new(initial: ConfigSnapshot) -> Self {
        Self {
            state: Mutex::new(initial),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            scripted: Mutex::new(VecDeque::new()),
        }
    }

    /// Make every later call of `method` fail
    pub async fn fail(&self, method: &str) {
        self.failing.lock().await.insert(method.to_string());
    }

    /// Queue a `get_config` answer that is held until the returned sender fires
    pub async fn script(&self, snapshot: ConfigSnapshot) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.scripted.lock().await.push_back((snapshot, rx));
        tx
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn count(&self, method: &str) -> usize {
        self.calls.lock().await.iter().filter(|m| *m == method).count()
    }

    async fn record(&self, method: &str) -> PrefsResult<()> {
        self.calls.lock().await.push(method.to_string());
        if self.failing.lock().await.contains(method) {
            return Err(PrefsError::Rpc {
                method: method.to_string(),
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl<K: EntryKind> RemoteConfigClient<K> for MockRemoteConfig {
    async fn get_config(&self) -> PrefsResult<ConfigSnapshot> {
        self.record("get_config").await?;
        let scripted = self.scripted.lock().await.pop_front();
        if let Some((snapshot, gate)) = scripted {
            let _ = gate.await;
            return Ok(snapshot);
        }
        Ok(self.state.lock().await.clone())
    }

    async fn set_config(&self, values: &ConfigValues) -> PrefsResult<()> {
        self.record("set_config").await?;
        let mut state = self.state.lock().await;
        state.telegram_token.clone_from(&values.telegram_token);
        state.admin_chat_id.clone_from(&values.admin_chat_id);
        Ok(())
    }

    async fn add_entry(&self, id: &str, name: &str) -> PrefsResult<bool> {
        self.record(K::ADD_METHOD).await?;
        let mut state = self.state.lock().await;
        if state.entries.iter().any(|e| e.id == id) {
            return Ok(false);
        }
        state.entries.push(Entry::new(id, name));
        Ok(true)
    }

    async fn remove_entry(&self, id: &str) -> PrefsResult<()> {
        self.record(K::REMOVE_METHOD).await?;
        self.state.lock().await.entries.retain(|e| e.id != id);
        Ok(())
    }
}

// ===== RecordingHost =====

/// Host registry that records pages and hooks
#[derive(Default)]
pub struct RecordingHost {
    pub pages: std::sync::Mutex<Vec<String>>,
    pub hooks: std::sync::Mutex<Vec<PrefsHook>>,
}

impl PreferencesHost for RecordingHost {
    fn add_page(&self, name: &str) {
        self.pages.lock().unwrap().push(name.to_string());
    }

    fn remove_page(&self, name: &str) {
        self.pages.lock().unwrap().retain(|p| p != name);
    }

    fn register_hook(&self, hook: PrefsHook) {
        self.hooks.lock().unwrap().push(hook);
    }

    fn deregister_hook(&self, hook: PrefsHook) {
        self.hooks.lock().unwrap().retain(|h| *h != hook);
    }
}

// ===== Factory methods =====

pub fn snapshot(token: &str, admin: &str, entries: &[(&str, &str)]) -> ConfigSnapshot {
    ConfigSnapshot {
        telegram_token: token.to_string(),
        admin_chat_id: admin.to_string(),
        entries: entries
            .iter()
            .map(|(id, name)| Entry::new(*id, *name))
            .collect(),
    }
}

/// Create a chat page backed by a fresh mock
pub fn create_test_page(initial: ConfigSnapshot) -> (PreferencesPage<Chats>, Arc<MockRemoteConfig>) {
    let mock = Arc::new(MockRemoteConfig::new(initial));
    let page = PreferencesPage::<Chats>::new(mock.clone());
    (page, mock)
}
