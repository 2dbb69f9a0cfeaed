//! Platform-agnostic application bootstrap for the Delugram preferences page.
//!
//! Provides `PrefsApp` (page + plugin activation), `PrefsAppBuilder` (adapter injection),
//! `create_client` (backend selection from `ClientConfig`), and the concrete
//! `RemoteConfigClient` adapters.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use delugram_prefs_core::error::{PrefsError, PrefsResult};
use delugram_prefs_core::services::{PluginUi, PreferencesPage, PAGE_NAME};
use delugram_prefs_core::traits::{PreferencesHost, PrefsHook, RemoteConfigClient};
use delugram_prefs_core::types::EntryKind;

use crate::adapters::InMemoryPrefsServer;
pub use crate::config::{Backend, ClientConfig, WebConfig};

/// Build the remote store client selected by `config.backend`.
pub fn create_client<K: EntryKind>(
    config: &ClientConfig,
) -> PrefsResult<Arc<dyn RemoteConfigClient<K>>> {
    match config.backend {
        Backend::Memory => {
            log::info!("using in-memory preferences server");
            Ok(Arc::new(InMemoryPrefsServer::new()))
        }
        #[cfg(feature = "deluge-web")]
        Backend::DelugeWeb => {
            log::info!("using Deluge Web JSON-RPC at {}", config.web.url);
            Ok(Arc::new(adapters::DelugeWebClient::new(
                &config.web,
                &config.plugin,
            )?))
        }
        #[cfg(not(feature = "deluge-web"))]
        Backend::DelugeWeb => Err(PrefsError::Config(
            "built without the deluge-web feature".to_string(),
        )),
    }
}

/// One preferences page and its activation state.
pub struct PrefsApp<K: EntryKind> {
    /// The page (controller + in-flight calls)
    pub page: PreferencesPage<K>,
    /// Host registration
    pub plugin: PluginUi,
}

impl<K: EntryKind> PrefsApp<K> {
    /// Register the page with the host
    pub fn enable(&mut self) {
        self.plugin.enable();
    }

    /// Unregister the page from the host
    pub fn disable(&mut self) {
        self.plugin.disable();
    }

    /// Route a host hook to the page. Ignored while disabled.
    pub fn on_hook(&mut self, hook: PrefsHook) {
        if !self.plugin.is_enabled() {
            log::debug!("ignoring {hook} while disabled");
            return;
        }
        match hook {
            PrefsHook::ShowPrefs => self.page.show(),
            PrefsHook::ApplyPrefs => {
                log::debug!("applying prefs for {}", self.plugin.page_name());
                self.page.save();
            }
        }
    }
}

/// Builder for constructing `PrefsApp` with platform-specific adapters.
///
/// # Required adapters
/// - `client`: how the remote store is reached
/// - `host`: the page registry the page is added to
///
/// # Optional
/// - `page_name`: defaults to `PAGE_NAME`
pub struct PrefsAppBuilder<K: EntryKind> {
    client: Option<Arc<dyn RemoteConfigClient<K>>>,
    host: Option<Arc<dyn PreferencesHost>>,
    page_name: Option<String>,
}

impl<K: EntryKind> PrefsAppBuilder<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: None,
            host: None,
            page_name: None,
        }
    }

    #[must_use]
    pub fn client(mut self, client: Arc<dyn RemoteConfigClient<K>>) -> Self {
        self.client = Some(client);
        self
    }

    #[must_use]
    pub fn host(mut self, host: Arc<dyn PreferencesHost>) -> Self {
        self.host = Some(host);
        self
    }

    #[must_use]
    pub fn page_name(mut self, name: impl Into<String>) -> Self {
        self.page_name = Some(name.into());
        self
    }

    /// Build the `PrefsApp`.
    ///
    /// # Errors
    /// Returns `PrefsError::Config` if required adapters are missing.
    pub fn build(self) -> PrefsResult<PrefsApp<K>> {
        let client = self
            .client
            .ok_or_else(|| PrefsError::Config("client is required".to_string()))?;
        let host = self
            .host
            .ok_or_else(|| PrefsError::Config("host is required".to_string()))?;
        let page_name = self.page_name.unwrap_or_else(|| PAGE_NAME.to_string());

        Ok(PrefsApp {
            page: PreferencesPage::new(client),
            plugin: PluginUi::with_page_name(host, page_name),
        })
    }
}

impl<K: EntryKind> Default for PrefsAppBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
