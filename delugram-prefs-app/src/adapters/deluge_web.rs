//! Deluge Web UI JSON-RPC client
//!
//! Calls `<plugin>.<method>` on the web UI's `/json` endpoint. The session
//! cookie set by `auth.login` is kept by the HTTP client; login happens lazily
//! before the first call and once more when the server reports the session
//! as unauthenticated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use delugram_prefs_core::error::{PrefsError, PrefsResult};
use delugram_prefs_core::traits::RemoteConfigClient;
use delugram_prefs_core::types::{ConfigSnapshot, ConfigValues, Entry, EntryKind};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::config::WebConfig;

/// Default connect timeout (seconds)
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Error code the web UI uses for calls made without a session
const NOT_AUTHENTICATED_CODE: i64 = 1;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    message: String,
    #[serde(default)]
    code: Option<i64>,
}

/// Build a JSON-RPC request body
pub fn encode_request(method: &str, params: Value, id: u64) -> Value {
    json!({
        "method": method,
        "params": params,
        "id": id,
    })
}

/// Decode a JSON-RPC response body into its `result`
pub fn decode_response(method: &str, body: &str) -> PrefsResult<Value> {
    let response: RpcResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("failed to parse {method} response: {e}");
        log::debug!("raw response: {body}");
        PrefsError::Serialization(e.to_string())
    })?;

    if let Some(error) = response.error {
        if error.code == Some(NOT_AUTHENTICATED_CODE) || error.message.contains("Not authenticated")
        {
            return Err(PrefsError::Unauthorized(error.message));
        }
        return Err(PrefsError::Rpc {
            method: method.to_string(),
            message: error.message,
        });
    }

    Ok(response.result.unwrap_or(Value::Null))
}

/// Read an opaque string that the server may hold as a number
fn opaque_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Decode a `get_config` result for entry kind `K`.
///
/// Unknown keys are ignored and a missing list is empty.
pub fn decode_snapshot<K: EntryKind>(value: &Value) -> PrefsResult<ConfigSnapshot> {
    let config = value
        .as_object()
        .ok_or_else(|| PrefsError::Serialization("config is not an object".to_string()))?;

    let entries = match config.get(K::LIST_KEY) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                let item = item.as_object().ok_or_else(|| {
                    PrefsError::Serialization(format!("{} item is not an object", K::LIST_KEY))
                })?;
                Ok(Entry {
                    id: opaque_string(item.get(K::ID_FIELD)),
                    name: opaque_string(item.get("name")),
                })
            })
            .collect::<PrefsResult<Vec<_>>>()?,
        Some(_) => {
            return Err(PrefsError::Serialization(format!(
                "{} is not a list",
                K::LIST_KEY
            )))
        }
    };

    Ok(ConfigSnapshot {
        telegram_token: opaque_string(config.get("telegram_token")),
        admin_chat_id: opaque_string(config.get("admin_chat_id")),
        entries,
    })
}

/// `RemoteConfigClient` over the Deluge Web UI
pub struct DelugeWebClient {
    http: Client,
    url: String,
    password: String,
    host_id: Option<String>,
    plugin: String,
    next_id: AtomicU64,
    logged_in: Mutex<bool>,
}

impl DelugeWebClient {
    pub fn new(config: &WebConfig, plugin: &str) -> PrefsResult<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PrefsError::Network(e.to_string()))?;

        Ok(Self {
            http,
            url: config.url.clone(),
            password: config.password.clone(),
            host_id: config.host_id.clone(),
            plugin: plugin.to_string(),
            next_id: AtomicU64::new(1),
            logged_in: Mutex::new(false),
        })
    }

    /// One round trip, no session handling
    async fn call_raw(&self, method: &str, params: Value) -> PrefsResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        log::debug!("POST {} {method} #{id}", self.url);

        let response = self
            .http
            .post(&self.url)
            .json(&encode_request(method, params, id))
            .send()
            .await
            .map_err(|e| PrefsError::Network(e.to_string()))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| PrefsError::Network(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(PrefsError::Network(format!("{method}: HTTP {status}")));
        }

        decode_response(method, &body)
    }

    async fn login(&self, logged_in: &mut bool) -> PrefsResult<()> {
        let result = self
            .call_raw("auth.login", json!([self.password]))
            .await?;
        if result != Value::Bool(true) {
            return Err(PrefsError::Unauthorized("login rejected".to_string()));
        }

        if let Some(host_id) = &self.host_id {
            let connected = self.call_raw("web.connected", json!([])).await?;
            if connected != Value::Bool(true) {
                log::info!("connecting web UI to daemon {host_id}");
                self.call_raw("web.connect", json!([host_id])).await?;
            }
        }

        *logged_in = true;
        log::info!("logged in to {}", self.url);
        Ok(())
    }

    /// Call a plugin method, logging in first if needed
    async fn call(&self, method: &str, params: Value) -> PrefsResult<Value> {
        let full_method = format!("{}.{method}", self.plugin);

        {
            let mut logged_in = self.logged_in.lock().await;
            if !*logged_in {
                self.login(&mut logged_in).await?;
            }
        }

        match self.call_raw(&full_method, params.clone()).await {
            Err(PrefsError::Unauthorized(msg)) => {
                log::warn!("session expired ({msg}), logging in again");
                let mut logged_in = self.logged_in.lock().await;
                *logged_in = false;
                self.login(&mut logged_in).await?;
                drop(logged_in);
                self.call_raw(&full_method, params).await
            }
            other => other,
        }
    }
}

#[async_trait]
impl<K: EntryKind> RemoteConfigClient<K> for DelugeWebClient {
    async fn get_config(&self) -> PrefsResult<ConfigSnapshot> {
        let value = self.call("get_config", json!([])).await?;
        decode_snapshot::<K>(&value)
    }

    async fn set_config(&self, values: &ConfigValues) -> PrefsResult<()> {
        self.call(
            "set_config",
            json!([{
                "telegram_token": values.telegram_token,
                "admin_chat_id": values.admin_chat_id,
            }]),
        )
        .await?;
        Ok(())
    }

    async fn add_entry(&self, id: &str, name: &str) -> PrefsResult<bool> {
        let value = self.call(K::ADD_METHOD, json!([id, name])).await?;
        // Older plugin builds return nothing
        Ok(value.as_bool().unwrap_or(true))
    }

    async fn remove_entry(&self, id: &str) -> PrefsResult<()> {
        self.call(K::REMOVE_METHOD, json!([id])).await?;
        Ok(())
    }
}
