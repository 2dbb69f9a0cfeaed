//! Server configuration snapshot types

use serde::{Deserialize, Serialize};

use super::Entry;

/// The two scalar credentials edited on the preferences page.
///
/// Both are opaque strings; the client performs no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValues {
    pub telegram_token: String,
    pub admin_chat_id: String,
}

impl ConfigValues {
    pub fn new(telegram_token: impl Into<String>, admin_chat_id: impl Into<String>) -> Self {
        Self {
            telegram_token: telegram_token.into(),
            admin_chat_id: admin_chat_id.into(),
        }
    }
}

/// Complete server state returned by a single `get_config` call.
///
/// Replaced wholesale on every read; never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub telegram_token: String,
    pub admin_chat_id: String,
    pub entries: Vec<Entry>,
}

impl ConfigSnapshot {
    /// Split into scalar values and entries
    pub fn into_parts(self) -> (ConfigValues, Vec<Entry>) {
        (
            ConfigValues {
                telegram_token: self.telegram_token,
                admin_chat_id: self.admin_chat_id,
            },
            self.entries,
        )
    }
}
