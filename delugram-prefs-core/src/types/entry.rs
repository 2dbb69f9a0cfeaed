//! Allow-list entry types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrefsError;

/// One allow-listed identity held by the server.
///
/// `id` is the key; uniqueness is enforced server-side only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Compile-time description of an allow-list variant.
///
/// The chat-oriented and user-oriented deployments differ only in these names.
pub trait EntryKind: Send + Sync + 'static {
    /// Runtime tag of this kind
    const ID: EntryKindId;
    /// Singular label shown to the operator
    const LABEL: &'static str;
    /// Key of the entry list in the server config
    const LIST_KEY: &'static str;
    /// Key of the identifier inside one list item
    const ID_FIELD: &'static str;
    /// RPC method adding an entry
    const ADD_METHOD: &'static str;
    /// RPC method removing an entry
    const REMOVE_METHOD: &'static str;

    /// Label with its first letter upper-cased (`chat` → `Chat`)
    fn title_label() -> String {
        let mut chars = Self::LABEL.chars();
        chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default()
    }
}

/// Chat allow-list (`add_chat` / `remove_chat`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Chats;

impl EntryKind for Chats {
    const ID: EntryKindId = EntryKindId::Chat;
    const LABEL: &'static str = "chat";
    const LIST_KEY: &'static str = "chats";
    const ID_FIELD: &'static str = "chat_id";
    const ADD_METHOD: &'static str = "add_chat";
    const REMOVE_METHOD: &'static str = "remove_chat";
}

/// User allow-list (`add_user` / `remove_user`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Users;

impl EntryKind for Users {
    const ID: EntryKindId = EntryKindId::User;
    const LABEL: &'static str = "user";
    const LIST_KEY: &'static str = "users";
    const ID_FIELD: &'static str = "user_id";
    const ADD_METHOD: &'static str = "add_user";
    const REMOVE_METHOD: &'static str = "remove_user";
}

/// Runtime selector for an [`EntryKind`], as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKindId {
    #[default]
    Chat,
    User,
}

impl EntryKindId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => Chats::LABEL,
            Self::User => Users::LABEL,
        }
    }
}

impl fmt::Display for EntryKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKindId {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chat" | "chats" => Ok(Self::Chat),
            "user" | "users" => Ok(Self::User),
            other => Err(PrefsError::Config(format!("unknown entry kind: {other}"))),
        }
    }
}
