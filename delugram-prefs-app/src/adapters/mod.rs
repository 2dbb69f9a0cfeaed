//! Remote store adapters for the preferences page.

mod memory_server;

#[cfg(feature = "deluge-web")]
mod deluge_web;

pub use memory_server::{InMemoryPrefsServer, DEFAULT_ADMIN_CHAT_ID, DEFAULT_TELEGRAM_TOKEN};

#[cfg(feature = "deluge-web")]
pub use deluge_web::{decode_response, decode_snapshot, encode_request, DelugeWebClient};
