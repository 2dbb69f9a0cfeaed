//! Type definition module

mod config;
mod entry;

pub use config::{ConfigSnapshot, ConfigValues};
pub use entry::{Chats, Entry, EntryKind, EntryKindId, Users};
