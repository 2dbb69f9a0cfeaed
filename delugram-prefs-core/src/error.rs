//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PrefsError {
    /// The server answered a call with an application error
    #[error("RPC error: {method} - {message}")]
    Rpc { method: String, message: String },

    /// The server could not be reached or the transport failed
    #[error("Network error: {0}")]
    Network(String),

    /// A payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The server rejected the input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The session is not (or no longer) authenticated
    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    /// Remove was requested without a selected entry
    #[error("No entry selected")]
    NoSelection,

    /// Submit was requested while the add window is closed
    #[error("Add window is not open")]
    AddWindowClosed,

    /// Client configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PrefsError {
    /// Whether the error is expected behavior (user input, contract guards) rather than a fault.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::Unauthorized(_)
            | Self::NoSelection
            | Self::AddWindowClosed => true,
            Self::Rpc { .. }
            | Self::Network(_)
            | Self::Serialization(_)
            | Self::Config(_)
            | Self::Storage(_) => false,
        }
    }

    /// Log this error at the level matching [`is_expected`](Self::is_expected).
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type PrefsResult<T> = std::result::Result<T, PrefsError>;
