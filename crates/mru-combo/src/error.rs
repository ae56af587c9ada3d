//! Error types for the MRU combo box.

use thiserror::Error;

/// Errors surfaced to callers of the item collection and configuration APIs.
///
/// UI-driven faults (stale row indices during paint or hit-testing) are not
/// errors; they are ignored where they occur.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MruError {
    /// A null item was offered to the item collection.
    #[error("item must not be null")]
    NullItem,

    /// An index was outside the item collection.
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for MruError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Errors from the native popup list bridge.
///
/// The widget never propagates these past `on_handle_created`: an unavailable
/// bridge only disables delete-icon clicks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The host could not resolve the popup list's native handle.
    #[error("popup list handle unavailable")]
    HandleUnavailable,

    /// The handle was resolved but is no longer a live window.
    #[error("native handle {0:#x} is not a valid window")]
    InvalidHandle(isize),

    /// Installing the message interceptor failed.
    #[error("failed to intercept messages: {0}")]
    InterceptFailed(String),
}

/// Result type for MRU combo box operations.
pub type Result<T> = std::result::Result<T, MruError>;
