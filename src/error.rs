//! Error types for host access, theme parsing and configuration.
//!
//! None of these ever reach the visitor: controllers recover locally and
//! log at `debug`. They exist so the browser layer can report precisely
//! what went wrong while the page keeps working.

/// A failed browser/DOM operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// No element with this id is present in the document.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// `localStorage` is disabled, blocked by privacy mode, or over quota.
    #[error("storage unavailable")]
    StorageUnavailable,
    /// A browser API threw; the message is the stringified JS value.
    #[error("browser call failed: {0}")]
    Js(String),
}

/// A persisted theme value that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ThemeError(pub String);

/// Invalid inline site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0:?}")]
    LogLevel(String),
}
