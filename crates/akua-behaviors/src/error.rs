//! Error types for behavior attachment and configuration.

use thiserror::Error;

/// Error raised by a [`Dom`](crate::dom::Dom) backend or a widget capability.
///
/// These never escape [`BehaviorAttacher::attach`](crate::BehaviorAttacher::attach):
/// the attacher logs them and records them in the report so one failing step
/// cannot stop the others.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    /// The hosting environment has no window or document.
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// The backend rejected a selector.
    #[error("query {selector:?} failed: {message}")]
    Query { selector: String, message: String },

    /// A click listener could not be registered.
    #[error("failed to attach {event} listener: {message}")]
    Listener { event: &'static str, message: String },

    /// Changing an element's classes or text failed.
    #[error("failed to update element: {0}")]
    Mutation(String),

    /// A third-party widget library raised while initializing an element.
    #[error("{name} failed: {message}")]
    Capability { name: &'static str, message: String },
}

/// A specialized [`Result`] type for behavior operations.
pub type Result<T> = std::result::Result<T, BehaviorError>;

/// Error loading or validating a [`BehaviorConfig`](crate::BehaviorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid selector for {field}: {reason}")]
    InvalidSelector { field: &'static str, reason: String },
    #[error("class name for {0} must not be empty or contain whitespace")]
    EmptyClass(&'static str),
    #[error("date format must not be empty")]
    InvalidDateFormat,
}
