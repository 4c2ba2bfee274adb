//! Error types for payload decoding and element registration.
//!
//! Rendering itself has no error channel: an absent payload is a no-op and
//! every present payload renders. Errors only arise at the edges, when JSON is
//! decoded or when a host asks the registry for something it cannot provide.

/// Error returned by [`crate::card::data::RecipeCardData::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The input was not a well-formed recipe payload.
    #[error("invalid recipe payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned by [`crate::registry::ElementRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The tag name is not a valid custom element name.
    #[error("invalid custom element name: {0:?}")]
    InvalidName(String),
    /// A factory is already registered under this tag name.
    #[error("custom element {0:?} is already defined")]
    AlreadyDefined(String),
    /// No factory is registered under this tag name.
    #[error("custom element {0:?} is not defined")]
    NotDefined(String),
}
