use thiserror::Error;

/// Errors a remote resource call can surface to the sync layer.
///
/// None of these are fatal: every failure path leaves the collection
/// store untouched and returns the edit session to a stable state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Stale identity on update/delete: the record is already absent
    /// from the source of truth.
    #[error("resource not found: {id}")]
    NotFound { id: String },

    /// Malformed draft. Expected to be caught client-side before a call
    /// is issued; if the backend still reports one, it is recovered
    /// like a network failure.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Transport or server failure. Recovered locally, never retried
    /// automatically.
    #[error("network error: {message}")]
    Network { message: String },
}

impl ClientError {
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
