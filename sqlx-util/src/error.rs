//! Error types for sqlx-util

use thiserror::Error;

/// Boxed error used by executors that are not backed by the bundled drivers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for sqlx-util operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// `?` markers and arguments could not be matched up.
    #[error("expansion error: {0}")]
    Expansion(String),

    /// A row or tuple does not have the arity of the first one.
    #[error("invalid value")]
    ArityMismatch,

    /// Error raised by the sqlx driver, forwarded unchanged.
    #[cfg(not(feature = "turso"))]
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Error raised by libsql, forwarded unchanged.
    #[cfg(feature = "turso")]
    #[error(transparent)]
    Database(#[from] libsql::Error),

    /// Error raised by a custom executor.
    #[error(transparent)]
    Execution(BoxError),

    #[error("unsupported database url: {0}")]
    UnsupportedDatabase(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn expansion(message: impl Into<String>) -> Self {
        Self::Expansion(message.into())
    }

    /// Wrap an error coming from a custom [`Executor`](crate::Executor).
    pub fn execution(err: impl Into<BoxError>) -> Self {
        Self::Execution(err.into())
    }

    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ArityMismatch)
    }

    pub fn is_expansion(&self) -> bool {
        matches!(self, Self::Expansion(_))
    }
}
