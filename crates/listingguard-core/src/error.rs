//! Error types for ListingGuard

/// Result type alias using ListingGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ListingGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The prohibited-keyword list could not be fetched or was malformed
    #[error("data source unavailable: {0}")]
    DataSource(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// A term that cannot be stored as a prohibited keyword
    #[error("invalid keyword: {0}")]
    InvalidKeyword(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new data source error
    pub fn data_source(msg: impl Into<String>) -> Self {
        Self::DataSource(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid keyword error
    pub fn invalid_keyword(msg: impl Into<String>) -> Self {
        Self::InvalidKeyword(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error means the prohibited list was unavailable
    pub fn is_data_source(&self) -> bool {
        matches!(self, Self::DataSource(_))
    }
}
