/// Core error types for OpenMusic
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for the catalog.
///
/// Every failure a service can produce is one of these variants. The variant
/// alone decides whether the caller or the server is at fault; see [`ErrorKind`].
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Malformed or incomplete input payload
    #[error("{0}")]
    Validation(String),

    /// No row matched the requested id
    #[error("{0}")]
    NotFound(String),

    /// A write did not produce the expected result
    #[error("{0}")]
    Invariant(String),

    /// Storage driver or query failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored row could not be mapped into a domain value
    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Invariant,
    Internal,
}

impl ErrorKind {
    /// Whether the failure was caused by the request rather than the server.
    pub fn is_client_caused(self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }

    /// HTTP status code equivalent.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::Invariant => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}

impl CatalogError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invariant error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a mapping error
    pub fn mapping(msg: impl Into<String>) -> Self {
        Self::Mapping(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Invariant(_) => ErrorKind::Invariant,
            Self::Storage(_) | Self::Mapping(_) => ErrorKind::Internal,
        }
    }

    pub fn is_client_caused(&self) -> bool {
        self.kind().is_client_caused()
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}
