/// Errors from ordered document operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    /// A lookup or positional anchor referenced a key that is not present.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A positional insert named a key that is already present.
    #[error("key already present: {0}")]
    DuplicateKey(String),

    /// A positional insert used an index past the end of the document.
    #[error("index {index} out of bounds for document of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
