use std::path::PathBuf;

use thiserror::Error;

/// Errors from parsing, accessing, and serializing presentation resources.
#[derive(Debug, Error)]
pub enum PresentationError {
    /// `parse` was handed something that is not a path, JSON text, or mapping.
    #[error(
        "parse takes a path to a file, a JSON string, or a mapping; argument was a {received}.{hint}"
    )]
    InvalidArgument {
        received: &'static str,
        hint: &'static str,
    },

    /// Malformed JSON, or JSON whose top level is not an object.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Reading an existing file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A non-empty `metadata` list holds an entry that is not an object.
    #[error("All entries in the metadata list must be a mapping (entry {index} is a {found})")]
    InvalidMetadataEntry { index: usize, found: &'static str },

    /// `metadata` holds something other than a list.
    #[error("metadata must be a list, found a {0}")]
    MetadataNotAList(&'static str),

    /// A by-name accessor was given a name outside both vocabularies.
    #[error("unknown property: {0}")]
    UnknownProperty(String),
}

/// Result alias for presentation operations.
pub type PresentationResult<T> = Result<T, PresentationError>;
