// Error taxonomy shared by dictionary backends and the facade.

use std::path::PathBuf;

/// A dictionary archive could not be loaded.
///
/// Only raised while constructing a spell checker. A failed construction
/// leaves nothing behind; build a new instance with a corrected path.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Nothing exists at the given path.
    #[error("dictionary archive not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but could not be read.
    #[error("failed to read dictionary archive {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive content is malformed or of an unsupported version.
    #[error("invalid dictionary archive {}: {reason}", .path.display())]
    Archive { path: PathBuf, reason: String },

    /// The archive carries no locale metadata.
    #[error("dictionary archive has no locale metadata")]
    MissingMetadata,

    /// Reading the locale metadata of a freshly opened archive failed.
    #[error("failed to read dictionary metadata: {0}")]
    Metadata(#[source] QueryError),
}

/// A word was rejected before reaching the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("word is empty")]
    Empty,
}

/// The dictionary failed to answer a dispatched query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The backend reported a failure.
    #[error("dictionary query failed: {0}")]
    Resource(String),

    /// The backend panicked while answering.
    #[error("dictionary query panicked: {0}")]
    Panicked(String),

    /// The worker running the query went away without answering.
    #[error("dictionary query was abandoned before completing")]
    Abandoned,

    /// No worker could be started to run the query. The dictionary was
    /// never called.
    #[error("no worker available for dictionary query: {0}")]
    Unavailable(String),

    /// The dictionary handle is no longer usable.
    #[error("dictionary handle is invalid")]
    InvalidHandle,
}

/// Coarse classification of a [`SpellCheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Load,
    InvalidInput,
    Query,
}

/// Any failure surfaced by the spell checker.
#[derive(Debug, thiserror::Error)]
pub enum SpellCheckError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl SpellCheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpellCheckError::Load(_) => ErrorKind::Load,
            SpellCheckError::InvalidInput(_) => ErrorKind::InvalidInput,
            SpellCheckError::Query(_) => ErrorKind::Query,
        }
    }
}
