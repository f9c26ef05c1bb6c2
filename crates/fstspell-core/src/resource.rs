// The dictionary collaborator a spell checker wraps.

use std::path::Path;

use crate::config::SuggestConfig;
use crate::error::{LoadError, QueryError};
use crate::suggestion::Suggestion;

/// A loaded dictionary archive that can answer spelling queries.
///
/// Implementations do the actual linguistic work. A spell checker owns
/// exactly one resource and calls it from worker threads, so every method
/// takes `&self` and the type must be `Send + Sync`. Queries never mutate
/// the dictionary; concurrent calls must be safe.
///
/// Whether `open` may run concurrently for independent instances is up to
/// the implementation and must be documented there.
pub trait DictionaryResource: Send + Sync + 'static {
    /// Load an archive from `path`.
    ///
    /// Fails with [`LoadError`] if the path does not exist, cannot be read,
    /// or holds a malformed or unsupported archive. May do substantial I/O.
    fn open(path: &Path) -> Result<Self, LoadError>
    where
        Self: Sized;

    /// Whether the dictionary accepts `word`.
    ///
    /// May block for as long as the lookup takes.
    fn is_correct(&self, word: &str) -> Result<bool, QueryError>;

    /// Ranked corrections for `word`, best first.
    ///
    /// An empty list is a valid answer, not a failure.
    fn suggest(&self, word: &str, config: &SuggestConfig) -> Result<Vec<Suggestion>, QueryError>;

    /// Short locale code of the archive.
    fn locale(&self) -> Result<String, QueryError>;

    /// Human-readable name of the archive.
    fn locale_name(&self) -> Result<String, QueryError>;
}
