//! Shared types for the fstspell spell-checking facade.
//!
//! - [`word`] -- Input validation before a word reaches a dictionary
//! - [`locale`] -- Locale code and display name of a loaded archive
//! - [`suggestion`] -- Ranked correction candidates
//! - [`config`] -- Suggestion and facade options
//! - [`error`] -- Load, input and query error taxonomy
//! - [`resource`] -- The `DictionaryResource` trait implemented by backends

pub mod config;
pub mod error;
pub mod locale;
pub mod resource;
pub mod suggestion;
pub mod word;

pub use config::{SpellCheckerOptions, SuggestConfig};
pub use error::{ErrorKind, InvalidInputError, LoadError, QueryError, SpellCheckError};
pub use locale::{LocaleInfo, Title};
pub use resource::DictionaryResource;
pub use suggestion::Suggestion;
