//! Asynchronous spell-checking facade over precompiled dictionary archives.
//!
//! A [`SpellChecker`] owns one loaded [`DictionaryResource`] and answers
//! correctness and suggestion queries without blocking the caller: each
//! query runs on a worker thread and resolves a [`Query`] future exactly
//! once. Locale metadata is read at construction and served synchronously.
//!
//! ```no_run
//! # #[cfg(feature = "zhfst")]
//! # async fn demo() -> Result<(), fstspell::SpellCheckError> {
//! use fstspell::{SpellChecker, ZhfstArchive};
//!
//! let checker = SpellChecker::<ZhfstArchive>::open("sma-mobile.zhfst")?;
//! assert_eq!(checker.locale(), "sma");
//! if !checker.is_correct("basse").await? {
//!     let suggestions = checker.suggest("basse").await?;
//!     println!("{suggestions:?}");
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "zhfst")]
pub mod archive;
pub mod checker;
pub mod dispatch;

pub use checker::SpellChecker;
pub use dispatch::Query;

pub use fstspell_core::{
    DictionaryResource, ErrorKind, InvalidInputError, LoadError, LocaleInfo, QueryError,
    SpellCheckError, SpellCheckerOptions, SuggestConfig, Suggestion, Title,
};

#[cfg(feature = "zhfst")]
pub use archive::ZhfstArchive;
