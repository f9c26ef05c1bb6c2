// SpellChecker: the caller-facing facade over one dictionary resource.
//
// The checker owns the resource behind an Arc. Each query clones the Arc
// into its worker, so the resource is released once, after the checker and
// every outstanding query are gone. Locale metadata is read once here and
// served from memory afterwards.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use fstspell_core::suggestion::into_words;
use fstspell_core::word;
use fstspell_core::{
    DictionaryResource, LoadError, LocaleInfo, QueryError, SpellCheckError, SpellCheckerOptions,
    SuggestConfig, Suggestion,
};
use tokio::runtime::Handle;

use crate::dispatch::{Dispatcher, Query, run_guarded};

/// Spell checker backed by a single loaded dictionary.
///
/// `is_correct` and `suggest` return [`Query`] futures and never block the
/// caller; the dictionary work runs on a worker thread. `locale` and
/// `locale_name` are plain reads. A failed query leaves the checker fully
/// usable.
///
/// The checker is `Send + Sync`; share it behind an `Arc` to query it from
/// several tasks at once.
pub struct SpellChecker<R: DictionaryResource> {
    resource: Arc<R>,
    locale: LocaleInfo,
    options: SpellCheckerOptions,
    runtime: Option<Handle>,
}

impl<R: DictionaryResource> SpellChecker<R> {
    /// Load the dictionary archive at `path` with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::open_with_options(path, SpellCheckerOptions::default())
    }

    /// Load the dictionary archive at `path`.
    ///
    /// Blocks until the archive is loaded and its locale metadata read.
    pub fn open_with_options(
        path: impl AsRef<Path>,
        options: SpellCheckerOptions,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let resource = R::open(path).inspect_err(|e| {
            log::debug!("failed to load dictionary {}: {e}", path.display());
        })?;
        let checker = Self::from_resource_with_options(resource, options)?;
        log::debug!(
            "loaded dictionary {} (locale {}, \"{}\")",
            path.display(),
            checker.locale.code(),
            checker.locale.name()
        );
        Ok(checker)
    }

    /// Wrap an already opened resource with default options.
    pub fn from_resource(resource: R) -> Result<Self, LoadError> {
        Self::from_resource_with_options(resource, SpellCheckerOptions::default())
    }

    /// Wrap an already opened resource.
    ///
    /// Fails if the resource cannot report a non-empty locale code.
    pub fn from_resource_with_options(
        resource: R,
        options: SpellCheckerOptions,
    ) -> Result<Self, LoadError> {
        let code = resource.locale().map_err(LoadError::Metadata)?;
        let name = resource.locale_name().map_err(LoadError::Metadata)?;
        let locale = LocaleInfo::new(code, name).ok_or(LoadError::MissingMetadata)?;

        Ok(Self {
            resource: Arc::new(resource),
            locale,
            options,
            runtime: None,
        })
    }

    /// Always run queries on `runtime`'s blocking pool.
    ///
    /// Without a pinned runtime, queries use the runtime current at the call
    /// site, or a shared runtime with a bounded pool when there is none.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check whether `word` is spelled correctly.
    ///
    /// An empty word resolves immediately with
    /// [`SpellCheckError::InvalidInput`] and never reaches the dictionary.
    /// Any other text is answered by the dictionary.
    pub fn is_correct(&self, word: &str) -> Query<bool> {
        if let Err(e) = word::validate(word) {
            return Query::rejected(e);
        }
        let resource = Arc::clone(&self.resource);
        let word = word.to_string();
        self.dispatcher()
            .dispatch(move || logged("is_correct", &word, resource.is_correct(&word)))
    }

    /// Generate ranked corrections for `word`, best first.
    ///
    /// An empty list is a successful answer. Uses the suggestion config in
    /// effect when the query is issued.
    pub fn suggest(&self, word: &str) -> Query<Vec<String>> {
        if let Err(e) = word::validate(word) {
            return Query::rejected(e);
        }
        let resource = Arc::clone(&self.resource);
        let word = word.to_string();
        let config = self.options.suggest;
        self.dispatcher().dispatch(move || {
            logged("suggest", &word, resource.suggest(&word, &config)).map(into_words)
        })
    }

    /// Like [`suggest`](Self::suggest), keeping each candidate's weight.
    pub fn suggest_weighted(&self, word: &str) -> Query<Vec<Suggestion>> {
        if let Err(e) = word::validate(word) {
            return Query::rejected(e);
        }
        let resource = Arc::clone(&self.resource);
        let word = word.to_string();
        let config = self.options.suggest;
        self.dispatcher()
            .dispatch(move || logged("suggest", &word, resource.suggest(&word, &config)))
    }

    /// Check `word` on the current thread, blocking until answered.
    pub fn is_correct_blocking(&self, word: &str) -> Result<bool, SpellCheckError> {
        word::validate(word)?;
        let answer = run_guarded(|| self.resource.is_correct(word));
        logged("is_correct", word, answer).map_err(SpellCheckError::from)
    }

    /// Generate suggestions on the current thread, blocking until answered.
    pub fn suggest_blocking(&self, word: &str) -> Result<Vec<String>, SpellCheckError> {
        word::validate(word)?;
        let config = self.options.suggest;
        let answer = run_guarded(|| self.resource.suggest(word, &config));
        logged("suggest", word, answer)
            .map(into_words)
            .map_err(SpellCheckError::from)
    }

    fn dispatcher(&self) -> Dispatcher {
        Dispatcher::select(self.runtime.as_ref())
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Short locale code of the loaded dictionary, e.g. `sma`.
    pub fn locale(&self) -> &str {
        self.locale.code()
    }

    /// Human-readable name of the loaded dictionary.
    pub fn locale_name(&self) -> &str {
        self.locale.name()
    }

    pub fn locale_info(&self) -> &LocaleInfo {
        &self.locale
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn options(&self) -> &SpellCheckerOptions {
        &self.options
    }

    /// Replace the configuration used for suggestion queries.
    pub fn set_suggest_config(&mut self, config: SuggestConfig) {
        self.options.suggest = config;
    }

    /// Set the maximum number of suggestions. `None` removes the limit.
    pub fn set_max_suggestions(&mut self, value: Option<usize>) {
        self.options.suggest.n_best = value;
    }

    /// Set the weight above which suggestions are discarded.
    pub fn set_max_weight(&mut self, value: Option<f32>) {
        self.options.suggest.max_weight = value;
    }

    /// Set how far from the best candidate a suggestion may weigh.
    pub fn set_beam(&mut self, value: Option<f32>) {
        self.options.suggest.beam = value;
    }

    /// Set whether suggestions also try case variants of the input.
    pub fn set_with_caps(&mut self, value: bool) {
        self.options.suggest.with_caps = value;
    }
}

/// Log a failed dictionary answer and pass it through unchanged.
fn logged<T>(
    operation: &str,
    word: &str,
    answer: Result<T, QueryError>,
) -> Result<T, QueryError> {
    if let Err(e) = &answer {
        log::warn!("{operation}({word:?}) failed: {e}");
    }
    answer
}

impl<R: DictionaryResource> fmt::Debug for SpellChecker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpellChecker")
            .field("locale", &self.locale)
            .field("options", &self.options)
            .field("pinned_runtime", &self.runtime.is_some())
            .finish_non_exhaustive()
    }
}

impl<R: DictionaryResource> Drop for SpellChecker<R> {
    fn drop(&mut self) {
        log::debug!(
            "releasing spell checker for {} ({} outstanding queries)",
            self.locale.code(),
            Arc::strong_count(&self.resource) - 1
        );
    }
}
