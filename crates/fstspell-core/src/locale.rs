// Locale metadata of a loaded dictionary archive.

/// One title entry from an archive's metadata.
///
/// Archives may carry the speller's title in several languages; `lang` is
/// the language the title is written in, when the archive says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub lang: Option<String>,
    pub value: String,
}

impl Title {
    pub fn new(lang: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            lang: lang.map(str::to_string),
            value: value.into(),
        }
    }
}

/// Pick the display name for `locale` from an archive's titles.
///
/// Prefers the title written in the archive's own locale, then the first
/// title. Returns `None` when there are no titles at all.
pub fn display_name<'a>(locale: &str, titles: &'a [Title]) -> Option<&'a str> {
    titles
        .iter()
        .find(|t| t.lang.as_deref() == Some(locale))
        .or_else(|| titles.first())
        .map(|t| t.value.as_str())
}

/// Locale code and human-readable name of a loaded dictionary.
///
/// Computed once when a spell checker is constructed and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    code: String,
    name: String,
}

impl LocaleInfo {
    /// Build locale info, or `None` if `code` is blank.
    ///
    /// A blank `name` falls back to the code so both values are non-empty.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return None;
        }
        let mut name = name.into();
        if name.trim().is_empty() {
            name = code.clone();
        }
        Some(Self { code, name })
    }

    /// Short locale code, e.g. `sma`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name of the speller.
    pub fn name(&self) -> &str {
        &self.name
    }
}
