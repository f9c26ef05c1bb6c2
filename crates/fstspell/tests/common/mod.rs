//! Plain-text test dictionary.
//!
//! Fixture format, one entry per line:
//!
//! ```text
//! locale: sma
//! title[en]: Some English title
//! title[sma]: Some Southern Sami title
//! ---
//! jïh
//! båsse
//! ```
//!
//! Words after `---` form the lexicon. Suggestions for a word are the lexicon
//! entries sharing its first letter, in file order. The word `fault` makes
//! every query fail.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::mpsc;

use fstspell::{DictionaryResource, LoadError, QueryError, SuggestConfig, Suggestion, Title};
use fstspell_core::locale::display_name;
use tempfile::NamedTempFile;

pub const SMA_NAME: &str = "Giellatekno/Divvun/UiT fst-based speller for Southern Sami";

pub const SMA_FIXTURE: &str = "\
locale: sma
title[en]: Giellatekno/Divvun/UiT fst-based speller for English speakers
title[sma]: Giellatekno/Divvun/UiT fst-based speller for Southern Sami
---
jïh
jaahke
båsse
bïjre
baahtsedh
gïele
";

pub struct WordListDictionary {
    locale: String,
    titles: Vec<Title>,
    words: Vec<String>,
    gate: Option<(String, Mutex<mpsc::Receiver<()>>)>,
}

impl WordListDictionary {
    pub fn parse(text: &str, origin: &Path) -> Result<Self, LoadError> {
        let malformed = |reason: &str| LoadError::Archive {
            path: origin.to_path_buf(),
            reason: reason.to_string(),
        };

        let (header, body) = text
            .split_once("\n---\n")
            .ok_or_else(|| malformed("missing `---` separator"))?;

        let mut locale = None;
        let mut titles = Vec::new();
        for line in header.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (key, value) = line
                .split_once(": ")
                .ok_or_else(|| malformed("header line without `: `"))?;
            if key == "locale" {
                locale = Some(value.to_string());
            } else if let Some(lang) =
                key.strip_prefix("title[").and_then(|k| k.strip_suffix(']'))
            {
                titles.push(Title::new(Some(lang), value));
            } else if key == "title" {
                titles.push(Title::new(None, value));
            } else {
                return Err(malformed("unknown header key"));
            }
        }

        Ok(Self {
            locale: locale.ok_or(LoadError::MissingMetadata)?,
            titles,
            words: body
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            gate: None,
        })
    }

    /// Make queries for `word` block until `release` receives a message.
    pub fn gated(mut self, word: &str, release: mpsc::Receiver<()>) -> Self {
        self.gate = Some((word.to_string(), Mutex::new(release)));
        self
    }

    fn enter(&self, word: &str) -> Result<(), QueryError> {
        if let Some((gated, release)) = &self.gate {
            if gated == word {
                release
                    .lock()
                    .unwrap()
                    .recv()
                    .map_err(|_| QueryError::Resource("gate closed".into()))?;
            }
        }
        if word == "fault" {
            return Err(QueryError::Resource("lexicon unavailable".into()));
        }
        Ok(())
    }
}

impl DictionaryResource for WordListDictionary {
    fn open(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::parse(&text, path)
    }

    fn is_correct(&self, word: &str) -> Result<bool, QueryError> {
        self.enter(word)?;
        Ok(self.words.iter().any(|w| w == word))
    }

    fn suggest(&self, word: &str, config: &SuggestConfig) -> Result<Vec<Suggestion>, QueryError> {
        self.enter(word)?;
        let first = word.chars().next();
        Ok(self
            .words
            .iter()
            .filter(|w| w.chars().next() == first)
            .enumerate()
            .map(|(rank, w)| Suggestion::new(w.clone(), rank as f32))
            .take(config.n_best.unwrap_or(usize::MAX))
            .collect())
    }

    fn locale(&self) -> Result<String, QueryError> {
        Ok(self.locale.clone())
    }

    fn locale_name(&self) -> Result<String, QueryError> {
        Ok(display_name(&self.locale, &self.titles)
            .unwrap_or(&self.locale)
            .to_string())
    }
}

/// Write `contents` to a temporary fixture file.
pub fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create fixture");
    file.write_all(contents.as_bytes())
        .expect("failed to write fixture");
    file
}
