// zhfst dictionary archives, answered by divvunspell.

use std::io;
use std::path::Path;

use divvunspell::archive::{SpellerArchive, ZipSpellerArchive};
use divvunspell::speller::SpellerConfig;
use fstspell_core::locale::display_name;
use fstspell_core::{DictionaryResource, LoadError, QueryError, SuggestConfig, Suggestion, Title};

/// A zhfst speller archive (acceptor and error model transducers plus
/// XML metadata in a zip container).
///
/// Independent archives may be opened concurrently; each one memory-maps
/// its own transducers.
pub struct ZhfstArchive {
    archive: ZipSpellerArchive,
}

impl ZhfstArchive {
    fn titles(&self) -> Vec<Title> {
        self.archive
            .metadata()
            .map(|meta| {
                meta.info
                    .title
                    .iter()
                    .map(|t| Title::new(t.lang.as_deref(), t.value.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn speller_config(config: &SuggestConfig) -> SpellerConfig {
    let mut cfg = SpellerConfig::default();
    cfg.n_best = config.n_best;
    cfg.max_weight = config.max_weight;
    cfg.beam = config.beam;
    cfg.recase = config.with_caps;
    cfg
}

impl DictionaryResource for ZhfstArchive {
    fn open(path: &Path) -> Result<Self, LoadError> {
        let file = std::fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        if !file.is_file() {
            return Err(LoadError::Archive {
                path: path.to_path_buf(),
                reason: "not a regular file".to_string(),
            });
        }

        let archive = ZipSpellerArchive::open(path).map_err(|e| LoadError::Archive {
            path: path.to_path_buf(),
            reason: format!("{e:?}"),
        })?;
        if archive.metadata().is_none() {
            return Err(LoadError::MissingMetadata);
        }

        Ok(Self { archive })
    }

    fn is_correct(&self, word: &str) -> Result<bool, QueryError> {
        Ok(self.archive.speller().is_correct(word))
    }

    fn suggest(&self, word: &str, config: &SuggestConfig) -> Result<Vec<Suggestion>, QueryError> {
        let cfg = speller_config(config);
        let suggestions = self
            .archive
            .speller()
            .suggest_with_config(word, &cfg)
            .into_iter()
            .map(|s| Suggestion::new(s.value.to_string(), s.weight))
            .collect();
        Ok(suggestions)
    }

    fn locale(&self) -> Result<String, QueryError> {
        self.archive
            .metadata()
            .map(|meta| meta.info.locale.to_string())
            .ok_or(QueryError::InvalidHandle)
    }

    fn locale_name(&self) -> Result<String, QueryError> {
        let locale = self.locale()?;
        let titles = self.titles();
        Ok(display_name(&locale, &titles).unwrap_or(&locale).to_string())
    }
}
