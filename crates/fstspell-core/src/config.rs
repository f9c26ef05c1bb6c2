// Suggestion and spell checker options.

use serde::{Deserialize, Serialize};

/// Limits applied when a dictionary generates suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Maximum number of suggestions to return. `None` means no limit.
    pub n_best: Option<usize>,
    /// Discard candidates weighing more than this.
    pub max_weight: Option<f32>,
    /// Discard candidates more than this far from the best candidate.
    pub beam: Option<f32>,
    /// Also try case variants of the input word.
    pub with_caps: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            n_best: Some(10),
            max_weight: None,
            beam: None,
            with_caps: true,
        }
    }
}

/// Options held by a spell checker instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCheckerOptions {
    /// Configuration passed to every suggestion query.
    pub suggest: SuggestConfig,
}
