// Ranked correction candidates.

/// A correction candidate and the dictionary's weight for it.
///
/// Lower weights are better. Lists of suggestions are kept in the order the
/// dictionary returned them, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub value: String,
    pub weight: f32,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, weight: f32) -> Self {
        Self {
            value: value.into(),
            weight,
        }
    }
}

/// Strip weights, keeping the ranking order.
pub fn into_words(suggestions: Vec<Suggestion>) -> Vec<String> {
    suggestions.into_iter().map(|s| s.value).collect()
}
