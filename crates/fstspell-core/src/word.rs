// Word validation performed before anything crosses into a dictionary.

use crate::error::InvalidInputError;

/// Check that `text` is something a dictionary can be asked about.
///
/// Only empty input is rejected. Length, letters outside a dictionary's
/// alphabet, control characters, punctuation and whitespace are all the
/// dictionary's call: such words are answered, usually as misspelled.
pub fn validate(text: &str) -> Result<(), InvalidInputError> {
    if text.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    Ok(())
}
