//! Hashtag-style tags embedded in todo text.

use super::TodoDomainError;
use std::fmt;

/// Normalised tag: lower case, no leading `#`, only alphanumerics, `-` and
/// `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Parses a tag typed by the user, with or without the leading `#`.
    ///
    /// Accepts exactly the words [`Tag::extract_all`] can produce, so a
    /// parsed tag is always matchable.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTag`] when nothing remains after
    /// trimming and stripping the `#` prefix, or
    /// [`TodoDomainError::InvalidTag`] when the remainder holds any other
    /// character.
    pub fn parse(input: &str) -> Result<Self, TodoDomainError> {
        let stripped = input.trim().trim_start_matches('#').trim();
        if stripped.is_empty() {
            return Err(TodoDomainError::EmptyTag);
        }
        if !stripped.chars().all(is_tag_char) {
            return Err(TodoDomainError::InvalidTag(stripped.to_owned()));
        }
        Ok(Self(stripped.to_lowercase()))
    }

    /// Extracts every `#word` token from free text.
    ///
    /// A token runs from the `#` to the next character that is neither
    /// alphanumeric nor one of `-` and `_`.
    #[must_use]
    pub fn extract_all(text: &str) -> Vec<Self> {
        text.split('#')
            .skip(1)
            .filter_map(|fragment| {
                let word: String = fragment.chars().take_while(|ch| is_tag_char(*ch)).collect();
                (!word.is_empty()).then(|| Self(word.to_lowercase()))
            })
            .collect()
    }

    /// Returns the tag text without the `#` prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

fn is_tag_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '_')
}
