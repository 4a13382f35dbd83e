pub mod lexicon;

pub use lexicon::*;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::models::TaggedToken;

/// Failure reported by a part-of-speech tagger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("tagger unavailable: {0}")]
    Unavailable(String),
}

/// Splits text into tokens and assigns each a part of speech.
///
/// Implementations must return every token's surface text exactly as it
/// appeared, including case.
pub trait Tagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TagError>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Result<Vec<TaggedToken>, TagError>,
{
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TagError> {
        self(text)
    }
}

lazy_static! {
    // Words (with inner apostrophes/hyphens and an optional leading
    // apostrophe, as in 'tis) or any single non-space character
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"['\u{2019}]?[\p{L}\p{N}]+(?:['\u{2019}\-][\p{L}\p{N}]+)*|\S").unwrap();
}

/// Split text into word and punctuation tokens, surface text untouched
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartOfSpeech;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Hark, 'tis John's well-made cloak!"),
            vec!["Hark", ",", "'tis", "John's", "well-made", "cloak", "!"]
        );
        assert!(tokenize("   ").is_empty());
        assert_eq!(tokenize("...?"), vec![".", ".", ".", "?"]);
    }

    #[test]
    fn test_closure_is_a_tagger() {
        let fake = |text: &str| -> Result<Vec<TaggedToken>, TagError> {
            Ok(text
                .split_whitespace()
                .map(|w| TaggedToken::new(w, PartOfSpeech::Noun))
                .collect())
        };
        let tokens = fake.tag("two words").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "words");
    }
}
