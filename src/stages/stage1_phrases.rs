use rand::Rng;
use regex::{Captures, Regex};
use tracing::debug;

use crate::models::{PhraseTable, Replacement, TableError};

use super::{literal_matcher, match_case};

/// Result of phrase replacement
#[derive(Debug, Clone)]
pub struct PhraseResult {
    /// Text after every phrase rule has run
    pub text: String,
    /// Number of phrase occurrences replaced
    pub replaced: usize,
}

/// Replaces multi-word modern phrases with archaic ones, longest key first
#[derive(Debug, Clone)]
pub struct PhraseReplacer {
    /// Compiled rules in matching order
    rules: Vec<(Regex, Replacement)>,
}

impl PhraseReplacer {
    pub fn new(table: &PhraseTable) -> Result<Self, TableError> {
        let rules = table
            .longest_first()
            .map(|(from, to)| Ok((literal_matcher("phrase", from)?, to.clone())))
            .collect::<Result<Vec<_>, TableError>>()?;
        Ok(Self { rules })
    }

    /// Apply every rule in descending key length.
    ///
    /// Each rule runs over the text as already rewritten by longer rules, so a
    /// short key can never split apart a longer phrase that was replaced
    /// first. Candidate sets are resolved per occurrence from `rng`.
    pub fn replace<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> PhraseResult {
        let mut current = text.to_string();
        let mut replaced = 0usize;

        for (pattern, replacement) in &self.rules {
            let mut hits = 0usize;
            let next = pattern.replace_all(&current, |caps: &Captures| {
                hits += 1;
                match_case(&caps[0], replacement.choose(rng))
            });
            if hits > 0 {
                debug!("Phrase '{}' replaced {} times", pattern.as_str(), hits);
                current = next.into_owned();
                replaced += hits;
            }
        }

        PhraseResult {
            text: current,
            replaced,
        }
    }
}
