use rand::Rng;
use tracing::debug;

use crate::models::{LexicalTable, PartOfSpeech, TaggedToken};

use super::match_case;

/// Configuration for word-level substitution
#[derive(Debug, Clone)]
pub struct LexicalConfig {
    /// Parts of speech whose words may be substituted
    pub eligible: Vec<PartOfSpeech>,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            eligible: PartOfSpeech::ELIGIBLE.to_vec(),
        }
    }
}

/// Result of word-level substitution
#[derive(Debug, Clone)]
pub struct LexicalResult {
    /// One output word per input token, in order
    pub words: Vec<String>,
    /// Number of tokens that were replaced
    pub substituted: usize,
}

/// Swap eligible tokens for their archaic form.
///
/// Strictly one output per token: tokens are never merged or split, and
/// ineligible or unknown tokens come back verbatim.
pub fn substitute_words<R: Rng + ?Sized>(
    tokens: &[TaggedToken],
    table: &LexicalTable,
    config: &LexicalConfig,
    rng: &mut R,
) -> LexicalResult {
    let mut substituted = 0usize;

    let words = tokens
        .iter()
        .map(|token| {
            if !config.eligible.contains(&token.pos) {
                return token.text.clone();
            }
            match table.get(&token.text) {
                Some(replacement) => {
                    substituted += 1;
                    match_case(&token.text, replacement.choose(rng))
                }
                None => token.text.clone(),
            }
        })
        .collect();

    debug!("Substituted {} of {} tokens", substituted, tokens.len());

    LexicalResult { words, substituted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Replacement;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn table() -> LexicalTable {
        LexicalTable::from_entries(vec![
            ("you", Replacement::One("thou".to_string())),
            ("are", Replacement::One("art".to_string())),
            ("will", Replacement::One("shall".to_string())),
            ("yes", Replacement::from_candidates(&["aye", "yea"])),
        ])
        .unwrap()
    }

    fn tok(text: &str, pos: PartOfSpeech) -> TaggedToken {
        TaggedToken::new(text, pos)
    }

    #[test]
    fn test_substitutes_eligible_tokens() {
        let tokens = vec![
            tok("You", PartOfSpeech::Pronoun),
            tok("are", PartOfSpeech::Verb),
            tok("kind", PartOfSpeech::Adjective),
            tok(".", PartOfSpeech::Punctuation),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let result = substitute_words(&tokens, &table(), &LexicalConfig::default(), &mut rng);
        assert_eq!(result.words, vec!["Thou", "art", "kind", "."]);
        assert_eq!(result.substituted, 2);
    }

    #[test]
    fn test_proper_noun_is_left_alone() {
        let tokens = vec![
            tok("Will", PartOfSpeech::ProperNoun),
            tok("will", PartOfSpeech::Verb),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let result = substitute_words(&tokens, &table(), &LexicalConfig::default(), &mut rng);
        assert_eq!(result.words, vec!["Will", "shall"]);
    }

    #[test]
    fn test_all_caps_token() {
        let tokens = vec![tok("YOU", PartOfSpeech::Pronoun)];
        let mut rng = StdRng::seed_from_u64(3);
        let result = substitute_words(&tokens, &table(), &LexicalConfig::default(), &mut rng);
        assert_eq!(result.words, vec!["THOU"]);
    }

    #[test]
    fn test_output_is_one_to_one() {
        let tokens = vec![
            tok("yes", PartOfSpeech::Adverb),
            tok(",", PartOfSpeech::Punctuation),
            tok("yes", PartOfSpeech::Adverb),
        ];
        let mut rng = StdRng::seed_from_u64(11);
        let result = substitute_words(&tokens, &table(), &LexicalConfig::default(), &mut rng);
        assert_eq!(result.words.len(), tokens.len());
        assert!(["aye", "yea"].contains(&result.words[0].as_str()));
        assert_eq!(result.words[1], ",");
    }

    #[test]
    fn test_custom_eligible_set() {
        let config = LexicalConfig {
            eligible: vec![PartOfSpeech::Verb],
        };
        let tokens = vec![
            tok("you", PartOfSpeech::Pronoun),
            tok("are", PartOfSpeech::Verb),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let result = substitute_words(&tokens, &table(), &config, &mut rng);
        assert_eq!(result.words, vec!["you", "art"]);
    }
}
