use std::collections::HashMap;

use crate::models::{PartOfSpeech, TaggedToken};

use super::{TagError, Tagger, tokenize};

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "what", "thou", "thee", "thy", "thine", "thyself", "someone", "somebody", "anyone",
    "anybody", "everyone", "everybody", "nobody", "something", "anything", "everything",
    "nothing",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "all",
    "both", "either", "neither", "another", "such",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "of", "off", "over",
    "under", "without", "within", "upon", "unto", "toward", "towards", "like", "than",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "if", "while",
    "unless", "whether",
];

const PARTICLES: &[&str] = &["to", "'s"];

const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "go",
    "goes", "went", "gone", "know", "knows", "knew", "think", "thinks", "thought", "say", "says",
    "said", "make", "makes", "made", "come", "came", "see", "saw", "get", "got", "take", "took",
    "give", "gave", "tell", "told", "want", "need", "love", "help", "listen", "kill", "fear",
    "let", "art", "hath", "doth", "dost", "hast", "wilt", "shalt",
];

const ADVERBS: &[&str] = &[
    "not", "very", "really", "truly", "often", "soon", "again", "here", "there", "now", "then",
    "always", "never", "perhaps", "maybe", "why", "how", "when", "where", "too", "also", "just",
    "please", "today", "tonight", "tomorrow", "yesterday", "yes", "no", "okay", "ok", "well",
    "quite", "still", "already", "ever", "anon", "hither", "thither", "yonder",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "happy", "sad", "beautiful", "pretty", "ugly", "crazy", "stupid", "afraid",
    "kind", "great", "little", "old", "new", "young", "big", "small", "long", "high", "fair",
    "dear", "sweet", "brave", "noble", "true", "false",
];

const INTERJECTIONS: &[&str] = &["oh", "ah", "hello", "hey", "hi", "wow", "alas", "hmm"];

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "hundred", "thousand",
];

/// Dictionary- and suffix-driven tagger for English, needing no model files.
///
/// Title-case words that do not open a sentence are treated as proper nouns;
/// unknown words fall back to suffix rules and finally to noun.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    words: HashMap<&'static str, PartOfSpeech>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        let classes: [(&[&'static str], PartOfSpeech); 10] = [
            (NUMBER_WORDS, PartOfSpeech::Numeral),
            (INTERJECTIONS, PartOfSpeech::Interjection),
            (ADJECTIVES, PartOfSpeech::Adjective),
            (ADVERBS, PartOfSpeech::Adverb),
            (VERBS, PartOfSpeech::Verb),
            (PARTICLES, PartOfSpeech::Particle),
            (CONJUNCTIONS, PartOfSpeech::Conjunction),
            (PREPOSITIONS, PartOfSpeech::Preposition),
            (DETERMINERS, PartOfSpeech::Determiner),
            (PRONOUNS, PartOfSpeech::Pronoun),
        ];

        // Later classes overwrite earlier ones for words listed twice
        let mut words = HashMap::new();
        for (list, pos) in classes {
            for word in list {
                words.insert(*word, pos);
            }
        }
        Self { words }
    }

    fn tag_word(&self, word: &str, sentence_start: bool) -> PartOfSpeech {
        if !word.chars().any(char::is_alphanumeric) {
            return PartOfSpeech::Punctuation;
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return PartOfSpeech::Numeral;
        }
        if !sentence_start && is_title_case(word) {
            return PartOfSpeech::ProperNoun;
        }

        let lower = word.to_lowercase().replace('\u{2019}', "'");
        if let Some(pos) = self.words.get(lower.as_str()) {
            return *pos;
        }
        suffix_guess(&lower)
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TagError> {
        let mut sentence_start = true;
        let tokens = tokenize(text)
            .into_iter()
            .map(|word| {
                let pos = self.tag_word(word, sentence_start);
                sentence_start = match pos {
                    PartOfSpeech::Punctuation => {
                        matches!(word, "." | "!" | "?") || sentence_start
                    }
                    _ => false,
                };
                TaggedToken::new(word, pos)
            })
            .collect();
        Ok(tokens)
    }
}

/// Uppercase first letter followed by at least one lowercase letter
fn is_title_case(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic());
    match letters.next() {
        Some(first) if first.is_uppercase() => letters.any(|c| c.is_lowercase()),
        _ => false,
    }
}

fn suffix_guess(lower: &str) -> PartOfSpeech {
    const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish"];

    if lower.ends_with("ly") {
        PartOfSpeech::Adverb
    } else if lower.ends_with("ing") || lower.ends_with("ed") {
        PartOfSpeech::Verb
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        PartOfSpeech::Adjective
    } else {
        PartOfSpeech::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PartOfSpeech)> {
        LexiconTagger::new()
            .tag(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    #[test]
    fn test_closed_classes() {
        let tagged = tags("you are my friend");
        assert_eq!(
            tagged,
            vec![
                ("you".to_string(), PartOfSpeech::Pronoun),
                ("are".to_string(), PartOfSpeech::Verb),
                ("my".to_string(), PartOfSpeech::Pronoun),
                ("friend".to_string(), PartOfSpeech::Noun),
            ]
        );
    }

    #[test]
    fn test_proper_noun_mid_sentence() {
        let tagged = tags("Tell Will. Will you come?");
        assert_eq!(tagged[0].1, PartOfSpeech::Verb);
        assert_eq!(tagged[1].1, PartOfSpeech::ProperNoun);
        assert_eq!(tagged[2].1, PartOfSpeech::Punctuation);
        // After a full stop the next word opens a sentence
        assert_eq!(tagged[3].1, PartOfSpeech::Verb);
        assert_eq!(tagged[6].1, PartOfSpeech::Punctuation);
    }

    #[test]
    fn test_all_caps_is_not_a_proper_noun() {
        let tagged = tags("I LOVE YOU");
        assert_eq!(tagged[0].1, PartOfSpeech::Pronoun);
        assert_eq!(tagged[2].1, PartOfSpeech::Pronoun);
    }

    #[test]
    fn test_numerals_and_suffixes() {
        let tagged = tags("he quickly painted 3 wonderful doors");
        assert_eq!(tagged[1].1, PartOfSpeech::Adverb);
        assert_eq!(tagged[2].1, PartOfSpeech::Verb);
        assert_eq!(tagged[3].1, PartOfSpeech::Numeral);
        assert_eq!(tagged[4].1, PartOfSpeech::Adjective);
        assert_eq!(tagged[5].1, PartOfSpeech::Noun);
    }

    #[test]
    fn test_surface_text_preserved() {
        let tokens = LexiconTagger::new().tag("Good MORROW, sir!").unwrap();
        let surface: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(surface, vec!["Good", "MORROW", ",", "sir", "!"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(LexiconTagger::new().tag("").unwrap().is_empty());
    }
}
