use serde::{Deserialize, Serialize};

/// Coarse part-of-speech categories produced by a tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Pronoun,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Particle,
    Interjection,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    /// Categories whose words may be swapped for an archaic form
    pub const ELIGIBLE: [PartOfSpeech; 6] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Determiner,
    ];

    /// Map a Penn Treebank tag (as emitted by most English taggers)
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "NN" | "NNS" => PartOfSpeech::Noun,
            "NNP" | "NNPS" => PartOfSpeech::ProperNoun,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" | "MD" => PartOfSpeech::Verb,
            "PRP" | "PRP$" | "WP" | "WP$" | "EX" => PartOfSpeech::Pronoun,
            "JJ" | "JJR" | "JJS" => PartOfSpeech::Adjective,
            "RB" | "RBR" | "RBS" | "WRB" => PartOfSpeech::Adverb,
            "DT" | "PDT" | "WDT" => PartOfSpeech::Determiner,
            "IN" => PartOfSpeech::Preposition,
            "CC" => PartOfSpeech::Conjunction,
            "CD" => PartOfSpeech::Numeral,
            "RP" | "TO" | "POS" => PartOfSpeech::Particle,
            "UH" => PartOfSpeech::Interjection,
            "." | "," | ":" | "(" | ")" | "``" | "''" | "#" | "$" => PartOfSpeech::Punctuation,
            _ => PartOfSpeech::Other,
        }
    }
}

/// A token as reported by a tagger: the surface text, verbatim, plus its tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text exactly as it appeared (case preserved)
    pub text: String,
    /// Part-of-speech assigned by the tagger
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligible_set() {
        let eligible = PartOfSpeech::ELIGIBLE;
        assert!(eligible.contains(&PartOfSpeech::Noun));
        assert!(eligible.contains(&PartOfSpeech::Determiner));
        assert!(!eligible.contains(&PartOfSpeech::ProperNoun));
        assert!(!eligible.contains(&PartOfSpeech::Punctuation));
        assert!(!eligible.contains(&PartOfSpeech::Numeral));
    }

    #[test]
    fn test_from_penn() {
        assert_eq!(PartOfSpeech::from_penn("NNS"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_penn("NNP"), PartOfSpeech::ProperNoun);
        assert_eq!(PartOfSpeech::from_penn("PRP$"), PartOfSpeech::Pronoun);
        assert_eq!(PartOfSpeech::from_penn("VBZ"), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::from_penn(","), PartOfSpeech::Punctuation);
        assert_eq!(PartOfSpeech::from_penn("FW"), PartOfSpeech::Other);
    }
}
