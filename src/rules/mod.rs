pub mod contractions;
pub mod lexicon;
pub mod phrases;
pub mod starters;

pub use contractions::CONTRACTIONS;
pub use lexicon::LEXICON;
pub use phrases::PHRASES;
pub use starters::STARTERS;

use crate::models::{
    ContractionTable, LexicalTable, PhraseTable, Replacement, RuleTables, StarterTable, TableError,
};

/// Build the embedded rule tables
pub fn builtin_tables() -> Result<RuleTables, TableError> {
    Ok(RuleTables {
        contractions: ContractionTable::from_entries(CONTRACTIONS.iter().copied())?,
        phrases: PhraseTable::from_entries(
            PHRASES
                .iter()
                .map(|(from, to)| (*from, Replacement::from_candidates(*to))),
        )?,
        lexicon: LexicalTable::from_entries(
            LEXICON
                .iter()
                .map(|(from, to)| (*from, Replacement::from_candidates(*to))),
        )?,
        starters: StarterTable::from_entries(STARTERS.iter().copied())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_build() {
        let tables = builtin_tables().unwrap();
        assert_eq!(tables.contractions.len(), CONTRACTIONS.len());
        assert_eq!(tables.phrases.len(), PHRASES.len());
        assert_eq!(tables.lexicon.len(), LEXICON.len());
        assert_eq!(tables.starters.len(), STARTERS.len());
    }

    #[test]
    fn test_builtin_fear_has_single_rendering() {
        let tables = builtin_tables().unwrap();
        assert_eq!(
            tables.lexicon.get("fear"),
            Some(&Replacement::One("dread".to_string()))
        );
    }

    #[test]
    fn test_builtin_lexicon_keys_are_lowercase_words() {
        for (key, _) in LEXICON {
            assert_eq!(*key, key.to_lowercase());
            assert!(!key.contains(' '), "lexicon key '{}' has a space", key);
        }
    }
}
