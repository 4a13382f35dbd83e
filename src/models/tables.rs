use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a rule table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("{table} table: empty key")]
    EmptyKey { table: &'static str },

    #[error("{table} table: duplicate key '{key}'")]
    DuplicateKey { table: &'static str, key: String },

    #[error("{table} table: '{key}' has no replacement candidates")]
    NoCandidates { table: &'static str, key: String },

    #[error("{table} table: '{key}' has an empty replacement")]
    EmptyReplacement { table: &'static str, key: String },

    #[error("lexicon table: '{key}' is not a single word")]
    NotAWord { key: String },

    #[error("{table} table: cannot compile matcher for '{key}': {source}")]
    Pattern {
        table: &'static str,
        key: String,
        source: regex::Error,
    },
}

/// Replacement for a matched key: a fixed string or a set of candidates
/// from which one is drawn uniformly per match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Replacement {
    One(String),
    Choice(Vec<String>),
}

impl Replacement {
    /// Build from a candidate list, collapsing a single candidate to `One`
    pub fn from_candidates<S: AsRef<str>>(candidates: &[S]) -> Self {
        match candidates {
            [only] => Replacement::One(only.as_ref().to_string()),
            many => Replacement::Choice(many.iter().map(|c| c.as_ref().to_string()).collect()),
        }
    }

    /// Resolve to a concrete string, drawing from `rng` when there are candidates
    pub fn choose<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a str {
        match self {
            Replacement::One(value) => value,
            Replacement::Choice(candidates) => candidates
                .choose(rng)
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    /// All possible outputs in declaration order
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            Replacement::One(value) => vec![value.as_str()],
            Replacement::Choice(candidates) => candidates.iter().map(String::as_str).collect(),
        }
    }

    fn validate(&self, table: &'static str, key: &str) -> Result<(), TableError> {
        let candidates = self.candidates();
        if candidates.is_empty() {
            return Err(TableError::NoCandidates {
                table,
                key: key.to_string(),
            });
        }
        if candidates.iter().any(|c| c.trim().is_empty()) {
            return Err(TableError::EmptyReplacement {
                table,
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

/// A single `from -> to` entry, as stored in table files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry<V> {
    pub from: String,
    pub to: V,
}

/// Tracks keys already seen while building a table
struct KeyGuard {
    table: &'static str,
    seen: HashSet<String>,
}

impl KeyGuard {
    fn new(table: &'static str) -> Self {
        Self {
            table,
            seen: HashSet::new(),
        }
    }

    /// Trim the key and reject it if empty or already present (case-insensitive)
    fn admit(&mut self, key: &str) -> Result<String, TableError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(TableError::EmptyKey { table: self.table });
        }
        if !self.seen.insert(key.to_lowercase()) {
            return Err(TableError::DuplicateKey {
                table: self.table,
                key: key.to_string(),
            });
        }
        Ok(key.to_string())
    }
}

fn check_text(table: &'static str, key: &str, value: &str) -> Result<(), TableError> {
    if value.trim().is_empty() {
        return Err(TableError::EmptyReplacement {
            table,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Contracted form -> expanded form, applied in declaration order
#[derive(Debug, Clone, Default)]
pub struct ContractionTable {
    entries: Vec<(String, String)>,
}

impl ContractionTable {
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut guard = KeyGuard::new("contraction");
        let mut out = Vec::new();
        for (key, value) in entries {
            let key = guard.admit(key.as_ref())?;
            let value = value.into();
            check_text("contraction", &key, &value)?;
            out.push((key, value));
        }
        Ok(Self { entries: out })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Modern phrase -> archaic replacement, matched longest key first
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    entries: Vec<(String, Replacement)>,
    /// Indices into `entries` by descending key length; ties keep declaration order
    longest_first: Vec<usize>,
}

impl PhraseTable {
    pub fn from_entries<I, K>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, Replacement)>,
        K: AsRef<str>,
    {
        let mut guard = KeyGuard::new("phrase");
        let mut out = Vec::new();
        for (key, value) in entries {
            let key = guard.admit(key.as_ref())?;
            value.validate("phrase", &key)?;
            out.push((key, value));
        }

        let mut longest_first: Vec<usize> = (0..out.len()).collect();
        // sort_by_key is stable, so equal lengths stay in declaration order
        longest_first.sort_by_key(|&i| std::cmp::Reverse(out[i].0.chars().count()));

        Ok(Self {
            entries: out,
            longest_first,
        })
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[(String, Replacement)] {
        &self.entries
    }

    /// Entries in matching order: longest key first
    pub fn longest_first(&self) -> impl Iterator<Item = &(String, Replacement)> {
        self.longest_first.iter().map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single lowercase word -> archaic replacement
#[derive(Debug, Clone, Default)]
pub struct LexicalTable {
    entries: Vec<(String, Replacement)>,
    index: HashMap<String, usize>,
}

impl LexicalTable {
    pub fn from_entries<I, K>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, Replacement)>,
        K: AsRef<str>,
    {
        let mut guard = KeyGuard::new("lexicon");
        let mut out = Vec::new();
        let mut index = HashMap::new();
        for (key, value) in entries {
            let key = guard.admit(key.as_ref())?.to_lowercase();
            if key.chars().any(char::is_whitespace) {
                return Err(TableError::NotAWord { key });
            }
            value.validate("lexicon", &key)?;
            index.insert(key.clone(), out.len());
            out.push((key, value));
        }
        Ok(Self {
            entries: out,
            index,
        })
    }

    /// Look up a word; the caller's casing is ignored
    pub fn get(&self, word: &str) -> Option<&Replacement> {
        self.index
            .get(&word.to_lowercase())
            .map(|&i| &self.entries[i].1)
    }

    pub fn entries(&self) -> &[(String, Replacement)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Opening phrase -> interjection, scanned in declaration order
#[derive(Debug, Clone, Default)]
pub struct StarterTable {
    entries: Vec<(String, String)>,
}

impl StarterTable {
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut guard = KeyGuard::new("starter");
        let mut out = Vec::new();
        for (key, value) in entries {
            let key = guard.admit(key.as_ref())?.to_lowercase();
            let value = value.into();
            check_text("starter", &key, &value)?;
            out.push((key, value));
        }
        Ok(Self { entries: out })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four read-only tables consumed by the pipeline
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    pub contractions: ContractionTable,
    pub phrases: PhraseTable,
    pub lexicon: LexicalTable,
    pub starters: StarterTable,
}

/// On-disk table format; arrays keep declaration order and expose duplicates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractions: Option<Vec<TableEntry<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<TableEntry<Replacement>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<Vec<TableEntry<Replacement>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starters: Option<Vec<TableEntry<String>>>,
}

impl TableFile {
    /// Snapshot a set of tables for export
    pub fn from_tables(tables: &RuleTables) -> Self {
        Self {
            contractions: Some(to_file_entries(tables.contractions.entries())),
            phrases: Some(to_file_entries(tables.phrases.entries())),
            lexicon: Some(to_file_entries(tables.lexicon.entries())),
            starters: Some(to_file_entries(tables.starters.entries())),
        }
    }

    /// Build tables, taking any table missing from the file from `fallback`
    pub fn into_tables(self, fallback: &RuleTables) -> Result<RuleTables, TableError> {
        let contractions = match self.contractions {
            Some(entries) => {
                ContractionTable::from_entries(entries.into_iter().map(|e| (e.from, e.to)))?
            }
            None => fallback.contractions.clone(),
        };
        let phrases = match self.phrases {
            Some(entries) => {
                PhraseTable::from_entries(entries.into_iter().map(|e| (e.from, e.to)))?
            }
            None => fallback.phrases.clone(),
        };
        let lexicon = match self.lexicon {
            Some(entries) => {
                LexicalTable::from_entries(entries.into_iter().map(|e| (e.from, e.to)))?
            }
            None => fallback.lexicon.clone(),
        };
        let starters = match self.starters {
            Some(entries) => {
                StarterTable::from_entries(entries.into_iter().map(|e| (e.from, e.to)))?
            }
            None => fallback.starters.clone(),
        };

        Ok(RuleTables {
            contractions,
            phrases,
            lexicon,
            starters,
        })
    }
}

fn to_file_entries<V: Clone>(entries: &[(String, V)]) -> Vec<TableEntry<V>> {
    entries
        .iter()
        .map(|(from, to)| TableEntry {
            from: from.clone(),
            to: to.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn one(s: &str) -> Replacement {
        Replacement::One(s.to_string())
    }

    #[test]
    fn test_phrase_order_longest_first_with_stable_ties() {
        let table = PhraseTable::from_entries(vec![
            ("my friend", one("mine own friend")),
            ("good morning", one("good morrow")),
            ("hi", one("hail")),
            ("my enemy", one("mine enemy")),
        ])
        .unwrap();

        let keys: Vec<&str> = table.longest_first().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["good morning", "my friend", "my enemy", "hi"]);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let err = LexicalTable::from_entries(vec![("fear", one("dread")), ("Fear", one("fright"))])
            .unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateKey {
                table: "lexicon",
                key: "Fear".to_string()
            }
        );
    }

    #[test]
    fn test_lexicon_rejects_phrases_and_empty_candidates() {
        assert!(matches!(
            LexicalTable::from_entries(vec![("good day", one("good den"))]),
            Err(TableError::NotAWord { .. })
        ));
        assert!(matches!(
            LexicalTable::from_entries(vec![("you", Replacement::Choice(vec![]))]),
            Err(TableError::NoCandidates { .. })
        ));
        assert!(matches!(
            StarterTable::from_entries(vec![("hello", " ")]),
            Err(TableError::EmptyReplacement { .. })
        ));
    }

    #[test]
    fn test_lexicon_lookup_ignores_case() {
        let table = LexicalTable::from_entries(vec![("You", one("thou"))]).unwrap();
        assert_eq!(table.get("YOU"), Some(&one("thou")));
        assert_eq!(table.entries()[0].0, "you");
        assert!(table.get("thee").is_none());
    }

    #[test]
    fn test_choice_draws_a_candidate() {
        let replacement = Replacement::from_candidates(&["verily", "forsooth"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = replacement.choose(&mut rng);
            assert!(picked == "verily" || picked == "forsooth");
        }
        assert_eq!(Replacement::from_candidates(&["thee"]), one("thee"));
    }

    #[test]
    fn test_table_file_fallback() {
        let fallback = RuleTables {
            starters: StarterTable::from_entries(vec![("hello", "Hark")]).unwrap(),
            ..Default::default()
        };
        let file: TableFile = serde_json::from_str(
            r#"{"lexicon": [{"from": "you", "to": "thou"}, {"from": "yes", "to": ["aye", "yea"]}]}"#,
        )
        .unwrap();

        let tables = file.into_tables(&fallback).unwrap();
        assert_eq!(tables.lexicon.len(), 2);
        assert_eq!(
            tables.lexicon.get("yes"),
            Some(&Replacement::Choice(vec!["aye".to_string(), "yea".to_string()]))
        );
        assert_eq!(tables.starters.len(), 1);
        assert!(tables.phrases.is_empty());
    }
}
