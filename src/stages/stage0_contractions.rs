use std::collections::HashMap;

use regex::{Captures, Regex};
use tracing::debug;

use crate::models::{ContractionTable, TableError};

use super::{fold_key, literal_pattern};

/// Result of contraction expansion
#[derive(Debug, Clone)]
pub struct ContractionResult {
    /// Text with every known contraction expanded
    pub text: String,
    /// Number of contractions expanded
    pub expanded: usize,
}

/// Expands informal contractions ("can't" -> "can not") before any
/// archaic rewriting takes place
#[derive(Debug, Clone)]
pub struct ContractionNormalizer {
    /// Alternation of every contraction, in table order; `None` for an empty table
    pattern: Option<Regex>,
    expansions: HashMap<String, String>,
}

impl ContractionNormalizer {
    pub fn new(table: &ContractionTable) -> Result<Self, TableError> {
        if table.is_empty() {
            return Ok(Self {
                pattern: None,
                expansions: HashMap::new(),
            });
        }

        let alternation = table
            .entries()
            .iter()
            .map(|(from, _)| format!("(?:{})", literal_pattern(from)))
            .collect::<Vec<_>>()
            .join("|");
        let pattern =
            Regex::new(&format!("(?i){}", alternation)).map_err(|source| TableError::Pattern {
                table: "contraction",
                key: "*".to_string(),
                source,
            })?;

        let expansions = table
            .entries()
            .iter()
            .map(|(from, to)| (fold_key(from), to.clone()))
            .collect();

        Ok(Self {
            pattern: Some(pattern),
            expansions,
        })
    }

    /// Whole-word, case-insensitive expansion of every contraction.
    ///
    /// All forms are matched in one left-to-right scan, so an expansion is
    /// never itself rescanned by a later rule.
    pub fn normalize(&self, text: &str) -> ContractionResult {
        let Some(pattern) = &self.pattern else {
            return ContractionResult {
                text: text.to_string(),
                expanded: 0,
            };
        };

        let mut expanded = 0usize;
        let result = pattern.replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            match self.expansions.get(&fold_key(matched)) {
                Some(expansion) => {
                    expanded += 1;
                    expansion.clone()
                }
                None => matched.to_string(),
            }
        });

        if expanded > 0 {
            debug!("Expanded {} contractions", expanded);
        }

        ContractionResult {
            text: result.into_owned(),
            expanded,
        }
    }
}
