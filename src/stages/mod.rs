pub mod stage0_contractions;
pub mod stage1_phrases;
pub mod stage2_lexical;
pub mod stage3_reassemble;
pub mod stage4_starter;

pub use stage0_contractions::*;
pub use stage1_phrases::*;
pub use stage2_lexical::*;
pub use stage3_reassemble::*;
pub use stage4_starter::*;

use regex::Regex;

use crate::models::TableError;

/// Casing style of a matched span, used to restyle its replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Two or more cased letters, none lowercase
    Upper,
    /// First cased letter is uppercase
    Title,
    /// Anything else: keep the replacement as authored
    AsAuthored,
}

impl CaseStyle {
    pub fn of(source: &str) -> Self {
        let mut cased = source.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
        let Some(first) = cased.next() else {
            return CaseStyle::AsAuthored;
        };
        let mut count = 1;
        let mut all_upper = first.is_uppercase();
        for c in cased {
            count += 1;
            all_upper &= c.is_uppercase();
        }

        if all_upper && count >= 2 {
            CaseStyle::Upper
        } else if first.is_uppercase() {
            CaseStyle::Title
        } else {
            CaseStyle::AsAuthored
        }
    }
}

/// Restyle `replacement` to follow the casing of the text it replaces
pub fn match_case(source: &str, replacement: &str) -> String {
    match CaseStyle::of(source) {
        CaseStyle::Upper => replacement.to_uppercase(),
        CaseStyle::Title => capitalize_first(replacement),
        CaseStyle::AsAuthored => replacement.to_string(),
    }
}

/// Uppercase the first alphabetic character, leaving everything else untouched
pub fn capitalize_first(text: &str) -> String {
    match text.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, c)) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..idx]);
            out.extend(c.to_uppercase());
            out.push_str(&text[idx + c.len_utf8()..]);
            out
        }
        None => text.to_string(),
    }
}

/// Whole-word regex source for a literal table key, without flags.
///
/// Spaces in the key match any run of whitespace and an ASCII apostrophe
/// also matches the typographic one.
pub(crate) fn literal_pattern(key: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut pattern = String::new();
    if key.starts_with(is_word) {
        pattern.push_str(r"\b");
    }
    for ch in key.chars() {
        match ch {
            '\'' | '\u{2019}' => pattern.push_str("['\u{2019}]"),
            c if c.is_whitespace() => pattern.push_str(r"\s+"),
            c => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    if key.ends_with(is_word) {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Compile a case-insensitive, whole-word matcher for a literal table key
pub(crate) fn literal_matcher(table: &'static str, key: &str) -> Result<Regex, TableError> {
    Regex::new(&format!("(?i){}", literal_pattern(key))).map_err(|source| TableError::Pattern {
        table,
        key: key.to_string(),
        source,
    })
}

/// Canonical form of a key or matched span: lowercase, plain apostrophes,
/// single spaces
pub(crate) fn fold_key(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_lowercase().replace('\u{2019}', "'"))
        .collect::<Vec<_>>()
        .join(" ")
}
