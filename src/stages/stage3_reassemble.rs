use lazy_static::lazy_static;
use regex::Regex;

use super::capitalize_first;

lazy_static! {
    // Whitespace left in front of closing punctuation by the token join
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\s+([,.!?;:])").unwrap();
}

/// Join substituted words back into a sentence.
///
/// Words are joined with single spaces, whitespace before `, . ! ? ; :` is
/// dropped, then the first alphabetic character is uppercased.
pub fn reassemble<S: AsRef<str>>(words: &[S]) -> String {
    let joined = words
        .iter()
        .map(|word| word.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    let tightened = SPACE_BEFORE_PUNCT.replace_all(&joined, "$1");
    capitalize_first(&tightened)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reassemble_tightens_punctuation() {
        assert_eq!(
            reassemble(&["hark", ",", "thee", "!"]),
            "Hark, thee!"
        );
        assert_eq!(
            reassemble(&["what", "say'st", "thou", "?", "speak", ":", "now", "."]),
            "What say'st thou? speak: now."
        );
        assert_eq!(
            reassemble(&["stay", ";", "I", "come", ";", "anon"]),
            "Stay; I come; anon"
        );
    }

    #[test]
    fn test_reassemble_is_idempotent_on_clean_text() {
        let once = reassemble(&["Thou art mine own friend, good sir."]);
        let twice = reassemble(&[once.as_str()]);
        assert_eq!(once, twice);
        assert_eq!(once, "Thou art mine own friend, good sir.");
    }

    #[test]
    fn test_reassemble_capitalizes_first_letter_only() {
        assert_eq!(reassemble(&["\"", "oh", "dear"]), "\" Oh dear");
        assert_eq!(reassemble(&["42", "ducats"]), "42 Ducats");
        assert_eq!(reassemble(&["1", "2", "!"]), "1 2!");
    }

    #[test]
    fn test_reassemble_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(reassemble(&empty), "");
    }
}
