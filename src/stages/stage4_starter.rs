use tracing::debug;

use crate::models::StarterTable;

/// Result of starter injection
#[derive(Debug, Clone)]
pub struct StarterResult {
    /// Final text, with the interjection prepended when one matched
    pub text: String,
    /// The interjection that was prepended, if any
    pub starter: Option<String>,
}

/// Prepend an archaic interjection when the text opens with a known phrase.
///
/// Keys are compared case-insensitively against the start of the text in
/// table order and the first hit wins, so at most one starter is added.
pub fn inject_starter(text: &str, enabled: bool, table: &StarterTable) -> StarterResult {
    if !enabled {
        return StarterResult {
            text: text.to_string(),
            starter: None,
        };
    }

    let lowered = text.to_lowercase();
    let hit = table
        .entries()
        .iter()
        .find(|(opening, _)| lowered.starts_with(opening.as_str()));

    match hit {
        Some((opening, interjection)) => {
            debug!("Starter '{}' matched opening '{}'", interjection, opening);
            StarterResult {
                text: format!("{}, {}", interjection, text),
                starter: Some(interjection.clone()),
            }
        }
        None => StarterResult {
            text: text.to_string(),
            starter: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StarterTable {
        StarterTable::from_entries(vec![
            ("hello", "Hark"),
            ("hello there", "What ho"),
            ("well,", "Marry"),
        ])
        .unwrap()
    }

    #[test]
    fn test_prepends_to_original_text() {
        let result = inject_starter("HELLO, good sir.", true, &table());
        assert_eq!(result.text, "Hark, HELLO, good sir.");
        assert_eq!(result.starter.as_deref(), Some("Hark"));
    }

    #[test]
    fn test_first_declared_key_wins() {
        let result = inject_starter("Hello there, friend", true, &table());
        assert_eq!(result.text, "Hark, Hello there, friend");
    }

    #[test]
    fn test_disabled_or_unmatched() {
        assert_eq!(inject_starter("Hello", false, &table()).text, "Hello");
        assert_eq!(inject_starter("Good den", true, &table()).text, "Good den");
        assert!(inject_starter("", true, &table()).starter.is_none());
    }

    #[test]
    fn test_never_stacks_starters() {
        let once = inject_starter("Well, I know not.", true, &table()).text;
        let twice = inject_starter(&once, true, &table()).text;
        assert_eq!(once, "Marry, Well, I know not.");
        assert_eq!(twice, once);
    }
}
