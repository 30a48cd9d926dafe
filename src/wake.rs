//! Wake-phrase detection and stripping.
//!
//! The voice layer usually removes the wake phrase before handing text to
//! the core; this helper covers callers that pass the raw transcript.

const WAKE_PHRASE: &str = "hey jarvis";

/// If the text starts with the wake phrase, return what follows it.
///
/// Case-insensitive on the prefix; leading commas and spaces after the
/// phrase are dropped. Returns None when the phrase is absent or nothing
/// follows it.
pub fn strip_wake_phrase(text: &str) -> Option<&str> {
    match text.get(..WAKE_PHRASE.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(WAKE_PHRASE) => {
            let rest = text[WAKE_PHRASE.len()..].trim_start_matches([',', ' ']);
            if rest.is_empty() {
                None
            } else {
                Some(rest)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_wake_phrase() {
        assert_eq!(
            strip_wake_phrase("hey jarvis read me my emails"),
            Some("read me my emails")
        );
    }

    #[test]
    fn test_strips_comma_after_phrase() {
        assert_eq!(
            strip_wake_phrase("Hey Jarvis, read my agenda"),
            Some("read my agenda")
        );
    }

    #[test]
    fn test_no_wake_phrase() {
        assert_eq!(strip_wake_phrase("read my agenda"), None);
    }

    #[test]
    fn test_phrase_in_middle_is_ignored() {
        assert_eq!(strip_wake_phrase("so i said hey jarvis"), None);
    }

    #[test]
    fn test_nothing_after_phrase() {
        assert_eq!(strip_wake_phrase("hey jarvis, "), None);
        assert_eq!(strip_wake_phrase("hey jarvis"), None);
    }
}
