//! Mention extraction from comment text
//!
//! Scans for `@username` tokens. A mention starts with `@` at the beginning
//! of the text or after a non-word character, and the username is a run of
//! ASCII letters, digits, or underscores. The boundary rule is stricter than
//! a bare `@(\w+)` match on purpose: a mid-word `@` as in `user@example.com`
//! is not a mention, and usernames are ASCII so a non-ASCII letter ends the
//! token.

/// Extract mentioned usernames in order of first appearance, deduplicated.
pub fn extract_mentions(content: &str) -> Vec<String> {
    let bytes = content.as_bytes();
    let mut mentions: Vec<String> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'@' && (i == 0 || !is_word_byte(bytes[i - 1])) {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && is_word_byte(bytes[end]) {
                end += 1;
            }
            if end > start {
                // Safe: the scanned range is all ASCII
                let username = &content[start..end];
                if !mentions.iter().any(|m| m == username) {
                    mentions.push(username.to_string());
                }
            }
            i = end;
        } else {
            i += 1;
        }
    }

    mentions
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_mention() {
        assert_eq!(extract_mentions("hi @alice!"), vec!["alice"]);
    }

    #[test]
    fn test_multiple_and_dedup() {
        assert_eq!(
            extract_mentions("@bob and @carol, thanks @bob"),
            vec!["bob", "carol"]
        );
    }

    #[test]
    fn test_mention_at_start_and_after_punctuation() {
        assert_eq!(extract_mentions("@dan_99: see (@erin)"), vec!["dan_99", "erin"]);
    }

    #[test]
    fn test_email_is_not_a_mention() {
        assert!(extract_mentions("mail me at user@example.com").is_empty());
    }

    #[test]
    fn test_bare_at_ignored() {
        assert!(extract_mentions("meet @ noon").is_empty());
        assert!(extract_mentions("@").is_empty());
    }

    #[test]
    fn test_non_ascii_terminates_username() {
        assert_eq!(extract_mentions("ping @joão"), vec!["jo"]);
    }
}
