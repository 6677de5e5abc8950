//! Utility functions for billscope.

/// Truncate a string to at most `max_chars` characters, exactly.
///
/// Counts characters rather than bytes so multi-byte UTF-8 input is cut
/// on a character boundary. Returns the input unchanged when it is short
/// enough.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..."
/// if anything was cut.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            let truncated = &s[..idx];
            format!("{}...", truncated.trim_end())
        }
        None => s.to_string(),
    }
}

/// Mask a secret for display, keeping the first and last four characters.
pub fn mask_secret(secret: &str) -> String {
    if secret.len() <= 8 {
        return "****".to_string();
    }
    format!("{}...{}", &secret[..4], &secret[secret.len() - 4..])
}
