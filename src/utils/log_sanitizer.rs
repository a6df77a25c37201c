//! Log sanitization utilities for masking sensitive data.
//!
//! Masks usernames before logging, preventing accidental exposure of PII.

/// Mask a username for safe logging.
///
/// Shows only the first 3 characters followed by asterisks.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_username("johndoe"), "joh***");
/// assert_eq!(mask_username("ab"), "ab***");
/// ```
pub fn mask_username(username: &str) -> String {
    // Cut on a char boundary so multi-byte usernames cannot panic.
    let visible_end = username
        .char_indices()
        .nth(3)
        .map_or(username.len(), |(index, _)| index);
    format!("{}***", &username[..visible_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_username() {
        assert_eq!(mask_username("johndoe"), "joh***");
        assert_eq!(mask_username("ab"), "ab***");
        assert_eq!(mask_username("a"), "a***");
    }

    #[test]
    fn test_mask_username_multibyte() {
        assert_eq!(mask_username("ééé"), "ééé***");
        assert_eq!(mask_username("éléonore"), "élé***");
        assert_eq!(mask_username("日本語のなまえ"), "日本語***");
    }
}
