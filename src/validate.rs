/// Permissive email shape check: one `@`, a non-empty local part, a domain
/// with an interior dot, no whitespace anywhere. Not RFC-complete on purpose;
/// the relay rejects anything it cannot deliver to.
pub fn is_valid_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = text.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        }
        _ => false,
    }
}

/// Phone shape check: at least 7 characters, all drawn from digits, `+`,
/// `-`, parentheses and whitespace.
pub fn is_valid_phone(text: &str) -> bool {
    text.chars().count() >= 7
        && text
            .chars()
            .all(|c| matches!(c, '0'..='9' | '+' | '-' | '(' | ')') || c.is_whitespace())
}
