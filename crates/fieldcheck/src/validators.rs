// File: src/validators.rs
// Purpose: Basic validators (no external state)

use once_cell::sync::Lazy;
use regex::Regex;

/// Default email pattern: local part, `@`, domain with a dotted TLD
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Default minimum digit count for phone numbers
pub const DEFAULT_PHONE_MIN_DIGITS: usize = 10;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).unwrap());

/// Validate email format against the default pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Clone of the default email regex, for rules that carry their own pattern
pub fn default_email_regex() -> Regex {
    EMAIL_REGEX.clone()
}

/// Count ASCII digits in a string
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Validate phone format: digits, spaces, `+`, `-`, and parentheses only,
/// with at least `min_digits` digit characters.
pub fn is_valid_phone(value: &str, min_digits: usize) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    allowed && digit_count(value) >= min_digits
}

/// Validate URL format: must parse as an absolute URL with a host
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|parsed| parsed.has_host())
        .unwrap_or(false)
}
