//! Format checks for individual values

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Absolute URL with a scheme, e.g. `https://band.example`
pub fn is_url(value: &str) -> bool {
    url::Url::parse(value.trim()).is_ok()
}

/// At least `min_len` characters of digits, spaces and `+ - ( ) .`,
/// containing at least one digit
pub fn is_phone(value: &str, min_len: usize) -> bool {
    let value = value.trim();
    value.chars().count() >= min_len
        && value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'))
}
