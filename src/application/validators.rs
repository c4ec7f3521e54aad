use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// True when the value is empty after trimming.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Minimal address check used by the waitlist form: somewhere in the value,
/// non-space text, an `@`, more non-space text, a `.` and non-space text.
///
/// Deliverability is left to the email provider.
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
