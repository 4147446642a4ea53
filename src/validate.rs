//! Field validation and normalization for operator input.
//!
//! Tax ids are checked by digit count only, with separators stripped; no
//! checksum. Phone and email formats follow the shapes the business has
//! always accepted, not any full grammar.

use std::sync::OnceLock;

use regex::Regex;

static PHONE: OnceLock<Regex> = OnceLock::new();
static EMAIL: OnceLock<Regex> = OnceLock::new();

fn phone_pattern() -> &'static Regex {
    PHONE.get_or_init(|| {
        Regex::new(r"^\(\d{2}\)\s?\d{4,5}-\d{4}$").expect("phone pattern compiles")
    })
}

fn email_pattern() -> &'static Regex {
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
    })
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Business tax id: exactly 14 digits once separators are stripped.
pub fn valid_business_tax_id(tax_id: &str) -> bool {
    digit_count(tax_id) == 14
}

/// Personal tax id: exactly 11 digits once separators are stripped.
pub fn valid_personal_tax_id(tax_id: &str) -> bool {
    digit_count(tax_id) == 11
}

/// Phone shaped like `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`; the space
/// after the area code is optional.
pub fn valid_phone(phone: &str) -> bool {
    phone_pattern().is_match(phone)
}

/// Minimal `local@domain.tld` shape.
pub fn valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Free-text fields are stored trimmed and upper-cased.
pub fn normalize_text(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Email addresses are stored trimmed and lower-cased.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}
