//! Phone number utilities
//!
//! The backend only accepts Kenyan mobile numbers in canonical
//! `+254XXXXXXXXX` form. These functions canonicalize locally-entered
//! numbers, validate them before submission, and format them for display
//! and logging. All of them are pure and total: malformed input simply
//! fails validation or passes through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// Kenyan country calling code prefix
pub const KENYA_PREFIX: &str = "+254";

// Canonical Kenyan mobile number: +254 followed by exactly 9 digits
static KENYAN_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+254\d{9}$").unwrap());

// Bare 9-digit subscriber number with no prefix at all
static SUBSCRIBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{9}$").unwrap());

/// Normalize a phone number into canonical `+254XXXXXXXXX` form
///
/// Strips whitespace and formatting characters, then applies the local
/// dialing conventions:
/// - already `+254`-prefixed numbers are returned unchanged;
/// - a 10-character number with a leading `0` has the `0` replaced by `+254`;
/// - a bare 9-digit subscriber number gets `+254` prepended;
/// - anything else is returned cleaned but otherwise unchanged, and will be
///   rejected by [`is_valid_kenyan_phone`].
pub fn normalize_phone_number(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if cleaned.starts_with(KENYA_PREFIX) {
        return cleaned;
    }

    if cleaned.starts_with('0') && cleaned.len() == 10 {
        return format!("{}{}", KENYA_PREFIX, &cleaned[1..]);
    }

    if SUBSCRIBER_REGEX.is_match(&cleaned) {
        return format!("{}{}", KENYA_PREFIX, cleaned);
    }

    cleaned
}

/// Check if a phone number is a valid canonical Kenyan mobile number
///
/// True iff the number is exactly `+254` followed by 9 digits (13 characters
/// total). No other country codes are accepted.
pub fn is_valid_kenyan_phone(phone: &str) -> bool {
    KENYAN_PHONE_REGEX.is_match(phone)
}

/// Format a canonical Kenyan number for display
///
/// Valid numbers are grouped 3-3-3 after the prefix (e.g.
/// `+254 712 345 678`). Invalid input is returned unchanged; empty input
/// yields empty output.
pub fn format_phone_for_display(phone: &str) -> String {
    if !is_valid_kenyan_phone(phone) {
        return phone.to_string();
    }

    let digits = &phone[KENYA_PREFIX.len()..];
    format!(
        "{} {} {} {}",
        KENYA_PREFIX,
        &digits[0..3],
        &digits[3..6],
        &digits[6..9]
    )
}

/// Mask a phone number for logging (e.g. `+254****5678`)
///
/// Keeps the country prefix and last 4 digits of valid numbers; anything
/// else is fully masked so raw input never reaches the logs.
pub fn mask_phone_number(phone: &str) -> String {
    if is_valid_kenyan_phone(phone) {
        format!("{}****{}", KENYA_PREFIX, &phone[phone.len() - 4..])
    } else {
        "*".repeat(phone.chars().count().min(8))
    }
}
