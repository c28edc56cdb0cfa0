//! Common validation utilities

/// Number of digits in a one-time passcode
pub const OTP_LENGTH: usize = 6;

/// Check if a one-time passcode is exactly six ASCII digits
pub fn is_valid_otp(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_otp() {
        assert!(is_valid_otp("123456"));
        assert!(is_valid_otp("000000"));
        assert!(!is_valid_otp("12345")); // Too short
        assert!(!is_valid_otp("1234567")); // Too long
        assert!(!is_valid_otp("12345a"));
        assert!(!is_valid_otp(""));
    }

    #[test]
    fn test_validators() {
        assert!(validators::not_empty("x"));
        assert!(!validators::not_empty("   "));
        assert!(validators::length_between("abcd", 1, 4));
        assert!(!validators::length_between("abcd", 5, 10));
    }
}
