//! Pure input-shape checks, run before any network or store access.

/// Number of digits in a bin number.
pub const BIN_NUMBER_LEN: usize = 13;

/// Number of digits in a license code.
pub const LICENSE_CODE_LEN: usize = 4;

/// Maximum number of characters in a SAD number.
pub const SAD_NUMBER_MAX_LEN: usize = 8;

/// Returns true iff `s` is exactly 13 ASCII decimal digits.
#[must_use]
pub fn validate_bin_number(s: &str) -> bool {
    is_digits(s, BIN_NUMBER_LEN)
}

/// Returns true iff `s` is exactly 4 ASCII decimal digits.
#[must_use]
pub fn validate_license_code(s: &str) -> bool {
    is_digits(s, LICENSE_CODE_LEN)
}

/// Returns true iff `s` is non-blank and at most 8 characters long.
#[must_use]
pub fn validate_sad_number(s: &str) -> bool {
    !s.trim().is_empty() && s.chars().count() <= SAD_NUMBER_MAX_LEN
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_check_uses_byte_length() {
        // Non-ASCII digits take more than one byte each.
        assert!(!is_digits("١٢٣٤", 4));
    }
}
