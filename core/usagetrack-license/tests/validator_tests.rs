use usagetrack_license::{validate_bin_number, validate_license_code, validate_sad_number};

// ── Bin number ───────────────────────────────────────────────────

#[test]
fn bin_number_thirteen_digits_valid() {
    assert!(validate_bin_number("1234567890123"));
}

#[test]
fn bin_number_too_short() {
    assert!(!validate_bin_number("12345"));
    assert!(!validate_bin_number("123"));
}

#[test]
fn bin_number_too_long() {
    assert!(!validate_bin_number("12345678901234"));
}

#[test]
fn bin_number_with_letters() {
    assert!(!validate_bin_number("12345678901A3"));
}

#[test]
fn bin_number_with_whitespace() {
    assert!(!validate_bin_number(" 123456789012"));
    assert!(!validate_bin_number("1234567890123\n"));
}

#[test]
fn bin_number_empty() {
    assert!(!validate_bin_number(""));
}

// ── License code ─────────────────────────────────────────────────

#[test]
fn license_code_four_digits_valid() {
    assert!(validate_license_code("1234"));
    assert!(validate_license_code("0000"));
}

#[test]
fn license_code_wrong_length() {
    assert!(!validate_license_code("12"));
    assert!(!validate_license_code("12345"));
}

#[test]
fn license_code_signed_number_rejected() {
    assert!(!validate_license_code("-123"));
    assert!(!validate_license_code("+123"));
}

// ── SAD number ───────────────────────────────────────────────────

#[test]
fn sad_number_accepts_short_opaque_values() {
    assert!(validate_sad_number("AB"));
    assert!(validate_sad_number("SAD123"));
    assert!(validate_sad_number("12345678"));
}

#[test]
fn sad_number_rejects_blank() {
    assert!(!validate_sad_number(""));
    assert!(!validate_sad_number("   "));
}

#[test]
fn sad_number_rejects_more_than_eight_chars() {
    assert!(!validate_sad_number("123456789"));
}

#[test]
fn sad_number_counts_characters_not_bytes() {
    assert!(validate_sad_number("ÄÖÜßäöüé"));
}

mod prop {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_thirteen_digits_is_a_bin_number(s in "[0-9]{13}") {
            prop_assert!(validate_bin_number(&s));
        }

        #[test]
        fn other_digit_lengths_are_not_bin_numbers(s in "[0-9]{0,30}") {
            prop_assume!(s.len() != 13);
            prop_assert!(!validate_bin_number(&s));
        }

        #[test]
        fn any_four_digits_is_a_license_code(s in "[0-9]{4}") {
            prop_assert!(validate_license_code(&s));
        }

        #[test]
        fn a_non_digit_anywhere_rejects_license_code(
            prefix in "[0-9]{0,3}",
            bad in "[^0-9]",
        ) {
            let mut s = prefix.clone();
            s.push_str(&bad);
            while s.chars().count() < 4 {
                s.push('0');
            }
            prop_assert!(!validate_license_code(&s));
        }
    }
}
