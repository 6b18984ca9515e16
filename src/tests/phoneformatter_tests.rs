use std::borrow::Cow;

use crate::{PhoneFormatter, format_phone_number, strip_to_digits};

use super::init_logging;

#[test]
fn format_empty_input() {
    init_logging();
    assert_eq!(format_phone_number(""), "");
    assert_eq!(format_phone_number("abc"), "");
    assert_eq!(format_phone_number(" +() - "), "");
}

#[test]
fn format_full_number() {
    init_logging();
    assert_eq!(format_phone_number("380971234567"), "38 (097) 123 45 67");
    assert_eq!(format_phone_number("+38 (097) 123-45-67"), "38 (097) 123 45 67");
    assert_eq!(format_phone_number("38 (097) 123 45 67"), "38 (097) 123 45 67");
}

#[test]
fn format_partial_number() {
    init_logging();
    let cases = [
        ("3", "3"),
        ("38", "38"),
        ("380", "38 (0)"),
        ("3809", "38 (09)"),
        ("38097", "38 (097)"),
        ("380971", "38 (097) 1"),
        ("38097123", "38 (097) 123"),
        ("380971234", "38 (097) 123 4"),
        ("3809712345", "38 (097) 123 45"),
        ("38097123456", "38 (097) 123 45 6"),
    ];
    for (input, expected) in cases {
        assert_eq!(format_phone_number(input), expected, "input {:?}", input);
    }
}

#[test]
fn format_drops_digits_past_mask() {
    init_logging();
    assert_eq!(format_phone_number("3809712345678999"), "38 (097) 123 45 67");
}

#[test]
fn format_ignores_non_ascii_digits() {
    init_logging();
    // Full-width and Arabic-Indic digits are not digits for the mask.
    assert_eq!(format_phone_number("３８０９７"), "");
    assert_eq!(format_phone_number("٣٨0"), "0");
}

#[test]
fn format_has_no_surrounding_whitespace() {
    init_logging();
    for input in ["  38", "38  ", " 3 8 0 9 7 1 ", "\t380971234567\n"] {
        let formatted = format_phone_number(input);
        assert_eq!(formatted, formatted.trim(), "input {:?}", input);
    }
}

#[test]
fn format_is_idempotent() {
    init_logging();
    let inputs = [
        "", "3", "38", "3809", "38097", "380971234", "380971234567",
        "+1 (650) 253-0000", "38097123456789", "tel: 0-0-0", "38 (097) 12",
    ];
    for input in inputs {
        let once = format_phone_number(input);
        assert_eq!(format_phone_number(&strip_to_digits(&once)), once, "input {:?}", input);
        assert_eq!(format_phone_number(&once), once, "input {:?}", input);
    }
}

#[test]
fn format_per_keystroke() {
    init_logging();
    // Each keystroke re-formats the whole field value.
    let mut value = String::new();
    for digit in "380971234567".chars() {
        value.push(digit);
        value = format_phone_number(&value);
    }
    assert_eq!(value, "38 (097) 123 45 67");
}

#[test]
fn strip_to_digits_borrows_clean_input() {
    assert!(matches!(strip_to_digits("0971234567"), Cow::Borrowed("0971234567")));
    assert!(matches!(strip_to_digits(""), Cow::Borrowed("")));

    let stripped = strip_to_digits("38 (097) 123");
    assert!(matches!(stripped, Cow::Owned(_)));
    assert_eq!(stripped, "38097123");
}

#[test]
fn phone_formatter_handle() {
    let formatter = PhoneFormatter::new();
    let formatted = formatter.format("380971234567");
    assert_eq!(formatted, "38 (097) 123 45 67");
    assert_eq!(formatter.digits(&formatted), "380971234567");
}
