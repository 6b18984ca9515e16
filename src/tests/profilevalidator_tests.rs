use crate::{
    FieldError, FieldRule, PROFILE_VALIDATOR, ProfileField, ProfileInput, ProfileValidator,
    TouchedFields, default_rules,
};

use super::init_logging;

const NAME_TOO_SHORT: &str = "Name is too short - must be at least 3 characters";
const NAME_TOO_LONG: &str = "Name is too long - must be no more than 29 characters";
const SKYPE_MISMATCH: &str = "Valid skype number is +38 (000) 123 45 67 or 38 (000) 123 45 67 \
and country code consist of 1-3 numbers or empty field skype";
const PHONE_MISMATCH: &str = "Valid number is +38 (000) 123 45 67 or 38 (000) 123 45 67 \
and country code consist of 1-3 numbers or empty field phone";

fn get_validator() -> &'static ProfileValidator {
    init_logging();
    &PROFILE_VALIDATOR
}

fn profile(name: &str, email: &str, phone: &str, skype: &str, birthday: &str) -> ProfileInput {
    ProfileInput {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        skype: skype.to_owned(),
        birthday: birthday.to_owned(),
    }
}

fn valid_profile() -> ProfileInput {
    profile("Alice", "alice@mail.com", "38 (097) 123 45 67", "", "1990-01-01")
}

#[test]
fn short_name_is_the_only_error() {
    let validator = get_validator();
    let errors = validator.validate(&profile("Al", "a@b.co", "", "", ""));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(ProfileField::Name), Some(&FieldError::TooShort(NAME_TOO_SHORT.into())));
    assert_eq!(errors.message(ProfileField::Name), Some(NAME_TOO_SHORT));
}

#[test]
fn bad_email_and_birthday() {
    let validator = get_validator();
    let errors = validator.validate(&profile(
        "Alice", "bad-email", "38 (097) 123 45 67", "", "2024-13-40",
    ));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.message(ProfileField::Email), Some("Invalid email format"));
    assert_eq!(
        errors.message(ProfileField::Birthday),
        Some("Valid birthday has format YYYY-MM-DD")
    );
    assert!(!errors.contains(ProfileField::Name));
    assert!(!errors.contains(ProfileField::Phone));
    assert!(!errors.contains(ProfileField::Skype));
}

#[test]
fn required_fields_and_skype_mask() {
    let validator = get_validator();
    let errors = validator.validate(&profile("", "", "1 (097) 123 45 67", "9999", "1990-01-01"));

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(ProfileField::Name), Some(&FieldError::Required("Name is required".into())));
    assert_eq!(errors.get(ProfileField::Email), Some(&FieldError::Required("Email is required".into())));
    assert_eq!(errors.get(ProfileField::Skype), Some(&FieldError::Mismatch(SKYPE_MISMATCH.into())));
    assert!(!errors.contains(ProfileField::Phone));
    assert!(!errors.contains(ProfileField::Birthday));
}

#[test]
fn valid_profile_has_no_errors() {
    let validator = get_validator();
    assert!(validator.validate(&valid_profile()).is_empty());
    assert!(validator.validate(&profile("Bob", "b@mail.ua", "", "", "")).is_empty());
}

#[test]
fn name_length_limits() {
    let validator = get_validator();
    for name in ["a", "ab", " ab ", "\tx\n"] {
        assert_eq!(
            validator.validate_field(ProfileField::Name, name),
            Some(FieldError::TooShort(NAME_TOO_SHORT.into())),
            "name {:?}", name
        );
    }
    for len in 3..=20 {
        let name = "n".repeat(len);
        assert_eq!(validator.validate_field(ProfileField::Name, &name), None, "len {}", len);
    }
    for len in [21, 29, 100] {
        let name = "n".repeat(len);
        assert_eq!(
            validator.validate_field(ProfileField::Name, &name),
            Some(FieldError::TooLong(NAME_TOO_LONG.into())),
            "len {}", len
        );
    }
    // Characters are counted, not bytes.
    assert_eq!(validator.validate_field(ProfileField::Name, "Олег"), None);
    assert_eq!(validator.validate_field(ProfileField::Name, &"ї".repeat(20)), None);
}

#[test]
fn blank_name_is_required() {
    let validator = get_validator();
    assert_eq!(
        validator.validate_field(ProfileField::Name, "   "),
        Some(FieldError::Required("Name is required".into()))
    );
}

#[test]
fn email_format() {
    let validator = get_validator();
    for email in ["john.doe@mail.com", "a@b.co", "user42@domain.org", "x.y.z@abc.ua"] {
        assert_eq!(validator.validate_field(ProfileField::Email, email), None, "email {:?}", email);
    }
    for email in [
        "bad-email", "John@mail.com", "a@b.c", "a@b.info", "a@mail.co.uk",
        "a_b@mail.com", "a@ma1l.com", "@mail.com", "a@.com", " a@b.co",
    ] {
        assert_eq!(
            validator.validate_field(ProfileField::Email, email),
            Some(FieldError::Mismatch("Invalid email format".into())),
            "email {:?}", email
        );
    }
}

#[test]
fn phone_mask() {
    let validator = get_validator();
    for phone in [
        "38 (097) 123 45 67", "+38 (097) 123 45 67", "1 (097) 123 45 67",
        "+380 (097) 123 45 67", "",
    ] {
        assert_eq!(validator.validate_field(ProfileField::Phone, phone), None, "phone {:?}", phone);
    }
    for phone in [
        "380971234567", "38 (097) 123 45 6", "+3801 (097) 123 45 67", "38 (97) 123 45 67",
        "38 (097) 123-45-67", " ", "٣٨ (097) 123 45 67", "38 (097) 123 45 67 ",
    ] {
        assert_eq!(
            validator.validate_field(ProfileField::Phone, phone),
            Some(FieldError::Mismatch(PHONE_MISMATCH.into())),
            "phone {:?}", phone
        );
    }
}

#[test]
fn skype_uses_phone_mask() {
    let validator = get_validator();
    assert_eq!(validator.validate_field(ProfileField::Skype, "+38 (097) 123 45 67"), None);
    assert_eq!(validator.validate_field(ProfileField::Skype, ""), None);
    assert_eq!(
        validator.validate_field(ProfileField::Skype, "live:john.doe"),
        Some(FieldError::Mismatch(SKYPE_MISMATCH.into()))
    );
}

#[test]
fn birthday_digit_ranges_only() {
    let validator = get_validator();
    for birthday in ["1990-01-01", "2024-02-31", "2023-02-29", "0000-12-31", ""] {
        assert_eq!(
            validator.validate_field(ProfileField::Birthday, birthday), None,
            "birthday {:?}", birthday
        );
    }
    for birthday in [
        "2024-13-40", "2024-00-10", "2024-01-00", "2024-01-32", "24-01-01", "2024-1-1",
        "31/12/1990", "1990/12/31",
    ] {
        assert!(
            validator.validate_field(ProfileField::Birthday, birthday).is_some(),
            "birthday {:?}", birthday
        );
    }
}

#[test]
fn field_error_displays_message() {
    let error = FieldError::TooShort(NAME_TOO_SHORT.into());
    assert_eq!(error.to_string(), NAME_TOO_SHORT);
    assert_eq!(error.message(), NAME_TOO_SHORT);
}

#[test]
fn filter_touched_errors() {
    let validator = get_validator();
    let errors = validator.validate(&profile("", "", "", "9999", ""));
    assert_eq!(errors.len(), 3);

    let mut touched = TouchedFields::new();
    assert!(errors.filter_touched(&touched).is_empty());

    touched.insert(ProfileField::Email);
    touched.insert(ProfileField::Phone);
    let visible = errors.filter_touched(&touched);
    assert_eq!(visible.len(), 1);
    assert!(visible.contains(ProfileField::Email));

    let fields: Vec<ProfileField> = errors.iter().map(|(field, _)| *field).collect();
    assert_eq!(fields, vec![ProfileField::Name, ProfileField::Email, ProfileField::Skype]);
}

#[test]
fn default_rules_cover_every_field() {
    use strum::IntoEnumIterator;

    let validator = get_validator();
    assert_eq!(validator.rules(), default_rules().as_slice());
    for field in ProfileField::iter() {
        assert!(validator.rule(field).is_some(), "no rule for {}", field);
    }
    assert!(validator.rule(ProfileField::Name).is_some_and(|rule| rule.required));
    assert!(validator.rule(ProfileField::Phone).is_some_and(|rule| !rule.required));
}

#[test]
fn custom_rules() {
    init_logging();
    let validator = ProfileValidator::new_for_rules(vec![
        FieldRule::required(ProfileField::Skype, "Skype is required")
            .pattern(r"^[a-z][a-z0-9.:_-]{5,31}$", "Invalid skype name"),
        FieldRule::optional(ProfileField::Skype).pattern("^never$", "shadowed"),
    ])
    .unwrap();

    // Fields without a rule are always valid.
    let errors = validator.validate(&profile("", "bad", "", "", "nope"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message(ProfileField::Skype), Some("Skype is required"));

    assert_eq!(validator.validate_field(ProfileField::Skype, "live:john.doe"), None);
    assert_eq!(
        validator.validate_field(ProfileField::Skype, "9999"),
        Some(FieldError::Mismatch("Invalid skype name".into()))
    );
    assert_eq!(validator.validate_field(ProfileField::Name, ""), None);
}

#[test]
fn first_rule_of_a_field_wins_in_both_paths() {
    init_logging();
    let validator = ProfileValidator::new_for_rules(vec![
        FieldRule::optional(ProfileField::Skype).pattern(r"^[a-z:.]+$", "first"),
        FieldRule::optional(ProfileField::Skype).pattern("^never$", "shadowed"),
    ])
    .unwrap();
    let input = profile("", "", "", "live:john.doe", "");

    assert_eq!(validator.validate_field(ProfileField::Skype, &input.skype), None);
    assert!(validator.validate(&input).is_empty());

    let input = profile("", "", "", "9999", "");
    let expected = Some(FieldError::Mismatch("first".into()));
    assert_eq!(validator.validate_field(ProfileField::Skype, &input.skype), expected);
    assert_eq!(validator.validate(&input).get(ProfileField::Skype), expected.as_ref());
}

#[test]
fn custom_rules_with_broken_pattern() {
    init_logging();
    let result = ProfileValidator::new_for_rules(vec![
        FieldRule::optional(ProfileField::Phone).pattern(r"^(\d+$", "broken"),
    ]);
    assert!(result.is_err());
}

#[test]
fn shared_validator_across_threads() {
    let validator = get_validator();
    let input = profile("Al", "bad", "", "", "");
    let expected = validator.validate(&input);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| validator.validate(&input)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
