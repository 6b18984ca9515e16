mod interfaces;
mod phoneformatter;
mod profilevalidator;
mod profileform;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use interfaces::{ProfileUpdater, UpdateError};
pub use phoneformatter::{MAX_FORMATTED_DIGITS, PhoneFormatter, format_phone_number, strip_to_digits};
pub use profilevalidator::{
    FieldRule, NAME_MAX_LENGTH, NAME_MIN_LENGTH, PROFILE_VALIDATOR, ProfileField, ProfileInput,
    ProfileValidator, RuleCheck, TouchedFields, ValidationErrors, default_rules,
    errors::FieldError,
};
pub use profileform::{
    ACCEPTED_AVATAR_TYPES, AvatarError, AvatarFile, AvatarPreview, ProfileForm, ProfileUpdate,
    SubmitError, UserProfile,
};
pub use regexp_cache::InvalidRegexError;
