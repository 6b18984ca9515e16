mod helper_constants;
mod helper_types;
mod rules;
pub mod errors;
pub mod enums;
pub mod profilevalidator;

use std::sync::LazyLock;

pub use enums::ProfileField;
pub use helper_types::{ProfileInput, TouchedFields, ValidationErrors};
pub use rules::{FieldRule, RuleCheck, default_rules};
pub use helper_constants::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
pub use crate::profilevalidator::profilevalidator::ProfileValidator;

pub static PROFILE_VALIDATOR: LazyLock<ProfileValidator> = LazyLock::new(|| {
    ProfileValidator::new()
});
