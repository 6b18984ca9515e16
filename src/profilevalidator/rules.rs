// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use super::{
    ProfileField,
    helper_constants::{
        BIRTHDAY_FORMAT_MESSAGE, BIRTHDAY_PATTERN, EMAIL_FORMAT_MESSAGE, EMAIL_PATTERN,
        EMAIL_REQUIRED_MESSAGE, NAME_MAX_LENGTH, NAME_MIN_LENGTH, NAME_REQUIRED_MESSAGE,
        NAME_TOO_LONG_MESSAGE, NAME_TOO_SHORT_MESSAGE, PHONE_FORMAT_MESSAGE, PHONE_PATTERN,
        SKYPE_FORMAT_MESSAGE, SKYPE_PATTERN,
    },
};

/// One check applied to a non-empty field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCheck {
    /// The trimmed value must have at least `len` characters.
    MinLength { len: usize, message: Cow<'static, str> },
    /// The trimmed value must have at most `len` characters.
    MaxLength { len: usize, message: Cow<'static, str> },
    /// The raw value must match `pattern` as a whole.
    Pattern { pattern: Cow<'static, str>, message: Cow<'static, str> },
}

/// Declarative validation rule of a single field.
///
/// An empty value short-circuits: it is reported with `required_message`
/// when the field is `required` and accepted otherwise. A non-empty value
/// goes through `checks` in order, the first failing check decides the
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub field: ProfileField,
    pub required: bool,
    pub required_message: Cow<'static, str>,
    pub checks: Vec<RuleCheck>,
}

impl FieldRule {
    pub fn optional(field: ProfileField) -> Self {
        Self {
            field,
            required: false,
            required_message: Cow::Borrowed(""),
            checks: Vec::new(),
        }
    }

    pub fn required(field: ProfileField, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field,
            required: true,
            required_message: message.into(),
            checks: Vec::new(),
        }
    }

    pub fn min_length(mut self, len: usize, message: impl Into<Cow<'static, str>>) -> Self {
        self.checks.push(RuleCheck::MinLength { len, message: message.into() });
        self
    }

    pub fn max_length(mut self, len: usize, message: impl Into<Cow<'static, str>>) -> Self {
        self.checks.push(RuleCheck::MaxLength { len, message: message.into() });
        self
    }

    pub fn pattern(
        mut self,
        pattern: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.checks.push(RuleCheck::Pattern { pattern: pattern.into(), message: message.into() });
        self
    }

    /// Patterns of all checks, in check order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().filter_map(|check| match check {
            RuleCheck::Pattern { pattern, .. } => Some(pattern.as_ref()),
            _ => None,
        })
    }
}

/// The rule table of the profile edit form.
pub fn default_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::required(ProfileField::Name, NAME_REQUIRED_MESSAGE)
            .min_length(NAME_MIN_LENGTH, NAME_TOO_SHORT_MESSAGE)
            .max_length(NAME_MAX_LENGTH, NAME_TOO_LONG_MESSAGE),
        FieldRule::required(ProfileField::Email, EMAIL_REQUIRED_MESSAGE)
            .pattern(EMAIL_PATTERN, EMAIL_FORMAT_MESSAGE),
        FieldRule::optional(ProfileField::Phone)
            .pattern(PHONE_PATTERN, PHONE_FORMAT_MESSAGE),
        FieldRule::optional(ProfileField::Skype)
            .pattern(SKYPE_PATTERN, SKYPE_FORMAT_MESSAGE),
        FieldRule::optional(ProfileField::Birthday)
            .pattern(BIRTHDAY_PATTERN, BIRTHDAY_FORMAT_MESSAGE),
    ]
}
