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

use log::trace;
use strum::IntoEnumIterator;

use super::{
    ProfileField,
    errors::FieldError,
    helper_types::{ProfileInput, ValidationErrors},
    rules::{FieldRule, RuleCheck, default_rules},
};
use crate::{
    interfaces::MatcherApi, regex_based_matcher::RegexBasedMatcher,
    regexp_cache::InvalidRegexError,
};

/// Checks profile records against a table of [`FieldRule`]s.
///
/// Validation is pure and total: every call checks every field and
/// returns a (possibly empty) [`ValidationErrors`]. The validator is
/// `Send + Sync` and can be shared freely, see
/// [`PROFILE_VALIDATOR`](super::PROFILE_VALIDATOR).
pub struct ProfileValidator {
    /// An API for pattern checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Rules in evaluation order. A field without a rule is always valid;
    /// if a field has several rules only the first one is used.
    rules: Vec<FieldRule>,
}

impl ProfileValidator {
    /// Validator over the built-in profile rules.
    pub fn new() -> Self {
        match Self::new_for_rules(default_rules()) {
            Ok(validator) => validator,
            Err(err) => {
                let err_message = format!("Could not compile built-in rule patterns: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Validator over a custom rule table. Every pattern is compiled up
    /// front, so a broken pattern is reported here and not on validation.
    pub fn new_for_rules(rules: Vec<FieldRule>) -> Result<Self, InvalidRegexError> {
        let matcher = RegexBasedMatcher::new();
        for pattern in rules.iter().flat_map(|rule| rule.patterns()) {
            matcher.precompile(pattern)?;
        }
        Ok(Self {
            matcher_api: Box::new(matcher),
            rules,
        })
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn rule(&self, field: ProfileField) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Validates all fields of `profile` independently. Each field is
    /// checked exactly as [`validate_field`](Self::validate_field) does.
    pub fn validate(&self, profile: &ProfileInput) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in ProfileField::iter() {
            if let Some(error) = self.validate_field(field, profile.value(field)) {
                errors.insert(field, error);
            }
        }
        trace!("Validated profile, {} field(s) rejected: {:?}", errors.len(), errors);
        errors
    }

    /// Validates a single field value, as done when the field loses focus.
    pub fn validate_field(&self, field: ProfileField, value: &str) -> Option<FieldError> {
        self.rule(field).and_then(|rule| self.check_rule(rule, value))
    }

    fn check_rule(&self, rule: &FieldRule, value: &str) -> Option<FieldError> {
        let trimmed = value.trim();
        // A blank value of a required field has nothing to measure, so it
        // is reported as missing rather than as too short.
        if value.is_empty() || (rule.required && trimmed.is_empty()) {
            if rule.required {
                return Some(FieldError::Required(rule.required_message.clone()));
            }
            return None;
        }

        let trimmed_len = trimmed.chars().count();
        rule.checks.iter().find_map(|check| match check {
            RuleCheck::MinLength { len, message } if trimmed_len < *len => {
                Some(FieldError::TooShort(message.clone()))
            }
            RuleCheck::MaxLength { len, message } if trimmed_len > *len => {
                Some(FieldError::TooLong(message.clone()))
            }
            RuleCheck::Pattern { pattern, message }
                if !self.matcher_api.match_pattern(value, pattern) =>
            {
                Some(FieldError::Mismatch(message.clone()))
            }
            _ => None,
        })
    }
}

impl Default for ProfileValidator {
    fn default() -> Self {
        Self::new()
    }
}
