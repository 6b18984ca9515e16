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

use chrono::NaiveDate;
use log::{trace, warn};
use strum::IntoEnumIterator;

use super::{
    avatar::{AvatarFile, AvatarPreview, preview_for},
    errors::{AvatarError, SubmitError},
};
use crate::{
    interfaces::ProfileUpdater,
    phoneformatter::format_phone_number,
    profilevalidator::{
        PROFILE_VALIDATOR, ProfileField, ProfileInput, ProfileValidator, TouchedFields,
        ValidationErrors, errors::FieldError,
    },
};

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Snapshot of the stored user the form is editing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skype: Option<String>,
    pub birthday: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    fn to_input(&self) -> ProfileInput {
        ProfileInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            skype: self.skype.clone().unwrap_or_default(),
            birthday: self.birthday.clone().unwrap_or_default(),
        }
    }
}

/// What a successful submit hands to the [`ProfileUpdater`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub values: ProfileInput,
    /// Present only when a new avatar was picked since the last submit.
    pub avatar: Option<AvatarFile>,
}

/// State of the profile edit form: current values, touched fields, dirty
/// flag and the pending avatar.
pub struct ProfileForm<'a> {
    validator: &'a ProfileValidator,
    initial: ProfileInput,
    values: ProfileInput,
    touched: TouchedFields,
    dirty: bool,
    avatar: Option<AvatarFile>,
    avatar_preview: Option<AvatarPreview>,
}

impl ProfileForm<'static> {
    /// Form over the built-in rules.
    pub fn new(user: &UserProfile) -> Self {
        Self::with_validator(user, &PROFILE_VALIDATOR)
    }
}

impl<'a> ProfileForm<'a> {
    pub fn with_validator(user: &UserProfile, validator: &'a ProfileValidator) -> Self {
        let initial = user.to_input();
        Self {
            validator,
            values: initial.clone(),
            initial,
            touched: TouchedFields::new(),
            dirty: false,
            avatar: None,
            avatar_preview: user.avatar_url.clone().map(AvatarPreview::Remote),
        }
    }

    pub fn values(&self) -> &ProfileInput {
        &self.values
    }

    pub fn initial_values(&self) -> &ProfileInput {
        &self.initial
    }

    pub fn value(&self, field: ProfileField) -> &str {
        self.values.value(field)
    }

    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn can_submit(&self) -> bool {
        self.dirty
    }

    pub fn avatar_preview(&self) -> Option<&AvatarPreview> {
        self.avatar_preview.as_ref()
    }

    /// Applies a change event. The phone field is reformatted into its
    /// display mask from the whole new value.
    pub fn change(&mut self, field: ProfileField, value: &str) {
        let value = match field {
            ProfileField::Phone => format_phone_number(value),
            _ => value.to_owned(),
        };
        trace!("Field {} changed to {:?}", field, value);
        self.values.set(field, value);
        self.dirty = true;
    }

    /// Applies a date picker selection, `None` clears the birthday.
    pub fn set_birthday(&mut self, date: Option<NaiveDate>) {
        let value = date
            .map(|date| date.format(BIRTHDAY_FORMAT).to_string())
            .unwrap_or_default();
        self.values.set(ProfileField::Birthday, value);
        self.dirty = true;
    }

    /// Marks `field` as touched and returns its current error, if any.
    pub fn blur(&mut self, field: ProfileField) -> Option<FieldError> {
        self.touched.insert(field);
        self.validator.validate_field(field, self.values.value(field))
    }

    /// All errors of the current values.
    pub fn errors(&self) -> ValidationErrors {
        self.validator.validate(&self.values)
    }

    /// Errors that should be rendered: those of touched fields only.
    pub fn visible_errors(&self) -> ValidationErrors {
        self.errors().filter_touched(&self.touched)
    }

    pub fn upload_avatar(&mut self, file: AvatarFile) -> Result<&AvatarPreview, AvatarError> {
        let preview = preview_for(&file)?;
        self.avatar = Some(file);
        self.dirty = true;
        let preview = self.avatar_preview.insert(preview);
        Ok(&*preview)
    }

    /// Validates the whole record and hands it to `updater`.
    ///
    /// On validation errors every field becomes touched so all errors show
    /// up. An updater failure is logged and returned; the edits stay in the
    /// form and it stays dirty, so the user can retry.
    pub fn submit<U>(&mut self, updater: &U) -> Result<(), SubmitError>
    where
        U: ProfileUpdater + ?Sized,
    {
        if !self.dirty {
            return Err(SubmitError::NotDirty);
        }

        let errors = self.validator.validate(&self.values);
        if !errors.is_empty() {
            self.touched.extend(ProfileField::iter());
            return Err(SubmitError::Invalid(errors));
        }

        let update = ProfileUpdate {
            values: self.values.clone(),
            avatar: self.avatar.clone(),
        };
        if let Err(err) = updater.update(&update) {
            warn!("Profile update was not applied: {}", err);
            return Err(err.into());
        }

        self.initial = update.values;
        self.avatar = None;
        self.dirty = false;
        Ok(())
    }

    /// Reloads the form from a fresh user snapshot, dropping all edits.
    pub fn reset(&mut self, user: &UserProfile) {
        self.initial = user.to_input();
        self.values = self.initial.clone();
        self.touched.clear();
        self.dirty = false;
        self.avatar = None;
        self.avatar_preview = user.avatar_url.clone().map(AvatarPreview::Remote);
    }
}
