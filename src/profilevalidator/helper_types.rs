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

use std::collections::{BTreeMap, BTreeSet, btree_map};

use super::{ProfileField, errors::FieldError};

/// Fields the user has interacted with.
pub type TouchedFields = BTreeSet<ProfileField>;

/// Candidate profile record. An empty string stands for an absent value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skype: String,
    pub birthday: String,
}

impl ProfileInput {
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Skype => &self.skype,
            ProfileField::Birthday => &self.birthday,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Skype => &mut self.skype,
            ProfileField::Birthday => &mut self.birthday,
        };
        *slot = value;
    }
}

/// Result of validating a profile: one entry per rejected field, a missing
/// entry means the field is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ProfileField, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: ProfileField, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn get(&self, field: ProfileField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: ProfileField) -> Option<&str> {
        self.get(field).map(FieldError::message)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ProfileField, FieldError> {
        self.errors.iter()
    }

    /// Keeps only the errors of fields the user has touched, which is what
    /// a form actually renders.
    pub fn filter_touched(&self, touched: &TouchedFields) -> ValidationErrors {
        let errors = self
            .errors
            .iter()
            .filter(|(field, _)| touched.contains(*field))
            .map(|(field, error)| (*field, error.clone()))
            .collect();
        ValidationErrors { errors }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a ProfileField, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, ProfileField, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
