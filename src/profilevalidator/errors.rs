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

use thiserror::Error;

/// Why a single field value was rejected. `Display` yields the message that
/// is shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    /// A required field is empty.
    #[error("{0}")]
    Required(Cow<'static, str>),
    /// The trimmed value is shorter than the rule's minimum length.
    #[error("{0}")]
    TooShort(Cow<'static, str>),
    /// The trimmed value is longer than the rule's maximum length.
    #[error("{0}")]
    TooLong(Cow<'static, str>),
    /// The value does not fit the field mask.
    #[error("{0}")]
    Mismatch(Cow<'static, str>),
}

impl FieldError {
    pub fn message(&self) -> &str {
        match self {
            FieldError::Required(message)
            | FieldError::TooShort(message)
            | FieldError::TooLong(message)
            | FieldError::Mismatch(message) => message,
        }
    }
}
