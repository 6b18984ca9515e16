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

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The editable text fields of a user profile.
///
/// Iteration order (`ProfileField::iter()`) is the order the fields are
/// validated and reported in. The string form is the lowercase field name
/// used as the key of the error mapping: `name`, `email`, `phone`, `skype`,
/// `birthday`.
#[derive(
    Debug, EnumIter, AsRefStr, Display, EnumString,
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum ProfileField {
    /// **Display name.** Required, 3 to 20 characters.
    Name,
    /// **Email address.** Required, restricted lowercase `local@domain.tld`.
    Email,
    /// **Phone number.** Optional, `[+]CC (AAA) NNN NN NN`.
    Phone,
    /// **Skype contact.** Optional, checked against the phone mask.
    Skype,
    /// **Birthday.** Optional, `YYYY-MM-DD`.
    Birthday,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Skype => "skype",
            ProfileField::Birthday => "birthday",
        }
    }
}
