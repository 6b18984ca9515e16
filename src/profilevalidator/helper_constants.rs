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

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 20;

// Digits are written as `[0-9]` rather than `\d`: the rust regex `\d` is
// Unicode aware and would let through e.g. Arabic-Indic digits.
pub const EMAIL_PATTERN: &'static str = r"^[a-z0-9.]+@[a-z]+\.[a-z]{2,3}$";
pub const PHONE_PATTERN: &'static str =
    r"^(\+[0-9]{1,3}|[0-9]{1,3}) \([0-9]{3}\) [0-9]{3} [0-9]{2} [0-9]{2}$";
// Same mask as the phone. The skype field has always been checked against
// a phone number shape, keep it that way until the owner says otherwise.
pub const SKYPE_PATTERN: &'static str = PHONE_PATTERN;
// Digit ranges only, `2024-02-31` is accepted.
pub const BIRTHDAY_PATTERN: &'static str =
    r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[01])$";

pub const NAME_REQUIRED_MESSAGE: &'static str = "Name is required";
pub const NAME_TOO_SHORT_MESSAGE: &'static str =
    "Name is too short - must be at least 3 characters";
// The limit is 20, the text has said 29 since the form shipped.
pub const NAME_TOO_LONG_MESSAGE: &'static str =
    "Name is too long - must be no more than 29 characters";

pub const EMAIL_REQUIRED_MESSAGE: &'static str = "Email is required";
pub const EMAIL_FORMAT_MESSAGE: &'static str = "Invalid email format";

pub const PHONE_FORMAT_MESSAGE: &'static str = "Valid number is +38 (000) 123 45 67 or \
38 (000) 123 45 67 and country code consist of 1-3 numbers or empty field phone";
pub const SKYPE_FORMAT_MESSAGE: &'static str = "Valid skype number is +38 (000) 123 45 67 or \
38 (000) 123 45 67 and country code consist of 1-3 numbers or empty field skype";

pub const BIRTHDAY_FORMAT_MESSAGE: &'static str = "Valid birthday has format YYYY-MM-DD";
