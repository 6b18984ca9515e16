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

use log::trace;

use super::helper_constants::{
    AREA_CODE_CLOSE, AREA_CODE_END, AREA_CODE_OPEN, COUNTRY_CODE_END, FIRST_PART_END,
    SECOND_PART_END, SEGMENT_SEPARATOR, THIRD_PART_END,
};

/// Removes every character that is not an ASCII digit.
///
/// Returns `Cow::Borrowed` when `raw` already consists of digits only, which
/// is the common case when a caller re-feeds a stored digit string.
pub fn strip_to_digits(raw: &str) -> Cow<'_, str> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.chars().filter(char::is_ascii_digit).collect())
}

/// `digits[start..end]`, clamped to the available digits.
fn segment(digits: &str, start: usize, end: usize) -> &str {
    let len = digits.len();
    &digits[start.min(len)..end.min(len)]
}

/// Separator that goes in front of `part`, or nothing if the part is absent.
fn separator_for(part: &str) -> &'static str {
    if part.is_empty() { "" } else { SEGMENT_SEPARATOR }
}

/// Formats raw keystrokes into the display mask `CC (AAA) NNN NN NN`.
///
/// All non-digits are dropped, the digits are cut at fixed offsets and only
/// the segments that have digits are emitted, so partial input produces a
/// partial mask (`"3809"` gives `"38 (09)"`). Digits past the twelfth are
/// ignored. Never fails: empty input gives an empty string.
///
/// The function is applied to the whole field value on every change, so it
/// is idempotent over its own output:
/// `format_phone_number(&format_phone_number(x)) == format_phone_number(x)`.
pub fn format_phone_number(raw: &str) -> String {
    let digits = strip_to_digits(raw);

    let country_code = segment(&digits, 0, COUNTRY_CODE_END);
    let area_code = segment(&digits, COUNTRY_CODE_END, AREA_CODE_END);
    let first_part = segment(&digits, AREA_CODE_END, FIRST_PART_END);
    let second_part = segment(&digits, FIRST_PART_END, SECOND_PART_END);
    let third_part = segment(&digits, SECOND_PART_END, THIRD_PART_END);

    let (area_open, area_close) = if area_code.is_empty() {
        ("", "")
    } else {
        (AREA_CODE_OPEN, AREA_CODE_CLOSE)
    };

    // Every emitted token is preceded by its own separator and the country
    // code is always first, so the result has no surrounding whitespace.
    let formatted = fast_cat::concat_str!(
        country_code,
        area_open, area_code, area_close,
        separator_for(first_part), first_part,
        separator_for(second_part), second_part,
        separator_for(third_part), third_part
    );
    trace!("Formatted phone input {:?} as {:?}", raw, formatted);
    formatted
}

/// Stateless handle over [`format_phone_number`], for callers that want to
/// hold a formatter next to other field handlers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhoneFormatter;

impl PhoneFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, raw: &str) -> String {
        format_phone_number(raw)
    }

    /// Digits that the display string was built from.
    pub fn digits<'a>(&self, formatted: &'a str) -> Cow<'a, str> {
        strip_to_digits(formatted)
    }
}
