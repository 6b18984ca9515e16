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

// Offsets into the digit-only string. Each segment ends where the next one
// starts: `CC (AAA) NNN NN NN`.
pub const COUNTRY_CODE_END: usize = 2;
pub const AREA_CODE_END: usize = 5;
pub const FIRST_PART_END: usize = 8;
pub const SECOND_PART_END: usize = 10;
pub const THIRD_PART_END: usize = 12;

/// Digits beyond this count are dropped from the display string.
pub const MAX_FORMATTED_DIGITS: usize = THIRD_PART_END;

pub const SEGMENT_SEPARATOR: &'static str = " ";
pub const AREA_CODE_OPEN: &'static str = " (";
pub const AREA_CODE_CLOSE: &'static str = ")";
