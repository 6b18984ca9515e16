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

use regex::Regex;

/// Whole-value matching for field rules.
pub trait RegexFullMatch {
    /// The leftmost match must cover the entire value, so a rule pattern
    /// written without `^...$` anchors still checks the whole field.
    fn full_match(&self, value: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, value: &str) -> bool {
        self.find(value)
            .is_some_and(|found| found.start() == 0 && found.end() == value.len())
    }
}
