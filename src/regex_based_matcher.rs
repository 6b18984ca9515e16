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


use log::error;
use super::regex_util::RegexFullMatch;

use crate::{interfaces, regexp_cache::{InvalidRegexError, RegexCache}};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(16) }
    }

    /// Compiles `pattern` ahead of the first match, so a broken custom rule
    /// is reported when the validator is built rather than silently failing
    /// every value later.
    pub fn precompile(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        self.cache.get_regex(pattern).map(|_| ())
    }

    fn match_value(&self, value: &str, pattern: &str) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(pattern)?;
        Ok(regexp.full_match(value))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_pattern(&self, value: &str, pattern: &str) -> bool {
        // An empty pattern accepts nothing rather than everything.
        if pattern.is_empty() {
            return false;
        }
        if let Ok(res) = self.match_value(value, pattern) {
            res
        } else {
            error!("Invalid regex! {}", pattern);
            false
        }
    }
}
