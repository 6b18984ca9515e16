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

use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

/// A rule pattern of a field table that does not compile.
#[derive(Debug, PartialEq, Error)]
#[error("Rule pattern does not compile: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled field rule patterns, keyed by their source text.
///
/// A validator compiles its whole rule table into the cache when it is
/// built; after that every lookup is a read. The map is concurrent, so one
/// validator behind a `static` serves all threads.
pub struct RegexCache {
    patterns: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    /// `capacity` is the expected number of distinct patterns in a table.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            patterns: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the compiled `pattern`, compiling and storing it on first use.
    /// A pattern that fails to compile is not stored.
    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(compiled) = self.patterns.get(pattern) {
            return Ok(Arc::clone(compiled.value()));
        }
        let compiled = self
            .patterns
            .entry(pattern.to_owned())
            .or_try_insert_with(|| Regex::new(pattern).map(Arc::new))?;
        Ok(Arc::clone(compiled.value()))
    }
}
