// Copyright 2024 Zenlink Contributors

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Zencode contract templating.
//!
//! Contracts are plain text: a rule header, a `Scenario` line and a
//! sequence of `Given`/`When`/`Then` statements with `and` continuations.
//! [`Contract`] assembles them line by line; [`quoted`] guards every value
//! interpolated between single quotes.

use crate::errors::Error;

/// Version rule carried by every contract.
pub const RULE_CHECK_VERSION: &str = "rule check version 1.0.0";
/// Output rule used by the hashing contract.
pub const RULE_OUTPUT_HEX: &str = "rule output encoding hex";

/// Checks that `value` can sit between single quotes in a contract
/// without altering its structure.
///
/// Quotes and control characters are rejected; an engine never sees them.
pub fn quoted(value: &str) -> Result<&str, Error> {
    if value.is_empty() || value.chars().any(|c| c == '\'' || c.is_control()) {
        return Err(Error::UnquotableValue(value.to_string()));
    }
    Ok(value)
}

/// Line-by-line Zencode contract builder.
#[derive(Clone, Debug)]
pub struct Contract {
    lines: Vec<String>,
}

impl Contract {
    /// Starts a contract with the standard version rule.
    pub fn new() -> Self {
        Self::with_rule(RULE_CHECK_VERSION)
    }

    /// Starts a contract with a custom rule line.
    pub fn with_rule(rule: &str) -> Self {
        Self {
            lines: vec![rule.to_string()],
        }
    }

    pub fn scenario(self, descriptor: impl AsRef<str>) -> Self {
        self.push("Scenario", descriptor)
    }

    pub fn given(self, statement: impl AsRef<str>) -> Self {
        self.push("Given", statement)
    }

    pub fn when(self, statement: impl AsRef<str>) -> Self {
        self.push("When", statement)
    }

    pub fn then(self, statement: impl AsRef<str>) -> Self {
        self.push("Then", statement)
    }

    /// Continuation of the previous `Given`/`When`/`Then` line.
    pub fn and(self, statement: impl AsRef<str>) -> Self {
        self.push("and", statement)
    }

    /// The contract text handed to the engine.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn push(mut self, keyword: &str, rest: impl AsRef<str>) -> Self {
        self.lines.push(format!("{} {}", keyword, rest.as_ref()));
        self
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::new()
    }
}
