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

use serde::Deserialize;

use crate::engine::ZenEngine;
use crate::errors::Error;
use crate::zen::Zen;
use crate::zencode::{quoted, Contract, RULE_OUTPUT_HEX};

/// Engine hash output, hex encoded.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct HashOutput {
    pub hash: String,
}

impl<E: ZenEngine> Zen<E> {
    /// Hashes `source` inside the engine, hex output encoding.
    pub fn hash(&self, source: &str) -> Result<HashOutput, Error> {
        let source = quoted(source)?;
        let contract = Contract::with_rule(RULE_OUTPUT_HEX)
            .given("nothing")
            .when(format!("I write '{source}' in 'source'"))
            .and("I create the hash of 'source'")
            .then("print the 'hash'")
            .render();
        self.execute(None, &contract)
    }
}
