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
use crate::utils::pin::digital_root;
use crate::zen::Zen;
use crate::zencode::Contract;

/// Characters drawn by [`Zen::random`] when no length is given.
pub const DEFAULT_RANDOM_LENGTH: usize = 32;
/// Digits derived by [`Zen::random_pin`] when no length is given.
pub const DEFAULT_PIN_LENGTH: usize = 6;

#[derive(Deserialize)]
struct RandomArray {
    array: Vec<String>,
}

impl<E: ZenEngine> Zen<E> {
    /// Draws one 256-bit random object from the engine and truncates it
    /// to `length` characters.
    pub fn random(&self, length: usize) -> Result<String, Error> {
        let contract = Contract::new()
            .scenario("simple: Generate a random password")
            .given("nothing")
            .when("I create the array of '1' random objects of '256' bits")
            .then("print the 'array'")
            .render();
        let out: RandomArray = self.execute(None, &contract)?;
        let first = out.array.into_iter().next().ok_or(Error::EmptyOutput)?;
        Ok(first.chars().take(length).collect())
    }

    /// Derives a numeric PIN of `length` digits: one digital root per
    /// byte of an engine-drawn random string.
    pub fn random_pin(&self, length: usize) -> Result<String, Error> {
        let rnd = self.random(length)?;
        Ok(rnd
            .bytes()
            .map(|b| digital_root(u32::from(b)).to_string())
            .collect())
    }

    /// A 32-character random identifier.
    pub fn random_did(&self) -> Result<String, Error> {
        self.random(DEFAULT_RANDOM_LENGTH)
    }
}
