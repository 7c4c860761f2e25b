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

use serde::{Deserialize, Serialize};

use crate::artifacts::Owned;
use crate::engine::ZenEngine;
use crate::errors::Error;
use crate::zen::{KeyMaterial, Zen};
use crate::zencode::{quoted, Contract};

/// EC keypair as printed by the engine.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Keypair {
    pub public_key: String,
    pub private_key: String,
}

/// Actor entry holding a full keypair.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct KeypairEntry {
    pub keypair: Keypair,
}

/// Actor entry holding only the public half.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PublicKeyEntry {
    pub public_key: String,
}

impl<E: ZenEngine> Zen<E> {
    /// Creates a new keypair for `name`.
    pub fn keypair(&self, name: &str) -> Result<Owned<KeypairEntry>, Error> {
        let name = quoted(name)?;
        let contract = Contract::new()
            .scenario("simple: Create the keypair")
            .given(format!("that I am known as '{name}'"))
            .when("I create the keypair")
            .then("print my data")
            .render();
        self.execute(None, &contract)
    }

    /// Re-derives the public-only view of an actor's keypair, suitable
    /// for handing to other actors.
    pub fn public_key(
        &self,
        name: &str,
        keys: &Owned<KeypairEntry>,
    ) -> Result<Owned<PublicKeyEntry>, Error> {
        let name = quoted(name)?;
        let contract = Contract::new()
            .scenario("simple: Create the keypair")
            .given(format!("that I am known as '{name}'"))
            .and("I have my valid 'public key'")
            .then("print my data")
            .render();
        self.execute(Some(KeyMaterial::new().with(keys)?), &contract)
    }
}
