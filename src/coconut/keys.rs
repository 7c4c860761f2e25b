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

/// Issuer signing key, two group elements.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IssuerSign {
    pub x: String,
    pub y: String,
}

/// Public verifier a holder proves against.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CredentialVerifier {
    pub alpha: String,
    pub beta: String,
}

/// Issuer keypair: the signing half plus its verifier.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IssuerKeypair {
    pub issuer_sign: IssuerSign,
    pub verifier: CredentialVerifier,
}

/// Actor entry holding an issuer keypair.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IssuerKeypairEntry {
    pub issuer_keypair: IssuerKeypair,
}

/// Actor entry holding a published verifier.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct VerifierEntry {
    pub verifier: CredentialVerifier,
}

/// Holder-side credential keypair.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CredentialKeypair {
    pub public: String,
    pub private: String,
}

/// Actor entry holding a credential keypair.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CredentialKeypairEntry {
    pub credential_keypair: CredentialKeypair,
}

impl<E: ZenEngine> Zen<E> {
    /// Creates a credential issuer keypair for `name`.
    pub fn issuer_keypair(&self, name: &str) -> Result<Owned<IssuerKeypairEntry>, Error> {
        let name = quoted(name)?;
        let contract = Contract::new()
            .scenario("'coconut': issuer keygen")
            .given(format!("that I am known as '{name}'"))
            .when("I create the issuer keypair")
            .then("print my 'issuer keypair'")
            .render();
        self.execute(None, &contract)
    }

    /// Extracts the verifier to be published from the issuer keypair.
    /// `keys` is the issuer's own entry, not the actor-keyed document.
    pub fn publish_verifier(
        &self,
        name: &str,
        keys: &IssuerKeypairEntry,
    ) -> Result<Owned<VerifierEntry>, Error> {
        let name = quoted(name)?;
        let contract = Contract::new()
            .scenario("'coconut': publish verifier")
            .given(format!("that I am known as '{name}'"))
            .and("I have a valid 'verifier'")
            .then("print my 'verifier'")
            .render();
        self.execute(Some(KeyMaterial::new().with(keys)?), &contract)
    }

    /// Creates a holder-side credential keypair for `name`.
    pub fn credential_keypair(
        &self,
        name: &str,
    ) -> Result<Owned<CredentialKeypairEntry>, Error> {
        let name = quoted(name)?;
        let contract = Contract::new()
            .scenario("'coconut': issuer keygen")
            .given(format!("that I am known as '{name}'"))
            .when("I create the credential keypair")
            .then("print my 'credential keypair'")
            .render();
        self.execute(None, &contract)
    }
}
