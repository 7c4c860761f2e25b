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
use serde_json::Value;

use crate::artifacts::Owned;
use crate::coconut::keys::{CredentialKeypair, CredentialKeypairEntry, CredentialVerifier, IssuerKeypairEntry};
use crate::engine::ZenEngine;
use crate::errors::Error;
use crate::zen::{KeyMaterial, Zen};
use crate::zencode::{quoted, Contract};

/// Blind signature request. The proof blobs (`pi_s`, `c`) stay opaque;
/// their structure belongs to the engine.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CredentialRequest {
    pub public: String,
    pub pi_s: Value,
    pub c: Value,
    pub commit: String,
}

/// Actor entry holding a credential request.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CredentialRequestEntry {
    pub credential_request: CredentialRequest,
}

/// Blind signature over a credential request.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CredentialSignature {
    pub a_tilde: String,
    pub b_tilde: String,
    pub h: String,
}

/// What the issuer returns: the blind signature plus its verifier.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IssuedCredential {
    pub credential_signature: CredentialSignature,
    pub verifier: CredentialVerifier,
}

/// Aggregated, usable credentials.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub s: String,
    pub h: String,
}

/// Actor entry holding aggregated credentials plus the keypair they are
/// bound to.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CredentialEntry {
    pub credentials: Credentials,
    pub credential_keypair: CredentialKeypair,
}

impl<E: ZenEngine> Zen<E> {
    /// Creates the holder's blind signature request.
    pub fn credential_request(
        &self,
        name: &str,
        keys: &Owned<CredentialKeypairEntry>,
    ) -> Result<Owned<CredentialRequestEntry>, Error> {
        let name = quoted(name)?;
        let contract = Contract::new()
            .scenario("'coconut': create request")
            .given(format!("that I am known as '{name}'"))
            .and("I have my valid 'credential keypair'")
            .when("I create the credential request")
            .then("print my 'credential request'")
            .render();
        self.execute(Some(KeyMaterial::new().with(keys)?), &contract)
    }

    /// Issuer signs a credential request. `request` is the holder's own
    /// entry, not the actor-keyed document.
    pub fn issue_credential(
        &self,
        issuer: &str,
        issuer_keys: &Owned<IssuerKeypairEntry>,
        request: &CredentialRequestEntry,
    ) -> Result<IssuedCredential, Error> {
        let issuer = quoted(issuer)?;
        let contract = Contract::new()
            .scenario("'coconut': issuer sign")
            .given(format!("that I am known as '{issuer}'"))
            .and("I have my valid 'issuer keypair'")
            .and("I have a valid 'credential request'")
            .when("I create the credential signature")
            .then("print the 'credential signature'")
            .and("print the 'verifier'")
            .render();
        let keys = KeyMaterial::new().with(issuer_keys)?.with(request)?;
        self.execute(Some(keys), &contract)
    }

    /// Holder unblinds the issued signature and aggregates it into
    /// usable credentials.
    pub fn aggregate_credential(
        &self,
        name: &str,
        keys: &Owned<CredentialKeypairEntry>,
        issued: &IssuedCredential,
    ) -> Result<Owned<CredentialEntry>, Error> {
        let name = quoted(name)?;
        let contract = Contract::new()
            .scenario("coconut: aggregate signature")
            .given(format!("that I am known as '{name}'"))
            .and("I have my valid 'credential keypair'")
            .and("I have a valid 'credential signature'")
            .when("I create the credentials")
            .then("print my 'credentials'")
            .and("print my 'credential keypair'")
            .render();
        let material = KeyMaterial::new().with(keys)?.with(issued)?;
        self.execute(Some(material), &contract)
    }
}
