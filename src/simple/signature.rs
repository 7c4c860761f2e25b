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

use crate::artifacts::{actor, Owned};
use crate::engine::ZenEngine;
use crate::errors::Error;
use crate::simple::keys::{KeypairEntry, PublicKeyEntry};
use crate::zen::{KeyMaterial, Zen};
use crate::zencode::{quoted, Contract};

/// ECDSA signature as printed by the engine.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EcdsaSignature {
    pub r: String,
    pub s: String,
}

/// Actor entry holding a signature and the signed draft. The verifier
/// grafts the signer's public key in before handing it back to the
/// engine.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub signature: EcdsaSignature,
    pub draft: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub public_key: Option<String>,
}

/// The engine's confirmation: `{ "signature": "correct" }`.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct SignatureCheck {
    pub signature: String,
}

impl<E: ZenEngine> Zen<E> {
    /// Signs `message` with the signer's keypair. The draft is written
    /// into the contract verbatim, so it must survive [`quoted`].
    pub fn sign(
        &self,
        signer: &str,
        keys: &Owned<KeypairEntry>,
        message: &str,
    ) -> Result<Owned<SignatureEntry>, Error> {
        let signer = quoted(signer)?;
        let message = quoted(message)?;
        let contract = Contract::new()
            .scenario(format!("simple: {signer} signs a message for Recipient"))
            .given(format!("that I am known as '{signer}'"))
            .and("I have my valid 'keypair'")
            .when(format!("I write '{message}' in 'draft'"))
            .and("I create the signature of 'draft'")
            .then("print my 'signature'")
            .and("print my 'draft'")
            .render();
        self.execute(Some(KeyMaterial::new().with(keys)?), &contract)
    }

    /// Verifies a signature against the signer's published public key.
    /// Rejection surfaces as [`Error::SignatureRejected`] (or an engine
    /// failure, depending on how the engine reports it).
    pub fn verify(
        &self,
        signer: &str,
        signer_public: &Owned<PublicKeyEntry>,
        signature: &Owned<SignatureEntry>,
        verifier: &str,
    ) -> Result<SignatureCheck, Error> {
        let signer = quoted(signer)?;
        let verifier = quoted(verifier)?;
        let contract = Contract::new()
            .scenario(format!("simple: {verifier} verifies the signature from {signer}"))
            .given(format!("that I am known as '{verifier}'"))
            .and(format!("I have a valid 'public key' from '{signer}'"))
            .and(format!("I have a valid 'signature' from '{signer}'"))
            .and("I have a 'draft'")
            .when(format!("I verify the 'draft' is signed by '{signer}'"))
            .then("print 'signature' 'correct' as 'string'")
            .render();

        // The engine expects signature and public key under one actor.
        let public = actor(signer_public, signer)?.public_key.clone();
        let mut keys = signature.clone();
        match keys.get_mut(signer) {
            Some(entry) => entry.public_key = Some(public),
            None => return Err(Error::MissingActor(signer.to_string())),
        }

        let check: SignatureCheck =
            self.execute(Some(KeyMaterial::new().with(&keys)?), &contract)?;
        if check.signature == "correct" {
            Ok(check)
        } else {
            Err(Error::SignatureRejected)
        }
    }
}
