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
use crate::coconut::keys::VerifierEntry;
use crate::coconut::request::CredentialEntry;
use crate::engine::ZenEngine;
use crate::errors::Error;
use crate::zen::{KeyMaterial, Zen};
use crate::zencode::{quoted, Contract};

/// Proof responses bound to the challenge.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PiV {
    pub rr: String,
    pub rm: String,
    pub c: String,
}

/// Randomized credential signature inside a proof.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SigmaPrime {
    pub h_prime: String,
    pub s_prime: String,
}

/// Zero-knowledge proof of credential possession.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CredentialProof {
    pub kappa: String,
    pub nu: String,
    pub pi_v: PiV,
    pub sigma_prime: SigmaPrime,
}

/// Top-level document wrapping a credential proof.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CredentialProofPayload {
    pub credential_proof: CredentialProof,
}

/// The engine's confirmation: `{ "Success": "OK" }`.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct ProofCheck {
    #[serde(rename = "Success")]
    pub success: String,
}

impl<E: ZenEngine> Zen<E> {
    /// Creates a zero-knowledge proof that the holder possesses
    /// credentials issued by `issuer`, against the issuer's published
    /// verifier.
    pub fn credential_proof(
        &self,
        name: &str,
        issuer: &str,
        credential: &Owned<CredentialEntry>,
        verifier: &Owned<VerifierEntry>,
    ) -> Result<CredentialProofPayload, Error> {
        let name = quoted(name)?;
        let issuer = quoted(issuer)?;
        let contract = Contract::new()
            .scenario("coconut: create proof")
            .given(format!("that I am known as '{name}'"))
            .and("I have my valid 'credential keypair'")
            .and(format!("I have a valid 'verifier' from '{issuer}'"))
            .and("I have my valid 'credentials'")
            .when("I aggregate the verifiers")
            .and("I create the credential proof")
            .then("print the 'credential proof'")
            .render();
        let keys = KeyMaterial::new().with(credential)?.with(verifier)?;
        self.execute(Some(keys), &contract)
    }

    /// Verifies a credential proof against the issuer's published
    /// verifier. Rejection surfaces as an error.
    pub fn verify_credential_proof(
        &self,
        issuer: &str,
        proof: &CredentialProofPayload,
        verifier: &Owned<VerifierEntry>,
    ) -> Result<ProofCheck, Error> {
        let issuer = quoted(issuer)?;
        let contract = Contract::new()
            .scenario("coconut: verify proof")
            .given(format!("that I have a valid 'verifier' from '{issuer}'"))
            .and("I have a valid 'credential proof'")
            .when("I aggregate the verifiers")
            .and("I verify the credential proof")
            .then("print 'Success' 'OK' as 'string'")
            .render();
        let keys = KeyMaterial::new().with(proof)?.with(verifier)?;
        let check: ProofCheck = self.execute(Some(keys), &contract)?;
        if check.success == "OK" {
            Ok(check)
        } else {
            Err(Error::ProofRejected)
        }
    }
}
