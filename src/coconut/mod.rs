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

//! The `coconut` Zencode scenario: a blind-signature anonymous-credential
//! protocol executed entirely inside the engine.
//!
//! The flow has three roles. The issuer creates an issuer keypair and
//! publishes its verifier. The holder creates a credential keypair,
//! sends a blind signature request, and aggregates the issuer's
//! signature into usable credentials. Any party can then ask the holder
//! for a zero-knowledge proof of possession and verify it against the
//! issuer's published verifier, without learning the credential itself.

/// Module for issuer and credential keypairs
pub mod keys;
/// Module for proof creation and verification
pub mod proof;
/// Module for blind signature requests, issuance and aggregation
pub mod request;

#[cfg(test)]
mod tests;
