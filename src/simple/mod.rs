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

//! The `simple` Zencode scenario: elliptic-curve keypairs, symmetric and
//! asymmetric authenticated encryption, ECDSA signatures, hashing and
//! engine-side randomness. Every operation templates one contract,
//! executes it and maps the printed JSON; the cryptography itself lives
//! in the engine.

/// Module for encrypted envelopes
pub mod encryption;
/// Module for hashing
pub mod hash;
/// Module for keypairs
pub mod keys;
/// Module for randomness and PIN derivation
pub mod random;
/// Module for signatures
pub mod signature;

#[cfg(test)]
mod tests;
