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

//! Typed Zencode templating client for a Zenroom-like cryptographic
//! execution engine.
//!
//! The engine owns every cryptographic primitive (curve arithmetic,
//! authenticated encryption, signatures, hashing, randomness and the
//! anonymous-credential protocol). This crate only builds Zencode
//! contracts, hands them to an engine behind the [`engine::ZenEngine`]
//! trait and maps the printed JSON into typed artifacts.
//!
//! No native engine binding is shipped; implement [`engine::ZenEngine`]
//! over the Zenroom build of your choice. A deterministic test double is
//! available as [`engine::mock::MockZenroom`].

/// Module for actor-keyed artifact documents
pub mod artifacts;
/// Module for the anonymous-credential (coconut) scenario
pub mod coconut;
/// Module for the execution engine boundary
pub mod engine;
/// Module for errors
pub mod errors;
/// Module for the simple scenario (keys, encryption, signatures, hash, random)
pub mod simple;
/// Module for client-side conversion helpers
pub mod utils;
/// Module for the client itself
pub mod zen;
/// Module for Zencode contract templating
pub mod zencode;

pub use engine::{Conf, ZenCall, ZenEngine, ZenOutput};
pub use errors::Error;
pub use zen::{KeyMaterial, Zen};
