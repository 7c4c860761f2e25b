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

use thiserror::Error;

/// Failures surfaced by the client or reported by the execution engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The engine aborted the contract.
    #[error("engine execution failed: {0}")]
    Execution(String),
    #[error("engine printed no usable output")]
    EmptyOutput,
    #[error("malformed engine payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("payload is not valid hex: {0}")]
    HexPayload(#[from] hex::FromHexError),
    #[error("payload is not valid UTF-8: {0}")]
    Utf8Payload(#[from] std::string::FromUtf8Error),
    /// The expected actor entry is absent from an artifact document.
    #[error("no artifact owned by '{0}'")]
    MissingActor(String),
    /// The value would alter contract structure if quoted into it.
    #[error("value {0:?} cannot be quoted into a contract")]
    UnquotableValue(String),
    #[error("key material must serialize to a JSON object")]
    KeyMaterialShape,
    #[error("signature rejected by the engine")]
    SignatureRejected,
    #[error("credential proof rejected by the engine")]
    ProofRejected,
}
