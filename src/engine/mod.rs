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

//! Boundary to the external execution engine.
//!
//! The engine is an opaque black box: it receives a Zencode contract plus
//! optional keys/data JSON documents and prints a JSON result on success.
//! Implementations wrap a native Zenroom build; [`mock::MockZenroom`] is a
//! deterministic in-process test double.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Module for the deterministic test double
pub mod mock;

/// Engine configuration. Only verbosity is tunable today.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Conf {
    pub verbosity: u8,
}

impl Default for Conf {
    fn default() -> Self {
        Self { verbosity: 0 }
    }
}

/// One engine invocation: the contract text plus the optional keys and
/// data documents, assembled in the order the engine's procedural
/// interface expects (configure, keys, data, script, execute).
#[derive(Clone, Debug)]
pub struct ZenCall {
    pub script: String,
    pub keys: Option<String>,
    pub data: Option<String>,
    pub conf: Conf,
}

impl ZenCall {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            keys: None,
            data: None,
            conf: Conf::default(),
        }
    }

    pub fn keys(mut self, keys: impl Into<String>) -> Self {
        self.keys = Some(keys.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn conf(mut self, conf: Conf) -> Self {
        self.conf = conf;
        self
    }
}

/// What a successful execution printed: the stdout JSON document and the
/// captured stderr log stream.
#[derive(Clone, Debug, Default)]
pub struct ZenOutput {
    pub stdout: String,
    pub logs: Vec<String>,
}

/// Narrow procedural interface to the execution engine.
///
/// One invocation per call, no state shared between calls. The original
/// engine reported success and failure through registered callbacks; here
/// both collapse into the `Result`.
pub trait ZenEngine {
    fn zencode_exec(&self, call: &ZenCall) -> Result<ZenOutput, Error>;
}
