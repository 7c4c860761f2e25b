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

//! The client: owns an engine, executes contracts, maps printed JSON.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::engine::{Conf, ZenCall, ZenEngine};
use crate::errors::Error;

/// Keys document assembled from one or more serialized artifacts.
///
/// The engine accepts a single JSON object as key material; artifacts
/// from earlier calls are merged into it top-level key by top-level key.
#[derive(Clone, Debug, Default)]
pub struct KeyMaterial {
    object: Map<String, Value>,
}

impl KeyMaterial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a serialized artifact into the document. The artifact must
    /// serialize to a JSON object; later artifacts win on key collision.
    pub fn with<T: Serialize + ?Sized>(mut self, artifact: &T) -> Result<Self, Error> {
        match serde_json::to_value(artifact)? {
            Value::Object(map) => {
                self.object.extend(map);
                Ok(self)
            }
            _ => Err(Error::KeyMaterialShape),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    pub fn render(&self) -> String {
        Value::Object(self.object.clone()).to_string()
    }
}

/// Client for a Zenroom-like execution engine.
///
/// Generic over the engine so a native binding and the mock are
/// interchangeable. Operations live in the scenario modules
/// ([`crate::simple`], [`crate::coconut`]); each one templates a
/// contract, runs [`Zen::execute`] and maps the result.
pub struct Zen<E: ZenEngine> {
    engine: E,
    conf: Conf,
    silent: bool,
}

impl<E: ZenEngine> Zen<E> {
    /// A silent client: engine log lines are discarded.
    pub fn new(engine: E) -> Self {
        Self::with_silent(engine, true)
    }

    /// A client that forwards engine log lines to the `log` facade when
    /// `silent` is false.
    pub fn with_silent(engine: E, silent: bool) -> Self {
        Self {
            engine,
            conf: Conf::default(),
            silent,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Executes a contract and deserializes whatever the engine printed.
    pub fn execute<T: DeserializeOwned>(
        &self,
        keys: Option<KeyMaterial>,
        script: &str,
    ) -> Result<T, Error> {
        let mut call = ZenCall::new(script).conf(self.conf);
        if let Some(keys) = keys {
            if !keys.is_empty() {
                call = call.keys(keys.render());
            }
        }
        log::trace!(target: "zenlink", "executing contract:\n{script}");
        let output = self.engine.zencode_exec(&call)?;
        if !self.silent {
            for line in &output.logs {
                log::debug!(target: "zenlink::engine", "{line}");
            }
        }
        let stdout = output.stdout.trim();
        if stdout.is_empty() {
            return Err(Error::EmptyOutput);
        }
        Ok(serde_json::from_str(stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ZenOutput;

    struct Echo;

    impl ZenEngine for Echo {
        fn zencode_exec(&self, call: &ZenCall) -> Result<ZenOutput, Error> {
            Ok(ZenOutput {
                stdout: call.keys.clone().unwrap_or_else(|| "{}".to_string()),
                logs: vec!["echo".to_string()],
            })
        }
    }

    struct Mute;

    impl ZenEngine for Mute {
        fn zencode_exec(&self, _call: &ZenCall) -> Result<ZenOutput, Error> {
            Ok(ZenOutput::default())
        }
    }

    #[test]
    fn key_material_merges_objects() {
        let alice = serde_json::json!({ "Alice": { "keypair": {} } });
        let bob = serde_json::json!({ "Bob": { "public_key": "pk" } });
        let merged = KeyMaterial::new().with(&alice).unwrap().with(&bob).unwrap();
        let value: Value = serde_json::from_str(&merged.render()).unwrap();
        assert!(value.get("Alice").is_some());
        assert!(value.get("Bob").is_some());
    }

    #[test]
    fn key_material_rejects_non_objects() {
        assert!(matches!(
            KeyMaterial::new().with(&"just a string"),
            Err(Error::KeyMaterialShape)
        ));
    }

    #[test]
    fn execute_round_trips_key_material() {
        let zen = Zen::new(Echo);
        let keys = KeyMaterial::new()
            .with(&serde_json::json!({ "Alice": { "public_key": "pk" } }))
            .unwrap();
        let out: Value = zen.execute(Some(keys), "script").unwrap();
        assert_eq!(out["Alice"]["public_key"], "pk");
    }

    #[test]
    fn empty_engine_output_is_an_error() {
        let zen = Zen::new(Mute);
        let result: Result<Value, Error> = zen.execute(None, "script");
        assert!(matches!(result, Err(Error::EmptyOutput)));
    }
}
