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
use crate::simple::keys::{KeypairEntry, PublicKeyEntry};
use crate::utils::encoding::{hex_to_utf8, utf8_to_hex};
use crate::zen::{KeyMaterial, Zen};
use crate::zencode::{quoted, Contract};

/// Encrypted envelope as printed by the engine.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SecretMessage {
    pub iv: String,
    pub header: String,
    pub text: String,
    pub checksum: String,
}

/// Top-level document wrapping a secret message.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SecretMessageEnvelope {
    pub secret_message: SecretMessage,
}

/// Decrypted payload mapped back to UTF-8.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Plaintext {
    pub header: String,
    pub message: String,
}

/// Symmetric decryption prints `text` and `header` as hex.
#[derive(Deserialize)]
struct RawSymmetric {
    text: String,
    header: String,
}

/// Asymmetric decryption prints the message as hex and the header as the
/// string it was written as.
#[derive(Deserialize)]
struct RawAsymmetric {
    message: String,
    #[serde(default)]
    header: String,
}

impl<E: ZenEngine> Zen<E> {
    /// Encrypts `message` under `password`. Message and header travel
    /// into the contract hex-encoded.
    pub fn encrypt_symmetric(
        &self,
        password: &str,
        message: &str,
        header: &str,
    ) -> Result<SecretMessageEnvelope, Error> {
        let password = quoted(password)?;
        let msg = utf8_to_hex(message);
        let hdr = utf8_to_hex(header);
        let contract = Contract::new()
            .scenario("simple: Encrypt a message with the password")
            .given("nothing")
            .when(format!("I write '{password}' in 'password'"))
            .and(format!("I write '{msg}' in 'whisper'"))
            .and(format!("I write '{hdr}' in 'header'"))
            .and("I encrypt the secret message 'whisper' with 'password'")
            .then("print the 'secret message'")
            .render();
        self.execute(None, &contract)
    }

    /// Decrypts a password-sealed envelope. A wrong password is an
    /// engine failure and surfaces as `Err`.
    pub fn decrypt_symmetric(
        &self,
        password: &str,
        envelope: &SecretMessageEnvelope,
    ) -> Result<Plaintext, Error> {
        let password = quoted(password)?;
        let contract = Contract::new()
            .scenario("simple: Decrypt the message with the password")
            .given("I have a valid 'secret message'")
            .when(format!("I write '{password}' in 'password'"))
            .and("I decrypt the secret message with 'password'")
            .then("print as 'string' the 'text' inside 'message'")
            .and("print as 'string' the 'header' inside 'message'")
            .render();
        let raw: RawSymmetric =
            self.execute(Some(KeyMaterial::new().with(envelope)?), &contract)?;
        Ok(Plaintext {
            header: hex_to_utf8(&raw.header)?,
            message: hex_to_utf8(&raw.text)?,
        })
    }

    /// Encrypts `message` from `from` (full keypair) to `to` (public key
    /// only).
    pub fn encrypt_asymmetric(
        &self,
        from: &str,
        from_keys: &Owned<KeypairEntry>,
        to: &str,
        to_keys: &Owned<PublicKeyEntry>,
        message: &str,
    ) -> Result<SecretMessageEnvelope, Error> {
        let from = quoted(from)?;
        let to = quoted(to)?;
        let msg = utf8_to_hex(message);
        let contract = Contract::new()
            .scenario(format!("simple: {from} encrypts a message for {to}"))
            .given(format!("that I am known as '{from}'"))
            .and("I have my valid 'keypair'")
            .and(format!("I have a valid 'public key' from '{to}'"))
            .when(format!("I write '{msg}' in 'message'"))
            .and("I write 'This is the header' in 'header'")
            .and(format!("I encrypt the message for '{to}'"))
            .then("print the 'secret_message'")
            .render();
        let keys = KeyMaterial::new().with(from_keys)?.with(to_keys)?;
        self.execute(Some(keys), &contract)
    }

    /// Decrypts an envelope sent by `from`; `to` supplies the full
    /// keypair, `from` only the public key.
    pub fn decrypt_asymmetric(
        &self,
        from: &str,
        from_public: &Owned<PublicKeyEntry>,
        to: &str,
        to_keys: &Owned<KeypairEntry>,
        envelope: &SecretMessageEnvelope,
    ) -> Result<Plaintext, Error> {
        let from = quoted(from)?;
        let to = quoted(to)?;
        let contract = Contract::new()
            .scenario(format!("simple: {to} decrypts the message for {from}"))
            .given(format!("that I am known as '{to}'"))
            .and("I have my valid 'keypair'")
            .and(format!("I have a valid 'public key' from '{from}'"))
            .and("I have a valid 'secret_message'")
            .when(format!("I decrypt the secret message from '{from}'"))
            .then("print as 'string' the 'message'")
            .and("print as 'string' the 'header' inside 'secret message'")
            .render();
        let keys = KeyMaterial::new()
            .with(from_public)?
            .with(to_keys)?
            .with(envelope)?;
        let raw: RawAsymmetric = self.execute(Some(keys), &contract)?;
        Ok(Plaintext {
            header: raw.header,
            message: hex_to_utf8(&raw.message)?,
        })
    }
}
