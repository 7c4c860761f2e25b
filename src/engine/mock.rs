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

//! Deterministic in-process test double for the execution engine.
//!
//! [`MockZenroom`] recognizes the contracts this crate templates and
//! fabricates shape-correct artifacts from SHA-256-derived material. It
//! keeps enough internal consistency that round trips are meaningful
//! tests of the client's plumbing: a symmetric envelope only decrypts
//! under the password that sealed it, a signature only verifies against
//! the public key that produced it, a credential proof only verifies
//! against the verifier whose alpha it was built from.
//!
//! It provides NO cryptography and must never leave test setups.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use super::{ZenCall, ZenEngine, ZenOutput};
use crate::errors::Error;

/// Deterministic stand-in for a Zenroom build.
#[derive(Debug, Default)]
pub struct MockZenroom {
    invocations: AtomicU64,
}

impl MockZenroom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh nonce per invocation so repeated keygen/random draws differ
    /// within a run while staying reproducible across runs.
    fn nonce(&self) -> String {
        self.invocations.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// 256 bits of deterministic material, hex encoded.
fn material(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0x1f]);
    }
    hex::encode(hasher.finalize())
}

fn abort(reason: impl Into<String>) -> Error {
    Error::Execution(reason.into())
}

/// Actor from the `Given that I am known as 'X'` line.
fn known_as(script: &str) -> Result<String, Error> {
    quoted_in_line(script, "known as '")
        .ok_or_else(|| abort("contract names no actor"))
}

/// Counterpart actor from the first `... 'thing' from 'X'` line.
fn from_actor(script: &str) -> Result<String, Error> {
    for line in script.lines() {
        if line.contains("' from '") {
            let parts: Vec<&str> = line.split('\'').collect();
            if parts.len() > 3 {
                return Ok(parts[3].to_string());
            }
        }
    }
    Err(abort("contract names no counterpart actor"))
}

/// First quoted token of the line containing `marker`.
fn quoted_in_line(script: &str, marker: &str) -> Option<String> {
    let line = script.lines().find(|l| l.contains(marker))?;
    let start = line.find(marker)? + marker.len();
    let end = line[start..].find('\'')?;
    Some(line[start..start + end].to_string())
}

/// Value of a `I write '<value>' in '<slot>'` statement.
fn written_into(script: &str, slot: &str) -> Result<String, Error> {
    for line in script.lines() {
        let parts: Vec<&str> = line.split('\'').collect();
        if parts.len() >= 5 && parts[0].contains("I write ") && parts[3] == slot {
            return Ok(parts[1].to_string());
        }
    }
    Err(abort(format!("contract writes nothing into '{slot}'")))
}

/// Depth-first search for an object stored under `key` anywhere in the
/// keys document. Matches how the engine resolves artifacts regardless
/// of actor nesting.
fn find<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    let object = doc.as_object()?;
    if let Some(found) = object.get(key) {
        return Some(found);
    }
    object.values().find_map(|nested| find(nested, key))
}

fn find_or_abort<'a>(doc: &'a Value, key: &str) -> Result<&'a Value, Error> {
    find(doc, key).ok_or_else(|| abort(format!("keys hold no '{key}'")))
}

fn str_field(value: &Value, field: &str) -> Result<String, Error> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| abort(format!("artifact misses '{field}'")))
}

/// Public key an actor brings to the call, either bare or inside a
/// keypair.
fn public_key_of(keys: &Value, actor: &str) -> Result<String, Error> {
    let entry = keys
        .get(actor)
        .ok_or_else(|| abort(format!("keys hold nothing for '{actor}'")))?;
    if let Some(bare) = entry.get("public_key").and_then(Value::as_str) {
        return Ok(bare.to_string());
    }
    let keypair = entry
        .get("keypair")
        .ok_or_else(|| abort(format!("'{actor}' brings no keypair")))?;
    str_field(keypair, "public_key")
}

/// Shared-secret stand-in: both directions of an exchange see the same
/// pair of public keys, so a sorted hash of them is symmetric.
fn exchange_checksum(mine: &str, theirs: &str) -> String {
    let (low, high) = if mine <= theirs { (mine, theirs) } else { (theirs, mine) };
    material(&["ecdh", low, high])
}

impl ZenEngine for MockZenroom {
    fn zencode_exec(&self, call: &ZenCall) -> Result<ZenOutput, Error> {
        let script = call.script.as_str();
        let keys: Value = match &call.keys {
            Some(raw) => serde_json::from_str(raw)?,
            None => Value::Null,
        };

        let printed = if script.contains("When I create the keypair") {
            self.keypair(script)?
        } else if script.contains("I have my valid 'public key'") {
            public_view(script, &keys)?
        } else if script.contains("I encrypt the secret message 'whisper'") {
            self.encrypt_symmetric(script)?
        } else if script.contains("I decrypt the secret message with 'password'") {
            decrypt_symmetric(script, &keys)?
        } else if script.contains("I encrypt the message for") {
            self.encrypt_asymmetric(script, &keys)?
        } else if script.contains("I decrypt the secret message from") {
            decrypt_asymmetric(script, &keys)?
        } else if script.contains("I create the signature of 'draft'") {
            sign_draft(script, &keys)?
        } else if script.contains("is signed by") {
            verify_draft(script, &keys)?
        } else if script.contains("I create the issuer keypair") {
            self.issuer_keypair(script)?
        } else if script.contains("I create the credential keypair") {
            self.credential_keypair(script)?
        } else if script.contains("Then print my 'verifier'") {
            publish_verifier(script, &keys)?
        } else if script.contains("I create the credential request") {
            credential_request(script, &keys)?
        } else if script.contains("I create the credential signature") {
            issue_credential(&keys)?
        } else if script.contains("When I create the credentials") {
            aggregate_credential(script, &keys)?
        } else if script.contains("I create the credential proof") {
            credential_proof(&keys)?
        } else if script.contains("I verify the credential proof") {
            verify_credential_proof(&keys)?
        } else if script.contains("random objects of") {
            self.random_array()?
        } else if script.contains("I create the hash of 'source'") {
            hash_source(script)?
        } else {
            return Err(abort("unrecognized contract"));
        };

        Ok(ZenOutput {
            stdout: serde_json::to_string(&printed)?,
            logs: vec![
                "mock zenroom".to_string(),
                format!("{} contract lines executed", script.lines().count()),
            ],
        })
    }
}

impl MockZenroom {
    fn keypair(&self, script: &str) -> Result<Value, Error> {
        let name = known_as(script)?;
        let private = material(&["sk", &name, &self.nonce()]);
        let public = material(&["pk", &private]);
        Ok(json!({
            name: { "keypair": { "public_key": public, "private_key": private } }
        }))
    }

    fn encrypt_symmetric(&self, script: &str) -> Result<Value, Error> {
        let password = written_into(script, "password")?;
        let text = written_into(script, "whisper")?;
        let header = written_into(script, "header")?;
        Ok(json!({
            "secret_message": {
                "iv": material(&["iv", &self.nonce()]),
                "header": header,
                "text": text,
                "checksum": material(&["chk", &password, &text]),
            }
        }))
    }

    fn encrypt_asymmetric(&self, script: &str, keys: &Value) -> Result<Value, Error> {
        let me = known_as(script)?;
        let other = from_actor(script)?;
        let text = written_into(script, "message")?;
        let header = written_into(script, "header")?;
        let mine = public_key_of(keys, &me)?;
        let theirs = public_key_of(keys, &other)?;
        Ok(json!({
            "secret_message": {
                "iv": material(&["iv", &self.nonce()]),
                "header": header,
                "text": text,
                "checksum": exchange_checksum(&mine, &theirs),
            }
        }))
    }

    fn issuer_keypair(&self, script: &str) -> Result<Value, Error> {
        let name = known_as(script)?;
        let x = material(&["issuer-x", &name, &self.nonce()]);
        let y = material(&["issuer-y", &x]);
        Ok(json!({
            name: {
                "issuer_keypair": {
                    "issuer_sign": { "x": x, "y": y },
                    "verifier": { "alpha": material(&["alpha", &x]), "beta": material(&["beta", &y]) },
                }
            }
        }))
    }

    fn credential_keypair(&self, script: &str) -> Result<Value, Error> {
        let name = known_as(script)?;
        let private = material(&["cred-sk", &name, &self.nonce()]);
        Ok(json!({
            name: {
                "credential_keypair": {
                    "public": material(&["cred-pk", &private]),
                    "private": private,
                }
            }
        }))
    }

    fn random_array(&self) -> Result<Value, Error> {
        Ok(json!({ "array": [material(&["rnd", &self.nonce()])] }))
    }
}

fn public_view(script: &str, keys: &Value) -> Result<Value, Error> {
    let name = known_as(script)?;
    let entry = find_or_abort(keys, "keypair")?;
    Ok(json!({ name: { "public_key": str_field(entry, "public_key")? } }))
}

fn decrypt_symmetric(script: &str, keys: &Value) -> Result<Value, Error> {
    let password = written_into(script, "password")?;
    let envelope = find_or_abort(keys, "secret_message")?;
    let text = str_field(envelope, "text")?;
    if material(&["chk", &password, &text]) != str_field(envelope, "checksum")? {
        return Err(abort("decryption failed: checksum mismatch"));
    }
    Ok(json!({ "text": text, "header": str_field(envelope, "header")? }))
}

fn decrypt_asymmetric(script: &str, keys: &Value) -> Result<Value, Error> {
    let me = known_as(script)?;
    let other = from_actor(script)?;
    let mine = public_key_of(keys, &me)?;
    let theirs = public_key_of(keys, &other)?;
    let envelope = find_or_abort(keys, "secret_message")?;
    if exchange_checksum(&mine, &theirs) != str_field(envelope, "checksum")? {
        return Err(abort("decryption failed: checksum mismatch"));
    }
    Ok(json!({
        "message": str_field(envelope, "text")?,
        "header": str_field(envelope, "header")?,
    }))
}

fn sign_draft(script: &str, keys: &Value) -> Result<Value, Error> {
    let me = known_as(script)?;
    let draft = written_into(script, "draft")?;
    let public = public_key_of(keys, &me)?;
    Ok(json!({
        me: {
            "signature": {
                "r": material(&["sig-r", &public, &draft]),
                "s": material(&["sig-s", &public, &draft]),
            },
            "draft": draft,
        }
    }))
}

fn verify_draft(script: &str, keys: &Value) -> Result<Value, Error> {
    let signer = from_actor(script)?;
    let entry = keys
        .get(&signer)
        .ok_or_else(|| abort(format!("keys hold nothing for '{signer}'")))?;
    let public = str_field(entry, "public_key")?;
    let draft = str_field(entry, "draft")?;
    let signature = entry
        .get("signature")
        .ok_or_else(|| abort("keys hold no signature"))?;
    if str_field(signature, "r")? != material(&["sig-r", &public, &draft]) {
        return Err(abort("signature verification failed"));
    }
    Ok(json!({ "signature": "correct" }))
}

fn publish_verifier(script: &str, keys: &Value) -> Result<Value, Error> {
    let name = known_as(script)?;
    let verifier = find_or_abort(keys, "verifier")?;
    Ok(json!({ name: { "verifier": verifier.clone() } }))
}

fn credential_request(script: &str, keys: &Value) -> Result<Value, Error> {
    let name = known_as(script)?;
    let keypair = find_or_abort(keys, "credential_keypair")?;
    let private = str_field(keypair, "private")?;
    let commit = material(&["commit", &private]);
    Ok(json!({
        name: {
            "credential_request": {
                "public": str_field(keypair, "public")?,
                "pi_s": {
                    "rr": material(&["pi_s-rr", &commit]),
                    "rm": material(&["pi_s-rm", &commit]),
                    "rk": material(&["pi_s-rk", &commit]),
                },
                "c": material(&["pi_s-c", &commit]),
                "commit": commit,
            }
        }
    }))
}

fn issue_credential(keys: &Value) -> Result<Value, Error> {
    let issuer_keypair = find_or_abort(keys, "issuer_keypair")?;
    let sign = issuer_keypair
        .get("issuer_sign")
        .ok_or_else(|| abort("issuer keypair misses 'issuer_sign'"))?;
    let verifier = issuer_keypair
        .get("verifier")
        .ok_or_else(|| abort("issuer keypair misses 'verifier'"))?;
    let request = find_or_abort(keys, "credential_request")?;
    let h = material(&["h", &str_field(request, "commit")?]);
    Ok(json!({
        "credential_signature": {
            "a_tilde": material(&["a-tilde", &str_field(sign, "x")?, &h]),
            "b_tilde": material(&["b-tilde", &str_field(sign, "y")?, &h]),
            "h": h,
        },
        "verifier": verifier.clone(),
    }))
}

fn aggregate_credential(script: &str, keys: &Value) -> Result<Value, Error> {
    let name = known_as(script)?;
    let keypair = find_or_abort(keys, "credential_keypair")?.clone();
    let signature = find_or_abort(keys, "credential_signature")?;
    let a_tilde = str_field(signature, "a_tilde")?;
    let private = str_field(&keypair, "private")?;
    Ok(json!({
        name: {
            "credentials": {
                "s": material(&["agg-s", &a_tilde, &private]),
                "h": str_field(signature, "h")?,
            },
            "credential_keypair": keypair,
        }
    }))
}

fn credential_proof(keys: &Value) -> Result<Value, Error> {
    let credentials = find_or_abort(keys, "credentials")?;
    let verifier = find_or_abort(keys, "verifier")?;
    let alpha = str_field(verifier, "alpha")?;
    let s_prime = material(&["s-prime", &str_field(credentials, "s")?]);
    let h_prime = material(&["h-prime", &str_field(credentials, "h")?]);
    Ok(json!({
        "credential_proof": {
            "kappa": material(&["kappa", &alpha, &s_prime]),
            "nu": material(&["nu", &s_prime]),
            "pi_v": {
                "rr": material(&["pi_v-rr", &s_prime]),
                "rm": material(&["pi_v-rm", &s_prime]),
                "c": material(&["pi_v-c", &s_prime]),
            },
            "sigma_prime": { "h_prime": h_prime, "s_prime": s_prime },
        }
    }))
}

fn verify_credential_proof(keys: &Value) -> Result<Value, Error> {
    let verifier = find_or_abort(keys, "verifier")?;
    let proof = find_or_abort(keys, "credential_proof")?;
    let sigma_prime = proof
        .get("sigma_prime")
        .ok_or_else(|| abort("proof misses 'sigma_prime'"))?;
    let expected = material(&[
        "kappa",
        &str_field(verifier, "alpha")?,
        &str_field(sigma_prime, "s_prime")?,
    ]);
    if str_field(proof, "kappa")? != expected {
        return Err(abort("credential proof does not verify"));
    }
    Ok(json!({ "Success": "OK" }))
}

fn hash_source(script: &str) -> Result<Value, Error> {
    let source = written_into(script, "source")?;
    Ok(json!({ "hash": material(&["hash", &source]) }))
}
