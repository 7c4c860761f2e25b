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

use crate::artifacts::actor;
use crate::engine::mock::MockZenroom;
use crate::errors::Error;
use crate::zen::Zen;

const MESSAGE: &str = "Hello World";
const PASSWORD: &str = "password";
const HEADER: &str = "Header for encryption";

fn client() -> Zen<MockZenroom> {
    Zen::new(MockZenroom::new())
}

#[test]
fn keypair_has_both_halves() {
    let zen = client();
    let alice = zen.keypair("Alice").unwrap();
    let entry = actor(&alice, "Alice").unwrap();
    assert!(!entry.keypair.public_key.is_empty());
    assert!(!entry.keypair.private_key.is_empty());
}

#[test]
fn repeated_keypairs_differ() {
    let zen = client();
    let first = zen.keypair("Alice").unwrap();
    let second = zen.keypair("Alice").unwrap();
    assert_ne!(
        actor(&first, "Alice").unwrap().keypair.private_key,
        actor(&second, "Alice").unwrap().keypair.private_key
    );
}

#[test]
fn public_view_drops_the_private_half() {
    let zen = client();
    let alice = zen.keypair("Alice").unwrap();
    let public = zen.public_key("Alice", &alice).unwrap();
    let entry = actor(&public, "Alice").unwrap();
    assert_eq!(entry.public_key, actor(&alice, "Alice").unwrap().keypair.public_key);
    // The serialized view carries no private material.
    let raw = serde_json::to_string(&public).unwrap();
    assert!(!raw.contains("private_key"));
}

#[test]
fn keypair_rejects_unquotable_names() {
    let zen = client();
    assert!(matches!(
        zen.keypair("Al'ice"),
        Err(Error::UnquotableValue(_))
    ));
}

#[test]
fn symmetric_round_trip_recovers_message_and_header() {
    let zen = client();
    let envelope = zen.encrypt_symmetric(PASSWORD, MESSAGE, HEADER).unwrap();
    assert!(!envelope.secret_message.iv.is_empty());
    assert!(!envelope.secret_message.header.is_empty());
    assert!(!envelope.secret_message.text.is_empty());
    assert!(!envelope.secret_message.checksum.is_empty());

    let plain = zen.decrypt_symmetric(PASSWORD, &envelope).unwrap();
    assert_eq!(plain.message, MESSAGE);
    assert_eq!(plain.header, HEADER);
}

#[test]
fn symmetric_decrypt_fails_with_wrong_password() {
    let zen = client();
    let envelope = zen.encrypt_symmetric(PASSWORD, MESSAGE, HEADER).unwrap();
    assert!(matches!(
        zen.decrypt_symmetric("badpassword", &envelope),
        Err(Error::Execution(_))
    ));
}

#[test]
fn asymmetric_round_trip_recovers_message() {
    let zen = client();
    let alice = zen.keypair("Alice").unwrap();
    let bob = zen.keypair("Bob").unwrap();
    let alice_public = zen.public_key("Alice", &alice).unwrap();
    let bob_public = zen.public_key("Bob", &bob).unwrap();

    let envelope = zen
        .encrypt_asymmetric("Alice", &alice, "Bob", &bob_public, MESSAGE)
        .unwrap();
    assert!(!envelope.secret_message.checksum.is_empty());

    let plain = zen
        .decrypt_asymmetric("Alice", &alice_public, "Bob", &bob, &envelope)
        .unwrap();
    assert_eq!(plain.message, MESSAGE);
}

#[test]
fn asymmetric_decrypt_fails_for_the_wrong_recipient() {
    let zen = client();
    let alice = zen.keypair("Alice").unwrap();
    let bob = zen.keypair("Bob").unwrap();
    let carol = zen.keypair("Carol").unwrap();
    let alice_public = zen.public_key("Alice", &alice).unwrap();
    let bob_public = zen.public_key("Bob", &bob).unwrap();

    let envelope = zen
        .encrypt_asymmetric("Alice", &alice, "Bob", &bob_public, MESSAGE)
        .unwrap();
    assert!(zen
        .decrypt_asymmetric("Alice", &alice_public, "Carol", &carol, &envelope)
        .is_err());
}

#[test]
fn signature_verifies_against_the_signer() {
    let zen = client();
    let alice = zen.keypair("Alice").unwrap();
    let alice_public = zen.public_key("Alice", &alice).unwrap();

    let signature = zen.sign("Alice", &alice, MESSAGE).unwrap();
    let entry = actor(&signature, "Alice").unwrap();
    assert!(!entry.signature.r.is_empty());
    assert!(!entry.signature.s.is_empty());
    assert_eq!(entry.draft, MESSAGE);

    let check = zen.verify("Alice", &alice_public, &signature, "Bob").unwrap();
    assert_eq!(check.signature, "correct");
}

#[test]
fn signature_fails_against_another_public_key() {
    let zen = client();
    let alice = zen.keypair("Alice").unwrap();
    let mallory = zen.keypair("Alice").unwrap();
    let mallory_public = zen.public_key("Alice", &mallory).unwrap();

    let signature = zen.sign("Alice", &alice, MESSAGE).unwrap();
    assert!(zen
        .verify("Alice", &mallory_public, &signature, "Bob")
        .is_err());
}

#[test]
fn hash_is_deterministic_for_a_source() {
    let zen = client();
    let first = zen.hash("Hello world").unwrap();
    let second = zen.hash("Hello world").unwrap();
    assert!(!first.hash.is_empty());
    assert_eq!(first.hash, second.hash);
    assert_ne!(first.hash, zen.hash("Hello world!").unwrap().hash);
}

#[test]
fn random_is_truncated_to_the_requested_length() {
    let zen = client();
    assert_eq!(zen.random(32).unwrap().len(), 32);
    assert_eq!(zen.random(16).unwrap().len(), 16);
    assert_eq!(zen.random(8).unwrap().len(), 8);
    assert_ne!(zen.random(32).unwrap(), zen.random(32).unwrap());
}

#[test]
fn random_pin_is_all_digits() {
    let zen = client();
    let pin = zen.random_pin(6).unwrap();
    assert_eq!(pin.len(), 6);
    assert!(pin.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(zen.random_pin(4).unwrap().len(), 4);
}

#[test]
fn random_did_is_32_characters() {
    let zen = client();
    assert_eq!(zen.random_did().unwrap().len(), 32);
}
