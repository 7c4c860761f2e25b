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
use crate::zen::Zen;

fn client() -> Zen<MockZenroom> {
    Zen::new(MockZenroom::new())
}

#[test]
fn issuer_keypair_carries_sign_and_verifier() {
    let zen = client();
    let issuer = zen.issuer_keypair("Issuer").unwrap();
    let keypair = &actor(&issuer, "Issuer").unwrap().issuer_keypair;
    assert!(!keypair.issuer_sign.x.is_empty());
    assert!(!keypair.issuer_sign.y.is_empty());
    assert!(!keypair.verifier.alpha.is_empty());
    assert!(!keypair.verifier.beta.is_empty());
}

#[test]
fn published_verifier_matches_the_issuer_keypair() {
    let zen = client();
    let issuer = zen.issuer_keypair("Issuer").unwrap();
    let entry = actor(&issuer, "Issuer").unwrap();
    let published = zen.publish_verifier("Issuer", entry).unwrap();
    assert_eq!(
        actor(&published, "Issuer").unwrap().verifier,
        entry.issuer_keypair.verifier
    );
}

#[test]
fn credential_keypair_has_both_halves() {
    let zen = client();
    let holder = zen.credential_keypair("Alice").unwrap();
    let keypair = &actor(&holder, "Alice").unwrap().credential_keypair;
    assert!(!keypair.public.is_empty());
    assert!(!keypair.private.is_empty());
}

#[test]
fn request_is_bound_to_the_credential_keypair() {
    let zen = client();
    let holder = zen.credential_keypair("Alice").unwrap();
    let request = zen.credential_request("Alice", &holder).unwrap();
    let entry = &actor(&request, "Alice").unwrap().credential_request;
    assert_eq!(
        entry.public,
        actor(&holder, "Alice").unwrap().credential_keypair.public
    );
    assert!(!entry.commit.is_empty());
    assert!(!entry.pi_s.is_null());
    assert!(!entry.c.is_null());
}

#[test]
fn full_issuance_and_proof_flow_verifies() {
    let zen = client();

    let issuer = zen.issuer_keypair("Issuer").unwrap();
    let published = zen
        .publish_verifier("Issuer", actor(&issuer, "Issuer").unwrap())
        .unwrap();

    let holder = zen.credential_keypair("Alice").unwrap();
    let request = zen.credential_request("Alice", &holder).unwrap();
    let issued = zen
        .issue_credential("Issuer", &issuer, actor(&request, "Alice").unwrap())
        .unwrap();
    assert!(!issued.credential_signature.a_tilde.is_empty());
    assert!(!issued.credential_signature.b_tilde.is_empty());
    assert!(!issued.credential_signature.h.is_empty());

    let credential = zen.aggregate_credential("Alice", &holder, &issued).unwrap();
    let entry = actor(&credential, "Alice").unwrap();
    assert!(!entry.credentials.s.is_empty());
    assert_eq!(entry.credentials.h, issued.credential_signature.h);

    let proof = zen
        .credential_proof("Alice", "Issuer", &credential, &published)
        .unwrap();
    assert!(!proof.credential_proof.kappa.is_empty());
    assert!(!proof.credential_proof.nu.is_empty());
    assert!(!proof.credential_proof.pi_v.rr.is_empty());
    assert!(!proof.credential_proof.sigma_prime.h_prime.is_empty());

    let check = zen
        .verify_credential_proof("Issuer", &proof, &published)
        .unwrap();
    assert_eq!(check.success, "OK");
}

#[test]
fn proof_fails_against_another_issuers_verifier() {
    let zen = client();

    let issuer = zen.issuer_keypair("Issuer").unwrap();
    let published = zen
        .publish_verifier("Issuer", actor(&issuer, "Issuer").unwrap())
        .unwrap();
    let other = zen.issuer_keypair("Other").unwrap();
    let other_published = zen
        .publish_verifier("Other", actor(&other, "Other").unwrap())
        .unwrap();
    // Proofs are actor-agnostic documents; reuse the entry under the
    // verifying issuer's name.
    let mut wrong_verifier = crate::artifacts::Owned::new();
    wrong_verifier.insert(
        "Issuer".to_string(),
        actor(&other_published, "Other").unwrap().clone(),
    );

    let holder = zen.credential_keypair("Alice").unwrap();
    let request = zen.credential_request("Alice", &holder).unwrap();
    let issued = zen
        .issue_credential("Issuer", &issuer, actor(&request, "Alice").unwrap())
        .unwrap();
    let credential = zen.aggregate_credential("Alice", &holder, &issued).unwrap();
    let proof = zen
        .credential_proof("Alice", "Issuer", &credential, &published)
        .unwrap();

    assert!(zen
        .verify_credential_proof("Issuer", &proof, &wrong_verifier)
        .is_err());
}

#[test]
fn tampered_proof_is_rejected() {
    let zen = client();

    let issuer = zen.issuer_keypair("Issuer").unwrap();
    let published = zen
        .publish_verifier("Issuer", actor(&issuer, "Issuer").unwrap())
        .unwrap();
    let holder = zen.credential_keypair("Alice").unwrap();
    let request = zen.credential_request("Alice", &holder).unwrap();
    let issued = zen
        .issue_credential("Issuer", &issuer, actor(&request, "Alice").unwrap())
        .unwrap();
    let credential = zen.aggregate_credential("Alice", &holder, &issued).unwrap();

    let mut proof = zen
        .credential_proof("Alice", "Issuer", &credential, &published)
        .unwrap();
    proof.credential_proof.kappa = "00".repeat(32);

    assert!(zen
        .verify_credential_proof("Issuer", &proof, &published)
        .is_err());
}
