//! BDD scenarios for key-pair management.

use rstest_bdd_macros::scenario;

use super::test_helpers::{KeyPairContext, keypair_context};

#[scenario(path = "tests/features/key_pairs.feature", name = "Register a public key")]
fn scenario_register_key(keypair_context: KeyPairContext) {
    drop(keypair_context);
}

#[scenario(
    path = "tests/features/key_pairs.feature",
    name = "Describe an existing key pair"
)]
fn scenario_describe_existing(keypair_context: KeyPairContext) {
    drop(keypair_context);
}

#[scenario(
    path = "tests/features/key_pairs.feature",
    name = "Describe a missing key pair"
)]
fn scenario_describe_missing(keypair_context: KeyPairContext) {
    drop(keypair_context);
}

#[scenario(path = "tests/features/key_pairs.feature", name = "Delete a key pair")]
fn scenario_delete_key(keypair_context: KeyPairContext) {
    drop(keypair_context);
}
