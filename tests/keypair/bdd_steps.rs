//! BDD step definitions for key-pair management.

use qingcloud_compute::ClientError;
use qingcloud_compute::service::{
    CreateKeyPairOutput, DeleteKeyPairsOutput, DescribeKeyPairsOutput, KeyPair,
};
use rstest_bdd_macros::{given, then, when};
use tokio::runtime::Runtime;

use super::test_helpers::{KeyPairContext, KeyPairOutcome};

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("assertion failed: {0}")]
    Assertion(String),
}

fn runtime() -> Result<Runtime, StepError> {
    Runtime::new().map_err(|err| StepError::Assertion(err.to_string()))
}

#[given("a key-pair client bound to zone \"{zone}\"")]
fn client_bound(
    mut keypair_context: KeyPairContext,
    zone: String,
) -> Result<KeyPairContext, StepError> {
    keypair_context.zone = zone.trim().to_owned();
    Ok(keypair_context)
}

#[given("the provider assigns key pair ID \"{id}\"")]
fn provider_assigns_id(
    keypair_context: KeyPairContext,
    id: String,
) -> Result<KeyPairContext, StepError> {
    keypair_context
        .services
        .push_create_key_pair(Ok(CreateKeyPairOutput {
            keypair_id: id.trim().to_owned(),
            ..CreateKeyPairOutput::default()
        }));
    Ok(keypair_context)
}

#[given("the provider lists key pair \"{id}\" named \"{name}\"")]
fn provider_lists_key_pair(
    keypair_context: KeyPairContext,
    id: String,
    name: String,
) -> Result<KeyPairContext, StepError> {
    keypair_context
        .services
        .push_describe_key_pairs(Ok(DescribeKeyPairsOutput {
            keypair_set: vec![KeyPair {
                keypair_id: id.trim().to_owned(),
                keypair_name: name.trim().to_owned(),
                ..KeyPair::default()
            }],
            ..DescribeKeyPairsOutput::default()
        }));
    Ok(keypair_context)
}

#[given("the provider lists no key pairs")]
fn provider_lists_nothing(keypair_context: KeyPairContext) -> Result<KeyPairContext, StepError> {
    keypair_context
        .services
        .push_describe_key_pairs(Ok(DescribeKeyPairsOutput::default()));
    Ok(keypair_context)
}

#[given("the provider accepts the deletion")]
fn provider_accepts_deletion(keypair_context: KeyPairContext) -> Result<KeyPairContext, StepError> {
    keypair_context
        .services
        .push_delete_key_pairs(Ok(DeleteKeyPairsOutput::default()));
    Ok(keypair_context)
}

#[when("I create a key pair named \"{name}\" with public key \"{public_key}\"")]
fn create_key_pair(
    mut keypair_context: KeyPairContext,
    name: String,
    public_key: String,
) -> Result<KeyPairContext, StepError> {
    let client = keypair_context.client();
    let result =
        runtime()?.block_on(async { client.create_key_pair(name.trim(), public_key.trim()).await });
    keypair_context.outcome = Some(match result {
        Ok(id) => KeyPairOutcome::Created(id),
        Err(err) => KeyPairOutcome::Failed(err),
    });
    Ok(keypair_context)
}

#[when("I describe key pair \"{id}\"")]
fn describe_key_pair(
    mut keypair_context: KeyPairContext,
    id: String,
) -> Result<KeyPairContext, StepError> {
    let client = keypair_context.client();
    let result = runtime()?.block_on(async { client.describe_key_pair(id.trim()).await });
    keypair_context.outcome = Some(match result {
        Ok(record) => KeyPairOutcome::Described(record),
        Err(err) => KeyPairOutcome::Failed(err),
    });
    Ok(keypair_context)
}

#[when("I delete key pair \"{id}\"")]
fn delete_key_pair(
    mut keypair_context: KeyPairContext,
    id: String,
) -> Result<KeyPairContext, StepError> {
    let client = keypair_context.client();
    let result = runtime()?.block_on(async { client.delete_key_pair(id.trim()).await });
    keypair_context.outcome = Some(match result {
        Ok(()) => KeyPairOutcome::Deleted,
        Err(err) => KeyPairOutcome::Failed(err),
    });
    Ok(keypair_context)
}

#[then("the creation returns key pair ID \"{id}\"")]
fn creation_returned_id(keypair_context: &KeyPairContext, id: String) -> Result<(), StepError> {
    match &keypair_context.outcome {
        Some(KeyPairOutcome::Created(actual)) if actual == id.trim() => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected created ID {id}, got {other:?}"
        ))),
    }
}

#[then("the creation request used mode \"{mode}\"")]
fn creation_used_mode(keypair_context: &KeyPairContext, mode: String) -> Result<(), StepError> {
    let input = keypair_context
        .services
        .last_create_key_pair_input()
        .ok_or_else(|| StepError::Assertion(String::from("no creation request was recorded")))?;
    if input.mode == mode.trim() {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected mode {mode}, got {}",
            input.mode
        )))
    }
}

#[then("the described key pair is named \"{name}\"")]
fn described_name(keypair_context: &KeyPairContext, name: String) -> Result<(), StepError> {
    match &keypair_context.outcome {
        Some(KeyPairOutcome::Described(record)) if record.keypair_name == name.trim() => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected key pair named {name}, got {other:?}"
        ))),
    }
}

#[then("the lookup fails with a not-found error")]
fn lookup_not_found(keypair_context: &KeyPairContext) -> Result<(), StepError> {
    match &keypair_context.outcome {
        Some(KeyPairOutcome::Failed(ClientError::KeyPairNotFound { .. })) => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected a not-found error, got {other:?}"
        ))),
    }
}

#[then("the deletion succeeds")]
fn deletion_succeeded(keypair_context: &KeyPairContext) -> Result<(), StepError> {
    match &keypair_context.outcome {
        Some(KeyPairOutcome::Deleted) => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected a completed deletion, got {other:?}"
        ))),
    }
}
