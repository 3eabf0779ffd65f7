//! Wire-level inputs, outputs, and records for the IaaS API.
//!
//! Field names follow the provider's JSON schema so outputs deserialize
//! without renames. Every output carries the embedded `ret_code`/`message`
//! pair; [`ApiOutput`] exposes it uniformly so callers can distinguish
//! service-level failures from transport errors.

use serde::Deserialize;

/// Uniform access to the service-level error embedded in every response.
pub trait ApiOutput {
    /// Provider return code; zero means success.
    fn ret_code(&self) -> i64;
    /// Provider message accompanying a non-zero return code.
    fn message(&self) -> Option<&str>;
}

macro_rules! api_output {
    ($($output:ident),+ $(,)?) => {
        $(
            impl ApiOutput for $output {
                fn ret_code(&self) -> i64 {
                    self.ret_code
                }

                fn message(&self) -> Option<&str> {
                    self.message.as_deref()
                }
            }
        )+
    };
}

/// Parameters for `RunInstances`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunInstancesInput {
    /// Zone the instance is created in.
    pub zone: String,
    /// Image the instance boots from.
    pub image_id: String,
    /// Number of virtual CPUs.
    pub cpu: u32,
    /// Memory in megabytes.
    pub memory: u32,
    /// Number of instances to create.
    pub count: u32,
    /// Login mode; the client always requests `keypair`.
    pub login_mode: String,
    /// Key pair injected for login.
    pub login_keypair: String,
    /// Display name for the instance.
    pub instance_name: String,
    /// Private networks to join.
    pub vxnets: Vec<String>,
}

/// Response to `RunInstances`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct RunInstancesOutput {
    /// Provider return code.
    #[serde(default)]
    pub ret_code: i64,
    /// Provider message for non-zero return codes.
    #[serde(default)]
    pub message: Option<String>,
    /// Job tracking the creation.
    #[serde(default)]
    pub job_id: String,
    /// IDs of the created instances.
    #[serde(default)]
    pub instances: Vec<String>,
}

/// Parameters for `DescribeInstances`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DescribeInstancesInput {
    /// Zone the lookup is scoped to.
    pub zone: String,
    /// Instance IDs to read.
    pub instances: Vec<String>,
}

/// Response to `DescribeInstances`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct DescribeInstancesOutput {
    /// Provider return code.
    #[serde(default)]
    pub ret_code: i64,
    /// Provider message for non-zero return codes.
    #[serde(default)]
    pub message: Option<String>,
    /// Matching instance records; empty when nothing matched.
    #[serde(default)]
    pub instance_set: Vec<Instance>,
}

/// Parameters shared by `StartInstances`, `RestartInstances`, and
/// `TerminateInstances`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceActionInput {
    /// Zone the action is scoped to.
    pub zone: String,
    /// Instance IDs the action applies to.
    pub instances: Vec<String>,
}

/// Parameters for `StopInstances`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StopInstancesInput {
    /// Zone the action is scoped to.
    pub zone: String,
    /// Instance IDs the action applies to.
    pub instances: Vec<String>,
    /// Forced-stop flag encoded as the provider's 0/1 parameter.
    pub force: i64,
}

/// Response to the instance action submissions.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct InstanceActionOutput {
    /// Provider return code.
    #[serde(default)]
    pub ret_code: i64,
    /// Provider message for non-zero return codes.
    #[serde(default)]
    pub message: Option<String>,
    /// Job tracking the action.
    #[serde(default)]
    pub job_id: String,
}

/// Parameters for `DescribeJobs`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DescribeJobsInput {
    /// Zone the lookup is scoped to.
    pub zone: String,
    /// Job IDs to read; empty lists every visible job.
    pub jobs: Vec<String>,
}

/// Response to `DescribeJobs`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct DescribeJobsOutput {
    /// Provider return code.
    #[serde(default)]
    pub ret_code: i64,
    /// Provider message for non-zero return codes.
    #[serde(default)]
    pub message: Option<String>,
    /// Matching job records.
    #[serde(default)]
    pub job_set: Vec<Job>,
}

/// Parameters for `CreateKeyPair`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateKeyPairInput {
    /// Zone the key pair is registered in.
    pub zone: String,
    /// Display name for the key pair.
    pub keypair_name: String,
    /// Registration mode; the client always passes `user`.
    pub mode: String,
    /// Public key material to register.
    pub public_key: String,
}

/// Response to `CreateKeyPair`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct CreateKeyPairOutput {
    /// Provider return code.
    #[serde(default)]
    pub ret_code: i64,
    /// Provider message for non-zero return codes.
    #[serde(default)]
    pub message: Option<String>,
    /// ID assigned to the new key pair.
    #[serde(default)]
    pub keypair_id: String,
}

/// Parameters for `DescribeKeyPairs`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DescribeKeyPairsInput {
    /// Zone the lookup is scoped to.
    pub zone: String,
    /// Key-pair IDs to read.
    pub keypairs: Vec<String>,
}

/// Response to `DescribeKeyPairs`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct DescribeKeyPairsOutput {
    /// Provider return code.
    #[serde(default)]
    pub ret_code: i64,
    /// Provider message for non-zero return codes.
    #[serde(default)]
    pub message: Option<String>,
    /// Matching key-pair records; empty when nothing matched.
    #[serde(default)]
    pub keypair_set: Vec<KeyPair>,
}

/// Parameters for `DeleteKeyPairs`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeleteKeyPairsInput {
    /// Zone the deletion is scoped to.
    pub zone: String,
    /// Key-pair IDs to delete.
    pub keypairs: Vec<String>,
}

/// Response to `DeleteKeyPairs`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct DeleteKeyPairsOutput {
    /// Provider return code.
    #[serde(default)]
    pub ret_code: i64,
    /// Provider message for non-zero return codes.
    #[serde(default)]
    pub message: Option<String>,
    /// IDs of the deleted key pairs.
    #[serde(default)]
    pub keypairs: Vec<String>,
}

/// Parameters for `DescribeZones`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DescribeZonesInput {
    /// Optional status filter (for example `active`).
    pub status: Vec<String>,
}

/// Response to `DescribeZones`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct DescribeZonesOutput {
    /// Provider return code.
    #[serde(default)]
    pub ret_code: i64,
    /// Provider message for non-zero return codes.
    #[serde(default)]
    pub message: Option<String>,
    /// Zones visible to the caller.
    #[serde(default)]
    pub zone_set: Vec<ZoneRecord>,
}

api_output!(
    RunInstancesOutput,
    DescribeInstancesOutput,
    InstanceActionOutput,
    DescribeJobsOutput,
    CreateKeyPairOutput,
    DescribeKeyPairsOutput,
    DeleteKeyPairsOutput,
    DescribeZonesOutput,
);

/// Instance record as reported by `DescribeInstances`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Instance {
    /// Provider instance ID.
    pub instance_id: String,
    /// Display name.
    #[serde(default)]
    pub instance_name: String,
    /// Primary status (`pending`, `running`, `stopped`, `suspended`,
    /// `terminated`, or `ceased`).
    #[serde(default)]
    pub status: String,
    /// Non-empty while a state change is still in flight, even though the
    /// primary status already shows a value.
    #[serde(default)]
    pub transition_status: String,
    /// Private networks the instance has joined.
    #[serde(default)]
    pub vxnets: Vec<InstanceVxNet>,
    /// Key pairs authorised for login.
    #[serde(default)]
    pub keypair_ids: Vec<String>,
}

impl Instance {
    /// Private IP on the first joined network, once assigned.
    #[must_use]
    pub fn private_ip(&self) -> Option<&str> {
        self.vxnets
            .first()
            .map(|vxnet| vxnet.private_ip.as_str())
            .filter(|ip| !ip.is_empty())
    }
}

/// Network attachment embedded in an [`Instance`] record.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct InstanceVxNet {
    /// Network ID.
    #[serde(default)]
    pub vxnet_id: String,
    /// Private IP assigned on the network; empty until allocation completes.
    #[serde(default)]
    pub private_ip: String,
}

/// Job record as reported by `DescribeJobs`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Job {
    /// Provider job ID.
    pub job_id: String,
    /// Job status; `successful` and `failed` are terminal, anything else is
    /// still pending.
    #[serde(default)]
    pub status: String,
    /// Action the job was submitted for.
    #[serde(default)]
    pub job_action: String,
}

/// Key-pair record as reported by `DescribeKeyPairs`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct KeyPair {
    /// Provider key-pair ID.
    pub keypair_id: String,
    /// Display name.
    #[serde(default)]
    pub keypair_name: String,
    /// Encryption method reported by the provider.
    #[serde(default)]
    pub encrypt_method: String,
}

/// Zone record as reported by `DescribeZones`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct ZoneRecord {
    /// Provider zone ID.
    pub zone_id: String,
    /// Zone status (for example `active`).
    #[serde(default)]
    pub status: String,
}
