//! Signed HTTP transport implementing the service seam.
//!
//! Every call is a GET against the IaaS endpoint with sorted,
//! percent-encoded query parameters and a signature-version-1 HMAC-SHA256
//! signature over `GET\n/iaas/\n<query>`.

use std::sync::LazyLock;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;

use crate::config::{ConfigError, QingCloudConfig};

use super::error::ServiceError;
use super::types::{
    CreateKeyPairInput, CreateKeyPairOutput, DeleteKeyPairsInput, DeleteKeyPairsOutput,
    DescribeInstancesInput, DescribeInstancesOutput, DescribeJobsInput, DescribeJobsOutput,
    DescribeKeyPairsInput, DescribeKeyPairsOutput, DescribeZonesInput, DescribeZonesOutput,
    InstanceActionInput, InstanceActionOutput, RunInstancesInput, RunInstancesOutput,
    StopInstancesInput,
};
use super::{InstanceService, JobService, KeyPairService, ServiceFuture, ZoneService};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const SIGNATURE_PATH: &str = "/iaas/";
const API_VERSION: &str = "1";

type HmacSha256 = Hmac<Sha256>;

static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Transport handle implementing every service trait over HTTPS.
#[derive(Clone, Debug)]
pub struct HttpService {
    endpoint: String,
    access_key_id: String,
    secret_access_key: String,
}

impl HttpService {
    /// Constructs a transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when the configuration is
    /// incomplete.
    pub fn new(config: &QingCloudConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            access_key_id: config.access_key_id.clone(),
            secret_access_key: config.secret_access_key.clone(),
        })
    }

    fn common_params(&self, action: &str) -> Vec<(String, String)> {
        vec![
            (String::from("action"), action.to_owned()),
            (String::from("access_key_id"), self.access_key_id.clone()),
            (
                String::from("time_stamp"),
                Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            ),
            (String::from("signature_method"), String::from("HmacSHA256")),
            (String::from("signature_version"), String::from("1")),
            (String::from("version"), String::from(API_VERSION)),
        ]
    }

    fn signed_query(&self, mut params: Vec<(String, String)>) -> Result<String, ServiceError> {
        params.sort();
        let canonical = params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        let string_to_sign = format!("GET\n{SIGNATURE_PATH}\n{canonical}");
        let mut mac = HmacSha256::new_from_slice(self.secret_access_key.as_bytes())
            .map_err(ServiceError::transport)?;
        mac.update(string_to_sign.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());
        Ok(format!(
            "{canonical}&signature={}",
            urlencoding::encode(&signature)
        ))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        action: &str,
        extra: Vec<(String, String)>,
    ) -> Result<T, ServiceError> {
        let mut params = self.common_params(action);
        params.extend(extra);
        let query = self.signed_query(params)?;
        let url = format!("{}?{query}", self.endpoint);

        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(ServiceError::transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ServiceError::transport)?;

        if !status.is_success() {
            return Err(ServiceError::Transport {
                message: format!("HTTP {status}: {}", String::from_utf8_lossy(&body)),
            });
        }

        serde_json::from_slice(&body).map_err(ServiceError::decode)
    }
}

fn push_indexed(params: &mut Vec<(String, String)>, name: &str, values: &[String]) {
    for (position, value) in values.iter().enumerate() {
        params.push((format!("{name}.{}", position + 1), value.clone()));
    }
}

fn run_instances_params(input: &RunInstancesInput) -> Vec<(String, String)> {
    let mut params = vec![
        (String::from("zone"), input.zone.clone()),
        (String::from("image_id"), input.image_id.clone()),
        (String::from("cpu"), input.cpu.to_string()),
        (String::from("memory"), input.memory.to_string()),
        (String::from("count"), input.count.to_string()),
        (String::from("login_mode"), input.login_mode.clone()),
        (String::from("login_keypair"), input.login_keypair.clone()),
    ];
    if !input.instance_name.is_empty() {
        params.push((String::from("instance_name"), input.instance_name.clone()));
    }
    push_indexed(&mut params, "vxnets", &input.vxnets);
    params
}

fn instance_action_params(input: &InstanceActionInput) -> Vec<(String, String)> {
    let mut params = vec![(String::from("zone"), input.zone.clone())];
    push_indexed(&mut params, "instances", &input.instances);
    params
}

fn stop_instances_params(input: &StopInstancesInput) -> Vec<(String, String)> {
    let mut params = vec![
        (String::from("zone"), input.zone.clone()),
        (String::from("force"), input.force.to_string()),
    ];
    push_indexed(&mut params, "instances", &input.instances);
    params
}

impl InstanceService for HttpService {
    fn run_instances<'a>(
        &'a self,
        input: &'a RunInstancesInput,
    ) -> ServiceFuture<'a, RunInstancesOutput> {
        Box::pin(async move { self.get("RunInstances", run_instances_params(input)).await })
    }

    fn describe_instances<'a>(
        &'a self,
        input: &'a DescribeInstancesInput,
    ) -> ServiceFuture<'a, DescribeInstancesOutput> {
        Box::pin(async move {
            let mut params = vec![(String::from("zone"), input.zone.clone())];
            push_indexed(&mut params, "instances", &input.instances);
            self.get("DescribeInstances", params).await
        })
    }

    fn start_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput> {
        Box::pin(async move { self.get("StartInstances", instance_action_params(input)).await })
    }

    fn stop_instances<'a>(
        &'a self,
        input: &'a StopInstancesInput,
    ) -> ServiceFuture<'a, InstanceActionOutput> {
        Box::pin(async move { self.get("StopInstances", stop_instances_params(input)).await })
    }

    fn restart_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput> {
        Box::pin(async move {
            self.get("RestartInstances", instance_action_params(input))
                .await
        })
    }

    fn terminate_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput> {
        Box::pin(async move {
            self.get("TerminateInstances", instance_action_params(input))
                .await
        })
    }
}

impl JobService for HttpService {
    fn describe_jobs<'a>(
        &'a self,
        input: &'a DescribeJobsInput,
    ) -> ServiceFuture<'a, DescribeJobsOutput> {
        Box::pin(async move {
            let mut params = vec![(String::from("zone"), input.zone.clone())];
            push_indexed(&mut params, "jobs", &input.jobs);
            self.get("DescribeJobs", params).await
        })
    }
}

impl KeyPairService for HttpService {
    fn create_key_pair<'a>(
        &'a self,
        input: &'a CreateKeyPairInput,
    ) -> ServiceFuture<'a, CreateKeyPairOutput> {
        Box::pin(async move {
            let params = vec![
                (String::from("zone"), input.zone.clone()),
                (String::from("keypair_name"), input.keypair_name.clone()),
                (String::from("mode"), input.mode.clone()),
                (String::from("public_key"), input.public_key.clone()),
            ];
            self.get("CreateKeyPair", params).await
        })
    }

    fn describe_key_pairs<'a>(
        &'a self,
        input: &'a DescribeKeyPairsInput,
    ) -> ServiceFuture<'a, DescribeKeyPairsOutput> {
        Box::pin(async move {
            let mut params = vec![(String::from("zone"), input.zone.clone())];
            push_indexed(&mut params, "keypairs", &input.keypairs);
            self.get("DescribeKeyPairs", params).await
        })
    }

    fn delete_key_pairs<'a>(
        &'a self,
        input: &'a DeleteKeyPairsInput,
    ) -> ServiceFuture<'a, DeleteKeyPairsOutput> {
        Box::pin(async move {
            let mut params = vec![(String::from("zone"), input.zone.clone())];
            push_indexed(&mut params, "keypairs", &input.keypairs);
            self.get("DeleteKeyPairs", params).await
        })
    }
}

impl ZoneService for HttpService {
    fn describe_zones<'a>(
        &'a self,
        input: &'a DescribeZonesInput,
    ) -> ServiceFuture<'a, DescribeZonesOutput> {
        Box::pin(async move {
            let mut params = Vec::new();
            push_indexed(&mut params, "status", &input.status);
            self.get("DescribeZones", params).await
        })
    }
}
