//! Zone-scoped client for the QingCloud compute API.

mod error;
mod keypair;
mod lifecycle;
mod request;
mod types;

use std::sync::Arc;
use std::time::Duration;

use crate::config::QingCloudConfig;
use crate::service::{ApiOutput, HttpService, InstanceService, JobService, KeyPairService};

pub use error::ClientError;
pub use request::{RunInstanceRequest, RunInstanceRequestBuilder};
pub use types::InstanceStatus;

const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Client dispatching lifecycle and key-pair operations to the provider.
///
/// The handle is immutable after construction and safe to share across
/// tasks; concurrent calls against the same resource identifier are not
/// coordinated and may race at the provider level.
#[derive(Clone)]
pub struct QingCloudClient {
    instance: Arc<dyn InstanceService>,
    job: Arc<dyn JobService>,
    keypair: Arc<dyn KeyPairService>,
    zone: String,
    op_timeout: Duration,
    poll_interval: Duration,
}

impl QingCloudClient {
    /// Constructs a client from configuration, wiring the signed HTTP
    /// transport for all three sub-services.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the configuration fails
    /// validation.
    pub fn new(config: &QingCloudConfig) -> Result<Self, ClientError> {
        let http = Arc::new(HttpService::new(config)?);
        Ok(Self::with_services(
            http.clone(),
            http.clone(),
            http,
            &config.default_zone,
            Duration::from_secs(config.op_timeout_secs),
        ))
    }

    /// Constructs a client from explicit service handles.
    ///
    /// This is the seam for alternative transports and for tests driving the
    /// client against scripted services.
    #[must_use]
    pub fn with_services(
        instance: Arc<dyn InstanceService>,
        job: Arc<dyn JobService>,
        keypair: Arc<dyn KeyPairService>,
        zone: &str,
        op_timeout: Duration,
    ) -> Self {
        Self {
            instance,
            job,
            keypair,
            zone: zone.to_owned(),
            op_timeout,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Overrides the poll interval. The attempt budget for every wait loop
    /// is derived from the operation timeout and this interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Zone every request from this client is scoped to.
    #[must_use]
    pub const fn zone(&self) -> &str {
        self.zone.as_str()
    }
}

pub(crate) fn ensure_ok(action: &'static str, output: &impl ApiOutput) -> Result<(), ClientError> {
    let ret_code = output.ret_code();
    if ret_code == 0 {
        return Ok(());
    }
    Err(ClientError::Api {
        action,
        ret_code,
        message: output.message().unwrap_or_default().to_owned(),
    })
}

pub(crate) fn require_job_id(action: &'static str, job_id: &str) -> Result<String, ClientError> {
    if job_id.is_empty() {
        return Err(ClientError::MissingJobId { action });
    }
    Ok(job_id.to_owned())
}
