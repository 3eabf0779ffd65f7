//! Poll-until-condition primitive and the wait loops built on it.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::client::types::{JOB_STATUS_FAILED, JOB_STATUS_SUCCESSFUL};
use crate::client::{QingCloudClient, ensure_ok};
use crate::service::{DescribeJobsInput, Instance};

use super::super::{ClientError, InstanceStatus};

/// Invokes `probe` up to `max_attempts` times with a fixed delay between
/// attempts. Returns the probe's value as soon as it produces one, returns
/// immediately on any probe error, and reports `on_timeout` once the
/// attempt budget is exhausted. No backoff, no jitter.
pub(crate) async fn poll_until<T, F, Fut>(
    mut probe: F,
    max_attempts: u64,
    interval: Duration,
    on_timeout: impl FnOnce() -> ClientError,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, ClientError>>,
{
    for _ in 0..max_attempts {
        if let Some(value) = probe().await? {
            return Ok(value);
        }
        sleep(interval).await;
    }
    Err(on_timeout())
}

impl QingCloudClient {
    /// Whole number of poll intervals that fit in the operation timeout. A
    /// timeout shorter than the interval yields a zero budget, so the wait
    /// reports a timeout without probing at all.
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "the attempt budget is the whole number of poll intervals in the timeout"
    )]
    pub(in crate::client) fn attempt_budget(&self) -> u64 {
        let interval = self.poll_interval.as_millis().max(1);
        u64::try_from(self.op_timeout.as_millis() / interval).unwrap_or(u64::MAX)
    }

    pub(in crate::client) async fn wait_job(&self, job_id: &str) -> Result<(), ClientError> {
        debug!(job_id, "waiting for job to finish");
        poll_until(
            || async move {
                let input = DescribeJobsInput {
                    zone: self.zone.clone(),
                    jobs: vec![job_id.to_owned()],
                };
                let output = self.job.describe_jobs(&input).await?;
                ensure_ok("DescribeJobs", &output)?;
                let Some(job) = output.job_set.into_iter().next() else {
                    return Err(ClientError::JobNotFound {
                        job_id: job_id.to_owned(),
                    });
                };
                match job.status.as_str() {
                    JOB_STATUS_SUCCESSFUL => Ok(Some(())),
                    JOB_STATUS_FAILED => Err(ClientError::JobFailed {
                        job_id: job_id.to_owned(),
                    }),
                    _ => Ok(None),
                }
            },
            self.attempt_budget(),
            self.poll_interval,
            || ClientError::Timeout {
                action: "wait_job",
                resource_id: job_id.to_owned(),
            },
        )
        .await
    }

    /// Blocks until the instance reports `status` with no transition in
    /// flight, or the attempt budget runs out.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Timeout`] when the budget is exhausted, and
    /// propagates describe failures from each probe.
    pub async fn wait_instance_status(
        &self,
        instance_id: &str,
        status: InstanceStatus,
    ) -> Result<(), ClientError> {
        debug!(instance_id, status = %status, "waiting for instance status");
        poll_until(
            || async move {
                let instance = self.describe_instance(instance_id).await?;
                if instance.status == status.as_str() && instance.transition_status.is_empty() {
                    debug!(instance_id, status = %status, "instance reached status");
                    return Ok(Some(()));
                }
                Ok(None)
            },
            self.attempt_budget(),
            self.poll_interval,
            || ClientError::Timeout {
                action: "wait_instance_status",
                resource_id: instance_id.to_owned(),
            },
        )
        .await
    }

    pub(in crate::client) async fn wait_instance_network(
        &self,
        instance_id: &str,
    ) -> Result<Instance, ClientError> {
        debug!(instance_id, "waiting for private IP assignment");
        poll_until(
            || async move {
                let instance = self.describe_instance(instance_id).await?;
                let Some(ip) = instance.private_ip() else {
                    return Ok(None);
                };
                debug!(instance_id, ip, "instance obtained private IP");
                Ok(Some(instance))
            },
            self.attempt_budget(),
            self.poll_interval,
            || ClientError::Timeout {
                action: "wait_instance_network",
                resource_id: instance_id.to_owned(),
            },
        )
        .await
    }
}
