//! Instance creation and synchronous reads.

use tracing::debug;

use crate::client::{QingCloudClient, ensure_ok, require_job_id};
use crate::service::{DescribeInstancesInput, Instance, RunInstancesInput};

use super::super::{ClientError, InstanceStatus, RunInstanceRequest};

impl QingCloudClient {
    /// Creates one instance and blocks until it is running with a private IP.
    ///
    /// The returned record is fully populated; in particular its private
    /// network address is never empty.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoInstancesCreated`] when the submission lists
    /// zero created instances, [`ClientError::MissingJobId`] when it carries
    /// no job ID, [`ClientError::JobFailed`] when the creation job fails, and
    /// [`ClientError::Timeout`] when any wait exhausts its budget.
    pub async fn run_instance(
        &self,
        request: &RunInstanceRequest,
    ) -> Result<Instance, ClientError> {
        request.validate()?;
        let input = RunInstancesInput {
            zone: self.zone.clone(),
            image_id: request.image_id.clone(),
            cpu: request.cpu,
            memory: request.memory,
            count: 1,
            login_mode: String::from("keypair"),
            login_keypair: request.login_key_pair.clone(),
            instance_name: request.instance_name.clone(),
            vxnets: vec![request.vx_net.clone()],
        };

        let output = self.instance.run_instances(&input).await?;
        ensure_ok("RunInstances", &output)?;
        let Some(instance_id) = output.instances.first().cloned() else {
            return Err(ClientError::NoInstancesCreated);
        };
        let job_id = require_job_id("RunInstances", &output.job_id)?;
        debug!(instance_id, job_id, "instance creation submitted");

        self.wait_job(&job_id).await?;
        self.wait_instance_status(&instance_id, InstanceStatus::Running)
            .await?;
        self.wait_instance_network(&instance_id).await
    }

    /// Reads the current record for one instance. Synchronous; no polling.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InstanceNotFound`] when the result set is
    /// empty, distinct from transport failures.
    pub async fn describe_instance(&self, instance_id: &str) -> Result<Instance, ClientError> {
        let input = DescribeInstancesInput {
            zone: self.zone.clone(),
            instances: vec![instance_id.to_owned()],
        };
        let output = self.instance.describe_instances(&input).await?;
        ensure_ok("DescribeInstances", &output)?;
        output
            .instance_set
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::InstanceNotFound {
                instance_id: instance_id.to_owned(),
            })
    }
}
