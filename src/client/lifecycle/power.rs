//! Start, stop, restart, and terminate operations.

use crate::client::{QingCloudClient, ensure_ok, require_job_id};
use crate::service::{InstanceActionInput, InstanceActionOutput, StopInstancesInput};

use super::super::{ClientError, InstanceStatus};

impl QingCloudClient {
    fn action_input(&self, instance_id: &str) -> InstanceActionInput {
        InstanceActionInput {
            zone: self.zone.clone(),
            instances: vec![instance_id.to_owned()],
        }
    }

    async fn finish_action(
        &self,
        action: &'static str,
        output: &InstanceActionOutput,
        instance_id: &str,
        target: InstanceStatus,
    ) -> Result<(), ClientError> {
        ensure_ok(action, output)?;
        let job_id = require_job_id(action, &output.job_id)?;
        self.wait_job(&job_id).await?;
        self.wait_instance_status(instance_id, target).await
    }

    /// Starts a stopped instance and blocks until it is running.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::JobFailed`] when the start job fails and
    /// [`ClientError::Timeout`] when a wait exhausts its budget.
    pub async fn start_instance(&self, instance_id: &str) -> Result<(), ClientError> {
        let input = self.action_input(instance_id);
        let output = self.instance.start_instances(&input).await?;
        self.finish_action("StartInstances", &output, instance_id, InstanceStatus::Running)
            .await
    }

    /// Stops a running instance and blocks until it is stopped. `force`
    /// becomes the provider's 0/1 request parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::JobFailed`] when the stop job fails and
    /// [`ClientError::Timeout`] when a wait exhausts its budget.
    pub async fn stop_instance(&self, instance_id: &str, force: bool) -> Result<(), ClientError> {
        let input = StopInstancesInput {
            zone: self.zone.clone(),
            instances: vec![instance_id.to_owned()],
            force: i64::from(force),
        };
        let output = self.instance.stop_instances(&input).await?;
        self.finish_action("StopInstances", &output, instance_id, InstanceStatus::Stopped)
            .await
    }

    /// Restarts an instance and blocks until it is running again.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::JobFailed`] when the restart job fails and
    /// [`ClientError::Timeout`] when a wait exhausts its budget.
    pub async fn restart_instance(&self, instance_id: &str) -> Result<(), ClientError> {
        let input = self.action_input(instance_id);
        let output = self.instance.restart_instances(&input).await?;
        self.finish_action(
            "RestartInstances",
            &output,
            instance_id,
            InstanceStatus::Running,
        )
        .await
    }

    /// Terminates an instance and blocks until the provider reports it
    /// terminated. A failed terminate leaves the instance in whatever state
    /// the provider reports; the caller must re-drive.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::JobFailed`] when the terminate job fails and
    /// [`ClientError::Timeout`] when a wait exhausts its budget.
    pub async fn terminate_instance(&self, instance_id: &str) -> Result<(), ClientError> {
        let input = self.action_input(instance_id);
        let output = self.instance.terminate_instances(&input).await?;
        self.finish_action(
            "TerminateInstances",
            &output,
            instance_id,
            InstanceStatus::Terminated,
        )
        .await
    }
}
