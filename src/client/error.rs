//! Error types for the QingCloud client.

use crate::config::ConfigError;
use crate::service::ServiceError;
use thiserror::Error;

/// Errors raised by [`crate::QingCloudClient`] operations.
///
/// Every error is terminal for the call that produced it; the bounded
/// status-polling loops are the only retries the client performs.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ClientError {
    /// Raised when the client configuration is incomplete.
    #[error("configuration error: {0}")]
    Config(String),
    /// Raised when a request is missing a required field.
    #[error("invalid run instance request: {0}")]
    Validation(String),
    /// Transport or decode failure from the underlying service call.
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Service-level error embedded in an otherwise successful response.
    #[error("{action} failed with ret_code {ret_code}: {message}")]
    Api {
        /// Provider action that was submitted.
        action: &'static str,
        /// Non-zero provider return code.
        ret_code: i64,
        /// Message accompanying the return code.
        message: String,
    },
    /// Raised when a describe returns no record for the requested instance.
    #[error("instance {instance_id} not found")]
    InstanceNotFound {
        /// Instance identifier that was looked up.
        instance_id: String,
    },
    /// Raised when a describe returns no record for the requested key pair.
    #[error("key pair {keypair_id} not found")]
    KeyPairNotFound {
        /// Key-pair identifier that was looked up.
        keypair_id: String,
    },
    /// Raised when a submitted job disappears from the job listing.
    #[error("job {job_id} not found")]
    JobNotFound {
        /// Job identifier that was looked up.
        job_id: String,
    },
    /// Raised when a submission response carries no job ID.
    #[error("{action} response carried no job ID")]
    MissingJobId {
        /// Provider action that was submitted.
        action: &'static str,
    },
    /// Raised when a creation response lists zero created instances.
    #[error("run instances response listed no created instances")]
    NoInstancesCreated,
    /// Raised when a provider job reaches the `failed` state.
    #[error("job {job_id} failed")]
    JobFailed {
        /// Identifier of the failed job.
        job_id: String,
    },
    /// Raised when a wait loop exhausts its attempt budget.
    #[error("timeout waiting for {action} on {resource_id}")]
    Timeout {
        /// Wait that ran out of attempts.
        action: &'static str,
        /// Resource the wait was watching.
        resource_id: String,
    },
}

impl From<ConfigError> for ClientError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value.to_string())
    }
}
