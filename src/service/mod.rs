//! Service seam for the QingCloud IaaS API.
//!
//! The client never talks to the wire directly; it drives the traits below.
//! [`HttpService`] implements them over the signed GET protocol, and
//! [`crate::test_support::ScriptedServices`] implements them for tests.

mod error;
mod http;
mod types;

use std::future::Future;
use std::pin::Pin;

pub use error::ServiceError;
pub use http::HttpService;
pub use types::{
    ApiOutput, CreateKeyPairInput, CreateKeyPairOutput, DeleteKeyPairsInput, DeleteKeyPairsOutput,
    DescribeInstancesInput, DescribeInstancesOutput, DescribeJobsInput, DescribeJobsOutput,
    DescribeKeyPairsInput, DescribeKeyPairsOutput, DescribeZonesInput, DescribeZonesOutput,
    Instance, InstanceActionInput, InstanceActionOutput, InstanceVxNet, Job, KeyPair,
    RunInstancesInput, RunInstancesOutput, StopInstancesInput, ZoneRecord,
};

/// Future returned by service operations.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'a>>;

/// Instance sub-service: submission of lifecycle actions and reads.
pub trait InstanceService: Send + Sync {
    /// Submits a `RunInstances` request.
    fn run_instances<'a>(
        &'a self,
        input: &'a RunInstancesInput,
    ) -> ServiceFuture<'a, RunInstancesOutput>;

    /// Reads the current state of the requested instances.
    fn describe_instances<'a>(
        &'a self,
        input: &'a DescribeInstancesInput,
    ) -> ServiceFuture<'a, DescribeInstancesOutput>;

    /// Submits a `StartInstances` request.
    fn start_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput>;

    /// Submits a `StopInstances` request.
    fn stop_instances<'a>(
        &'a self,
        input: &'a StopInstancesInput,
    ) -> ServiceFuture<'a, InstanceActionOutput>;

    /// Submits a `RestartInstances` request.
    fn restart_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput>;

    /// Submits a `TerminateInstances` request.
    fn terminate_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput>;
}

/// Job sub-service: reads over asynchronous provider jobs.
pub trait JobService: Send + Sync {
    /// Reads job records, optionally filtered by job ID.
    fn describe_jobs<'a>(
        &'a self,
        input: &'a DescribeJobsInput,
    ) -> ServiceFuture<'a, DescribeJobsOutput>;
}

/// Key-pair sub-service. All mutations are synchronous on the provider side.
pub trait KeyPairService: Send + Sync {
    /// Registers a public key under the given name.
    fn create_key_pair<'a>(
        &'a self,
        input: &'a CreateKeyPairInput,
    ) -> ServiceFuture<'a, CreateKeyPairOutput>;

    /// Reads key-pair records by ID.
    fn describe_key_pairs<'a>(
        &'a self,
        input: &'a DescribeKeyPairsInput,
    ) -> ServiceFuture<'a, DescribeKeyPairsOutput>;

    /// Deletes key pairs by ID.
    fn delete_key_pairs<'a>(
        &'a self,
        input: &'a DeleteKeyPairsInput,
    ) -> ServiceFuture<'a, DeleteKeyPairsOutput>;
}

/// Zone listing, used by acceptance scenarios to verify the bound zone.
pub trait ZoneService: Send + Sync {
    /// Lists the zones visible to the caller.
    fn describe_zones<'a>(
        &'a self,
        input: &'a DescribeZonesInput,
    ) -> ServiceFuture<'a, DescribeZonesOutput>;
}
