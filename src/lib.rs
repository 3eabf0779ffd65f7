//! Client library for the QingCloud compute (IaaS) API.
//!
//! The crate exposes a narrow, zone-scoped client covering the instance
//! lifecycle (run → wait for a private IP → start/stop/restart/terminate)
//! and key-pair management. Asynchronous provider operations return a job
//! ID; the client blocks on a shared poll-until-condition primitive until
//! the job and the target resource settle.

pub mod client;
pub mod config;
pub mod service;
pub mod test_support;

pub use client::{
    ClientError, InstanceStatus, QingCloudClient, RunInstanceRequest, RunInstanceRequestBuilder,
};
pub use config::{ConfigError, QingCloudConfig};
pub use service::{
    HttpService, Instance, InstanceService, Job, JobService, KeyPair, KeyPairService,
    ServiceError, ZoneRecord, ZoneService,
};
