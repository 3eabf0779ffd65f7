//! BDD step definitions for zone and job listings.
//!
//! These steps exercise the service seam directly; listings carry no
//! polling, so the lifecycle client adds nothing here.

use std::future::Future;

use qingcloud_compute::service::{
    DescribeJobsInput, DescribeJobsOutput, DescribeZonesInput, DescribeZonesOutput,
    InstanceActionInput, InstanceActionOutput, InstanceService, Job, JobService, RunInstancesInput,
    RunInstancesOutput, ServiceError, ZoneRecord, ZoneService,
};
use rstest_bdd_macros::{given, then, when};
use tokio::runtime::Runtime;

use super::test_helpers::PlatformContext;

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("assertion failed: {0}")]
    Assertion(String),
}

fn block_on<T>(
    future: impl Future<Output = Result<T, ServiceError>>,
) -> Result<T, StepError> {
    let runtime = Runtime::new().map_err(|err| StepError::Assertion(err.to_string()))?;
    runtime
        .block_on(future)
        .map_err(|err| StepError::Assertion(err.to_string()))
}

fn zone_record(zone_id: &str) -> ZoneRecord {
    ZoneRecord {
        zone_id: zone_id.to_owned(),
        status: String::from("active"),
    }
}

fn job_record(job_id: &str, status: &str) -> Job {
    Job {
        job_id: job_id.to_owned(),
        status: status.to_owned(),
        ..Job::default()
    }
}

#[given("a platform context for zone \"{zone}\"")]
fn platform_bound(
    mut platform_context: PlatformContext,
    zone: String,
) -> Result<PlatformContext, StepError> {
    platform_context.zone = zone.trim().to_owned();
    Ok(platform_context)
}

#[given("the provider lists zones \"{first}\" and \"{second}\"")]
fn provider_lists_zones(
    platform_context: PlatformContext,
    first: String,
    second: String,
) -> Result<PlatformContext, StepError> {
    platform_context
        .services
        .push_describe_zones(Ok(DescribeZonesOutput {
            zone_set: vec![zone_record(first.trim()), zone_record(second.trim())],
            ..DescribeZonesOutput::default()
        }));
    Ok(platform_context)
}

#[given("the provider accepts a run submission with job \"{job}\"")]
fn provider_accepts_run(
    platform_context: PlatformContext,
    job: String,
) -> Result<PlatformContext, StepError> {
    platform_context
        .services
        .push_run_instances(Ok(RunInstancesOutput {
            job_id: job.trim().to_owned(),
            instances: vec![String::from("i-scripted")],
            ..RunInstancesOutput::default()
        }));
    Ok(platform_context)
}

#[given("the provider accepts a terminate submission with job \"{job}\"")]
fn provider_accepts_terminate(
    platform_context: PlatformContext,
    job: String,
) -> Result<PlatformContext, StepError> {
    platform_context
        .services
        .push_terminate_instances(Ok(InstanceActionOutput {
            job_id: job.trim().to_owned(),
            ..InstanceActionOutput::default()
        }));
    Ok(platform_context)
}

#[given("the provider lists jobs \"{first}\" and \"{second}\"")]
fn provider_lists_jobs(
    platform_context: PlatformContext,
    first: String,
    second: String,
) -> Result<PlatformContext, StepError> {
    platform_context
        .services
        .push_describe_jobs(Ok(DescribeJobsOutput {
            job_set: vec![
                job_record(first.trim(), "successful"),
                job_record(second.trim(), "successful"),
            ],
            ..DescribeJobsOutput::default()
        }));
    Ok(platform_context)
}

#[given("the provider lists job \"{job}\" with status \"{status}\"")]
fn provider_lists_job_status(
    platform_context: PlatformContext,
    job: String,
    status: String,
) -> Result<PlatformContext, StepError> {
    platform_context
        .services
        .push_describe_jobs(Ok(DescribeJobsOutput {
            job_set: vec![job_record(job.trim(), status.trim())],
            ..DescribeJobsOutput::default()
        }));
    Ok(platform_context)
}

#[when("I describe zones")]
fn describe_zones(mut platform_context: PlatformContext) -> Result<PlatformContext, StepError> {
    let input = DescribeZonesInput::default();
    let output = block_on(platform_context.services.describe_zones(&input))?;
    platform_context.zones = output.zone_set;
    Ok(platform_context)
}

#[when("I submit a run request and a terminate request")]
fn submit_run_and_terminate(
    mut platform_context: PlatformContext,
) -> Result<PlatformContext, StepError> {
    let run_input = RunInstancesInput {
        zone: platform_context.zone.clone(),
        image_id: String::from("xenial4x64a"),
        cpu: 1,
        memory: 1024,
        count: 1,
        login_mode: String::from("keypair"),
        login_keypair: String::from("kp-1234"),
        instance_name: String::from("acceptance"),
        vxnets: vec![String::from("vxnet-0")],
    };
    let run = block_on(platform_context.services.run_instances(&run_input))?;
    let terminate_input = InstanceActionInput {
        zone: platform_context.zone.clone(),
        instances: run.instances.clone(),
    };
    let terminate = block_on(
        platform_context
            .services
            .terminate_instances(&terminate_input),
    )?;
    platform_context.submitted_jobs = vec![run.job_id, terminate.job_id];
    Ok(platform_context)
}

#[when("I describe all jobs")]
fn describe_all_jobs(mut platform_context: PlatformContext) -> Result<PlatformContext, StepError> {
    let input = DescribeJobsInput {
        zone: platform_context.zone.clone(),
        jobs: Vec::new(),
    };
    let output = block_on(platform_context.services.describe_jobs(&input))?;
    platform_context.listed_jobs = output.job_set;
    Ok(platform_context)
}

#[when("I describe job \"{job}\"")]
fn describe_one_job(
    mut platform_context: PlatformContext,
    job: String,
) -> Result<PlatformContext, StepError> {
    let input = DescribeJobsInput {
        zone: platform_context.zone.clone(),
        jobs: vec![job.trim().to_owned()],
    };
    let output = block_on(platform_context.services.describe_jobs(&input))?;
    platform_context.listed_jobs = output.job_set;
    Ok(platform_context)
}

#[then("at least \"{count}\" zone is listed")]
fn zones_listed(platform_context: &PlatformContext, count: usize) -> Result<(), StepError> {
    if platform_context.zones.len() >= count {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected at least {count} zones, got {}",
            platform_context.zones.len()
        )))
    }
}

#[then("the zone I am using is listed")]
fn bound_zone_listed(platform_context: &PlatformContext) -> Result<(), StepError> {
    if platform_context
        .zones
        .iter()
        .any(|zone| zone.zone_id == platform_context.zone)
    {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "zone {} is not in the listing",
            platform_context.zone
        )))
    }
}

#[then("each submission carried a job ID")]
fn submissions_carried_jobs(platform_context: &PlatformContext) -> Result<(), StepError> {
    if platform_context.submitted_jobs.len() == 2
        && platform_context.submitted_jobs.iter().all(|id| !id.is_empty())
    {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected two non-empty job IDs, got {:?}",
            platform_context.submitted_jobs
        )))
    }
}

#[then("the job listing contains both submitted jobs")]
fn listing_contains_submissions(platform_context: &PlatformContext) -> Result<(), StepError> {
    for submitted in &platform_context.submitted_jobs {
        if !platform_context
            .listed_jobs
            .iter()
            .any(|job| &job.job_id == submitted)
        {
            return Err(StepError::Assertion(format!(
                "job {submitted} is missing from the listing"
            )));
        }
    }
    Ok(())
}

#[then("the job status is \"{status}\"")]
fn job_status_is(platform_context: &PlatformContext, status: String) -> Result<(), StepError> {
    match platform_context.listed_jobs.first() {
        Some(job) if job.status == status.trim() => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected a job with status {status}, got {other:?}"
        ))),
    }
}
