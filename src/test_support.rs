//! Test support utilities shared across unit and integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::service::{
    CreateKeyPairInput, CreateKeyPairOutput, DeleteKeyPairsInput, DeleteKeyPairsOutput,
    DescribeInstancesInput, DescribeInstancesOutput, DescribeJobsInput, DescribeJobsOutput,
    DescribeKeyPairsInput, DescribeKeyPairsOutput, DescribeZonesInput, DescribeZonesOutput,
    InstanceActionInput, InstanceActionOutput, InstanceService, JobService, KeyPairService,
    RunInstancesInput, RunInstancesOutput, ServiceError, ServiceFuture, StopInstancesInput,
    ZoneService,
};

/// Scripted implementation of every service trait, returning pre-seeded
/// outputs in FIFO order and recording the inputs of each call.
///
/// An exhausted script surfaces as a transport error so a wait loop that
/// probes more often than expected fails loudly instead of hanging.
#[derive(Clone, Debug, Default)]
pub struct ScriptedServices {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    run_instances: VecDeque<Result<RunInstancesOutput, ServiceError>>,
    describe_instances: VecDeque<Result<DescribeInstancesOutput, ServiceError>>,
    start_instances: VecDeque<Result<InstanceActionOutput, ServiceError>>,
    stop_instances: VecDeque<Result<InstanceActionOutput, ServiceError>>,
    restart_instances: VecDeque<Result<InstanceActionOutput, ServiceError>>,
    terminate_instances: VecDeque<Result<InstanceActionOutput, ServiceError>>,
    describe_jobs: VecDeque<Result<DescribeJobsOutput, ServiceError>>,
    create_key_pair: VecDeque<Result<CreateKeyPairOutput, ServiceError>>,
    describe_key_pairs: VecDeque<Result<DescribeKeyPairsOutput, ServiceError>>,
    delete_key_pairs: VecDeque<Result<DeleteKeyPairsOutput, ServiceError>>,
    describe_zones: VecDeque<Result<DescribeZonesOutput, ServiceError>>,
    run_instances_inputs: Vec<RunInstancesInput>,
    describe_instances_inputs: Vec<DescribeInstancesInput>,
    stop_instances_inputs: Vec<StopInstancesInput>,
    action_inputs: Vec<InstanceActionInput>,
    describe_jobs_inputs: Vec<DescribeJobsInput>,
    create_key_pair_inputs: Vec<CreateKeyPairInput>,
    describe_key_pairs_inputs: Vec<DescribeKeyPairsInput>,
    delete_key_pairs_inputs: Vec<DeleteKeyPairsInput>,
}

fn exhausted(action: &str) -> ServiceError {
    ServiceError::Transport {
        message: format!("script exhausted: {action}"),
    }
}

macro_rules! push_accessor {
    ($push:ident, $queue:ident, $output:ty) => {
        /// Queues the next scripted response for this operation.
        pub fn $push(&self, result: Result<$output, ServiceError>) {
            self.state().$queue.push_back(result);
        }
    };
}

impl ScriptedServices {
    /// Creates a double with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(|err| panic!("scripted services mutex poisoned: {err}"))
    }

    push_accessor!(push_run_instances, run_instances, RunInstancesOutput);
    push_accessor!(
        push_describe_instances,
        describe_instances,
        DescribeInstancesOutput
    );
    push_accessor!(push_start_instances, start_instances, InstanceActionOutput);
    push_accessor!(push_stop_instances, stop_instances, InstanceActionOutput);
    push_accessor!(
        push_restart_instances,
        restart_instances,
        InstanceActionOutput
    );
    push_accessor!(
        push_terminate_instances,
        terminate_instances,
        InstanceActionOutput
    );
    push_accessor!(push_describe_jobs, describe_jobs, DescribeJobsOutput);
    push_accessor!(push_create_key_pair, create_key_pair, CreateKeyPairOutput);
    push_accessor!(
        push_describe_key_pairs,
        describe_key_pairs,
        DescribeKeyPairsOutput
    );
    push_accessor!(push_delete_key_pairs, delete_key_pairs, DeleteKeyPairsOutput);
    push_accessor!(push_describe_zones, describe_zones, DescribeZonesOutput);

    /// Last recorded `RunInstances` input, if any call was made.
    #[must_use]
    pub fn last_run_instances_input(&self) -> Option<RunInstancesInput> {
        self.state().run_instances_inputs.last().cloned()
    }

    /// Last recorded `StopInstances` input, if any call was made.
    #[must_use]
    pub fn last_stop_instances_input(&self) -> Option<StopInstancesInput> {
        self.state().stop_instances_inputs.last().cloned()
    }

    /// Last recorded `CreateKeyPair` input, if any call was made.
    #[must_use]
    pub fn last_create_key_pair_input(&self) -> Option<CreateKeyPairInput> {
        self.state().create_key_pair_inputs.last().cloned()
    }

    /// Last recorded `DeleteKeyPairs` input, if any call was made.
    #[must_use]
    pub fn last_delete_key_pairs_input(&self) -> Option<DeleteKeyPairsInput> {
        self.state().delete_key_pairs_inputs.last().cloned()
    }

    /// All recorded `DescribeJobs` inputs in call order.
    #[must_use]
    pub fn describe_jobs_inputs(&self) -> Vec<DescribeJobsInput> {
        self.state().describe_jobs_inputs.clone()
    }

    /// Number of `DescribeInstances` calls made so far.
    #[must_use]
    pub fn describe_instances_calls(&self) -> usize {
        self.state().describe_instances_inputs.len()
    }
}

impl InstanceService for ScriptedServices {
    fn run_instances<'a>(
        &'a self,
        input: &'a RunInstancesInput,
    ) -> ServiceFuture<'a, RunInstancesOutput> {
        let result = {
            let mut guard = self.state();
            guard.run_instances_inputs.push(input.clone());
            guard.run_instances.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("RunInstances"))) })
    }

    fn describe_instances<'a>(
        &'a self,
        input: &'a DescribeInstancesInput,
    ) -> ServiceFuture<'a, DescribeInstancesOutput> {
        let result = {
            let mut guard = self.state();
            guard.describe_instances_inputs.push(input.clone());
            guard.describe_instances.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("DescribeInstances"))) })
    }

    fn start_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput> {
        let result = {
            let mut guard = self.state();
            guard.action_inputs.push(input.clone());
            guard.start_instances.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("StartInstances"))) })
    }

    fn stop_instances<'a>(
        &'a self,
        input: &'a StopInstancesInput,
    ) -> ServiceFuture<'a, InstanceActionOutput> {
        let result = {
            let mut guard = self.state();
            guard.stop_instances_inputs.push(input.clone());
            guard.stop_instances.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("StopInstances"))) })
    }

    fn restart_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput> {
        let result = {
            let mut guard = self.state();
            guard.action_inputs.push(input.clone());
            guard.restart_instances.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("RestartInstances"))) })
    }

    fn terminate_instances<'a>(
        &'a self,
        input: &'a InstanceActionInput,
    ) -> ServiceFuture<'a, InstanceActionOutput> {
        let result = {
            let mut guard = self.state();
            guard.action_inputs.push(input.clone());
            guard.terminate_instances.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("TerminateInstances"))) })
    }
}

impl JobService for ScriptedServices {
    fn describe_jobs<'a>(
        &'a self,
        input: &'a DescribeJobsInput,
    ) -> ServiceFuture<'a, DescribeJobsOutput> {
        let result = {
            let mut guard = self.state();
            guard.describe_jobs_inputs.push(input.clone());
            guard.describe_jobs.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("DescribeJobs"))) })
    }
}

impl KeyPairService for ScriptedServices {
    fn create_key_pair<'a>(
        &'a self,
        input: &'a CreateKeyPairInput,
    ) -> ServiceFuture<'a, CreateKeyPairOutput> {
        let result = {
            let mut guard = self.state();
            guard.create_key_pair_inputs.push(input.clone());
            guard.create_key_pair.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("CreateKeyPair"))) })
    }

    fn describe_key_pairs<'a>(
        &'a self,
        input: &'a DescribeKeyPairsInput,
    ) -> ServiceFuture<'a, DescribeKeyPairsOutput> {
        let result = {
            let mut guard = self.state();
            guard.describe_key_pairs_inputs.push(input.clone());
            guard.describe_key_pairs.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("DescribeKeyPairs"))) })
    }

    fn delete_key_pairs<'a>(
        &'a self,
        input: &'a DeleteKeyPairsInput,
    ) -> ServiceFuture<'a, DeleteKeyPairsOutput> {
        let result = {
            let mut guard = self.state();
            guard.delete_key_pairs_inputs.push(input.clone());
            guard.delete_key_pairs.pop_front()
        };
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("DeleteKeyPairs"))) })
    }
}

impl ZoneService for ScriptedServices {
    fn describe_zones<'a>(
        &'a self,
        _input: &'a DescribeZonesInput,
    ) -> ServiceFuture<'a, DescribeZonesOutput> {
        let result = self.state().describe_zones.pop_front();
        Box::pin(async move { result.unwrap_or_else(|| Err(exhausted("DescribeZones"))) })
    }
}
