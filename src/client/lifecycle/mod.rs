//! Instance lifecycle operations.
//!
//! Every asynchronous provider operation follows the same protocol: submit
//! the request, surface transport and embedded errors, extract the job ID,
//! wait for the job, then wait for the instance to reflect the expected
//! terminal status with no transition in flight.

mod power;
mod run;
mod wait;

pub(crate) use wait::poll_until;
