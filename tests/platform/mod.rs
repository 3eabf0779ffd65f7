//! Modules backing the platform-listing scenarios.

pub mod bdd_steps;
pub mod scenarios;
