//! BDD scenarios for platform listings.

use rstest_bdd_macros::scenario;

use super::test_helpers::{PlatformContext, platform_context};

#[scenario(path = "tests/features/platform.feature", name = "The bound zone is listed")]
fn scenario_zone_listed(platform_context: PlatformContext) {
    drop(platform_context);
}

#[scenario(
    path = "tests/features/platform.feature",
    name = "Submissions appear in the job listing"
)]
fn scenario_submissions_listed(platform_context: PlatformContext) {
    drop(platform_context);
}

#[scenario(
    path = "tests/features/platform.feature",
    name = "A finished job reports terminal status"
)]
fn scenario_terminal_job(platform_context: PlatformContext) {
    drop(platform_context);
}
