//! Typed instance and job status values.

use std::fmt;

pub(crate) const JOB_STATUS_SUCCESSFUL: &str = "successful";
pub(crate) const JOB_STATUS_FAILED: &str = "failed";

/// Primary status of an instance as reported by the provider.
///
/// An instance has *reached* a status only when the reported value matches
/// and the transition flag on the record is empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstanceStatus {
    /// Creation accepted but the instance is not running yet.
    Pending,
    /// Instance is up.
    Running,
    /// Instance is shut down but still provisioned.
    Stopped,
    /// Instance is suspended by the provider.
    Suspended,
    /// Instance is terminated; resources may linger until ceased.
    Terminated,
    /// Instance is fully reclaimed.
    Ceased,
}

impl InstanceStatus {
    /// Wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Suspended => "suspended",
            Self::Terminated => "terminated",
            Self::Ceased => "ceased",
        }
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
