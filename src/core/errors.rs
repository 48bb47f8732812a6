/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use crate::discovery::DiscoveryError;
use crate::signals::SignalError;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kill operation errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum KillError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(kill::invalid_argument),
        help("PIDs must be positive integers. Check the target before calling.")
    )]
    InvalidArgument(String),

    #[error("Signal delivery to PID {pid} failed: {cause}")]
    #[diagnostic(
        code(kill::delivery_failed),
        help("The OS refused the signal. Check signal name and permissions.")
    )]
    Delivery {
        pid: Pid,
        #[source]
        cause: SignalError,
    },

    #[error("PID {0} is still alive after a verified kill attempt")]
    #[diagnostic(
        code(kill::termination_failed),
        help("The process survived the signal. It may be retried if budget remains.")
    )]
    TerminationFailed(Pid),

    #[error("PID {pid} could not be killed with {signal} after exhausting retries")]
    #[diagnostic(
        code(kill::not_killable),
        help("The process ignored every attempt. Consider a stronger signal (SIGKILL).")
    )]
    NotKillable { pid: Pid, signal: String },

    #[error("Kill of PID {pid} did not complete within {timeout_ms}ms")]
    #[diagnostic(
        code(kill::timeout),
        help("The pending attempt was abandoned. The signal may already have been sent.")
    )]
    Timeout { pid: Pid, timeout_ms: u64 },

    #[error("Tree discovery failed: {0}")]
    #[diagnostic(
        code(kill::discovery),
        help("The process-table snapshot could not be taken. See the underlying cause.")
    )]
    Discovery(String),
}

impl KillError {
    /// Wrap a delivery failure with the PID it concerned
    pub(crate) fn delivery(pid: Pid, cause: SignalError) -> Self {
        KillError::Delivery { pid, cause }
    }
}

impl From<DiscoveryError> for KillError {
    fn from(err: DiscoveryError) -> Self {
        KillError::Discovery(err.to_string())
    }
}
