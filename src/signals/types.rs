/*!
 * Signal Types
 * Symbolic signal names and delivery result types
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Signal operation result
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SignalError {
    #[error("invalid signal: {0}")]
    InvalidSignal(String),

    #[error("permission denied signaling PID {0}")]
    PermissionDenied(Pid),

    #[error("delivery to PID {0} failed: {1}")]
    DeliveryFailed(Pid, String),

    #[error("signal delivery is not supported on this platform")]
    Unsupported,
}

/// A symbolic signal name.
///
/// The name is carried as given by the caller and only resolved against the
/// OS signal table at delivery time, so an unknown name surfaces from the
/// delivery primitive rather than from construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signal(String);

impl Signal {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// SIGTERM, the polite request to terminate
    pub fn term() -> Self {
        Self("SIGTERM".into())
    }

    /// SIGKILL, which cannot be caught or ignored
    pub fn kill() -> Self {
        Self("SIGKILL".into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Canonical `SIG*` spelling, accepting bare names like `TERM`
    pub(crate) fn canonical_name(&self) -> String {
        let upper = self.0.to_ascii_uppercase();
        if upper.starts_with("SIG") {
            upper
        } else {
            format!("SIG{upper}")
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal::term()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Signal {
    fn from(name: &str) -> Self {
        Signal::new(name)
    }
}

impl From<String> for Signal {
    fn from(name: String) -> Self {
        Signal(name)
    }
}

/// Outcome of a single signal delivery.
///
/// "Already gone" is an expected, common outcome and therefore a variant
/// here, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// The OS accepted the signal
    Delivered,
    /// The process was gone before the signal arrived (ESRCH)
    AlreadyGone,
}
