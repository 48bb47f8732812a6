/*!
 * Discovery Types
 * Result and error types for tree enumeration
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discovery operation result
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Tree discovery errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("process table snapshot failed: {0}")]
    Snapshot(String),
}
