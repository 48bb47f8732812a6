/*!
 * Core Types
 * Common types used across the crate
 */

/// Process ID type
pub type Pid = u32;

/// Common result type for kill operations
pub type KillResult<T> = Result<T, super::errors::KillError>;
