/*!
 * procreap
 * Verified, recursive termination of process trees
 *
 * Terminates a process and its descendants bottom-up: descendants are
 * discovered, killed concurrently with retry/timeout handling, and the root
 * is signaled only after every child has resolved. Kills are verified by
 * existence polling, "no such process" is always success, and any other
 * per-PID failure aborts the whole operation.
 */

pub mod core;
pub mod discovery;
pub mod kill;
pub mod signals;

// Re-exports
pub use crate::core::errors::KillError;
pub use crate::core::types::{KillResult, Pid};
pub use crate::discovery::{DiscoveryError, SysinfoDiscovery, TreeDiscovery};
pub use crate::kill::{
    kill_tree, process_exists, KillOptions, KillOrchestrator, KillTarget, ProcessTreeResult,
};
pub use crate::signals::{Delivery, OsSignals, Signal, SignalError, Signals};
