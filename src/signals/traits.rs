/*!
 * Signal Traits
 * Seam between the kill engine and the OS signal primitive
 */

use super::types::{Delivery, Signal, SignalResult};
use crate::core::types::Pid;

/// Signal delivery and existence probing
pub trait Signals: Send + Sync {
    /// Deliver one signal to one process
    fn send(&self, pid: Pid, signal: &Signal) -> SignalResult<Delivery>;

    /// True iff the PID refers to a live, signalable process.
    ///
    /// A denial other than "no such process" means the process exists but is
    /// not ours to signal, which still counts as existing.
    fn exists(&self, pid: Pid) -> bool;
}
