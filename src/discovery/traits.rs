/*!
 * Discovery Traits
 * Seam between the kill engine and process-tree enumeration
 */

use super::types::DiscoveryResult;
use crate::core::types::Pid;

/// Process-tree enumeration service
pub trait TreeDiscovery: Send + Sync {
    /// All transitive descendants of `pid` that exist at call time.
    ///
    /// The set is a point-in-time snapshot; callers must tolerate any of the
    /// returned PIDs vanishing before they are acted on.
    fn descendants(&self, pid: Pid) -> DiscoveryResult<Vec<Pid>>;
}
