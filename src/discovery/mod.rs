/*!
 * Discovery Module
 * Process-tree enumeration behind a trait seam
 */

mod snapshot;
pub mod traits;
pub mod types;

// Re-export public API
pub use snapshot::SysinfoDiscovery;
pub use traits::TreeDiscovery;
pub use types::{DiscoveryError, DiscoveryResult};
