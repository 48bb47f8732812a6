/*!
 * Kill Module
 * Verified kill, retry scheduling, and the recursive orchestrator
 */

mod orchestrator;
mod retry;
pub mod types;
mod verify;

#[cfg(test)]
pub(crate) mod mock;

// Re-export public API
pub use orchestrator::{kill_tree, process_exists, KillOrchestrator};
pub use types::{KillOptions, KillTarget, ProcessTreeResult};
