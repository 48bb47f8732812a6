/*!
 * Signals Module
 * Signal names, delivery classification, and the OS signal primitive
 */

mod delivery;
pub mod traits;
pub mod types;

// Re-export public API
pub use delivery::OsSignals;
pub use traits::Signals;
pub use types::{Delivery, Signal, SignalError, SignalResult};
