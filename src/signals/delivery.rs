/*!
 * OS Signal Delivery
 * nix-backed implementation of the signal primitive
 */

use super::traits::Signals;
use super::types::{Delivery, Signal, SignalError, SignalResult};
use crate::core::types::Pid;
use log::debug;

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{kill, Signal as UnixSignal};
#[cfg(unix)]
use nix::unistd::Pid as NixPid;
#[cfg(unix)]
use std::str::FromStr;

/// Signal primitive backed by `kill(2)`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSignals;

impl Signals for OsSignals {
    #[cfg(unix)]
    fn send(&self, pid: Pid, signal: &Signal) -> SignalResult<Delivery> {
        let sig = UnixSignal::from_str(&signal.canonical_name())
            .map_err(|_| SignalError::InvalidSignal(signal.name().to_string()))?;

        match kill(NixPid::from_raw(pid as i32), sig) {
            Ok(()) => {
                debug!("Delivered {} to PID {}", sig.as_str(), pid);
                Ok(Delivery::Delivered)
            }
            Err(Errno::ESRCH) => {
                debug!("PID {} already gone, {} treated as delivered", pid, sig.as_str());
                Ok(Delivery::AlreadyGone)
            }
            Err(Errno::EPERM) => Err(SignalError::PermissionDenied(pid)),
            Err(e) => Err(SignalError::DeliveryFailed(pid, e.to_string())),
        }
    }

    #[cfg(not(unix))]
    fn send(&self, _pid: Pid, _signal: &Signal) -> SignalResult<Delivery> {
        Err(SignalError::Unsupported)
    }

    /// Zero-signal probe. ESRCH means gone; any other denial means the
    /// process exists but is not ours to signal.
    #[cfg(unix)]
    fn exists(&self, pid: Pid) -> bool {
        !matches!(kill(NixPid::from_raw(pid as i32), None), Err(Errno::ESRCH))
    }

    #[cfg(not(unix))]
    fn exists(&self, _pid: Pid) -> bool {
        false
    }
}
