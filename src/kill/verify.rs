/*!
 * Verified Kill
 * Signal delivery confirmed by existence polling
 */

use crate::core::errors::KillError;
use crate::core::types::{KillResult, Pid};
use crate::signals::{Delivery, Signal, Signals};
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// Cadence of the existence poll after a delivered signal
pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Deliver `signal` to `pid`, then poll until the process is gone.
///
/// Delivery alone only proves the request was accepted; most signals are
/// advisory, so death is confirmed by re-checking existence. `ceiling`
/// bounds the poll: when the process is still alive after it elapses the
/// attempt fails with `TerminationFailed`. `None` polls indefinitely,
/// leaving bounding to the caller.
pub(crate) async fn verified_kill<S: Signals>(
    signals: &S,
    pid: Pid,
    signal: &Signal,
    ceiling: Option<Duration>,
) -> KillResult<Delivery> {
    let delivery = signals
        .send(pid, signal)
        .map_err(|e| KillError::delivery(pid, e))?;

    if delivery == Delivery::AlreadyGone {
        return Ok(delivery);
    }

    let mut waited = Duration::ZERO;
    loop {
        if !signals.exists(pid) {
            debug!("PID {} confirmed gone after {:?}", pid, waited);
            return Ok(delivery);
        }
        if let Some(limit) = ceiling {
            if waited >= limit {
                return Err(KillError::TerminationFailed(pid));
            }
        }
        sleep(POLL_INTERVAL).await;
        waited += POLL_INTERVAL;
    }
}
