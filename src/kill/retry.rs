/*!
 * Retry Scheduler
 * Bounded re-attempts with an escalating delay for stubborn processes
 */

use super::verify::verified_kill;
use crate::core::errors::KillError;
use crate::core::types::{KillResult, Pid};
use crate::signals::{Signal, Signals};
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// Delay before each re-attempt, and the per-attempt poll ceiling
pub(crate) const ESCALATION_DELAY: Duration = Duration::from_millis(1000);

/// Kill `pid` with up to `retries` additional attempts.
///
/// The first attempt runs immediately; each retry waits `ESCALATION_DELAY`
/// first. An attempt is a verified kill bounded by the same delay, followed
/// by a final existence check. Only a surviving process is retried; delivery
/// denials surface immediately. Exhausting the budget yields
/// `NotKillable`.
pub(crate) async fn retry_kill<S: Signals>(
    signals: &S,
    pid: Pid,
    signal: &Signal,
    retries: u32,
) -> KillResult<()> {
    let mut remaining = retries;
    let mut lag = Duration::ZERO;
    loop {
        if !lag.is_zero() {
            sleep(lag).await;
        }
        match kill_and_check(signals, pid, signal).await {
            Ok(()) => return Ok(()),
            Err(KillError::TerminationFailed(_)) if remaining > 0 => {
                remaining -= 1;
                lag = ESCALATION_DELAY;
                debug!(
                    "PID {} survived {}, retrying ({} attempt(s) left)",
                    pid, signal, remaining
                );
            }
            Err(KillError::TerminationFailed(_)) => {
                return Err(KillError::NotKillable {
                    pid,
                    signal: signal.name().to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }
}

/// One bounded attempt: verified kill, then a post-check that the PID is
/// truly gone
async fn kill_and_check<S: Signals>(signals: &S, pid: Pid, signal: &Signal) -> KillResult<()> {
    verified_kill(signals, pid, signal, Some(ESCALATION_DELAY)).await?;
    if signals.exists(pid) {
        return Err(KillError::TerminationFailed(pid));
    }
    Ok(())
}
