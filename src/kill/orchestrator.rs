/*!
 * Recursive Kill Orchestrator
 * Tree discovery, concurrent per-descendant fan-out, bottom-up ordering
 */

use super::retry::retry_kill;
use super::types::{resolve_target, KillOptions, KillTarget, ProcessTreeResult};
use crate::core::errors::KillError;
use crate::core::types::{KillResult, Pid};
use crate::discovery::{SysinfoDiscovery, TreeDiscovery};
use crate::signals::{OsSignals, Signal, Signals};
use futures::future::{try_join_all, BoxFuture};
use log::{debug, info, warn};

/// Kill a process and its entire descendant tree.
///
/// Descendants are discovered, killed concurrently (with per-PID retries and
/// an optional per-PID timeout), and only then is the root signaled, so
/// children never outlive their parent's signal. The result maps the root
/// PID to the merged per-descendant results. "No such process" is success
/// everywhere; any other failure for any PID aborts the whole call.
pub async fn kill_tree(
    target: impl KillTarget,
    signal: Signal,
    options: KillOptions,
) -> KillResult<ProcessTreeResult> {
    KillOrchestrator::new(OsSignals, SysinfoDiscovery::new())
        .kill(target, signal, options)
        .await
}

/// True iff the target names a live, signalable process.
///
/// Non-positive PIDs are a caller error, not a process-state answer.
pub fn process_exists(target: impl KillTarget) -> KillResult<bool> {
    let pid = resolve_target(target)?;
    Ok(OsSignals.exists(pid))
}

/// Recursive kill engine over injectable collaborators.
///
/// All concurrency is cooperative: descendant kills are joined as plain
/// futures on the caller's task, never spawned, so the first failure drops
/// its pending siblings.
pub struct KillOrchestrator<S, D> {
    signals: S,
    discovery: D,
}

impl<S: Signals, D: TreeDiscovery> KillOrchestrator<S, D> {
    pub fn new(signals: S, discovery: D) -> Self {
        Self { signals, discovery }
    }

    /// Public entry point; validates the target before any OS call
    pub async fn kill(
        &self,
        target: impl KillTarget,
        signal: Signal,
        options: KillOptions,
    ) -> KillResult<ProcessTreeResult> {
        let pid = resolve_target(target)?;
        info!("Killing process tree rooted at PID {} with {}", pid, signal);
        self.kill_subtree(pid, signal, options).await
    }

    /// Kill one subtree: descendants concurrently, then the root.
    ///
    /// Boxed so recursive-mode descendants can re-enter through an explicit
    /// call rather than a hidden self-reference.
    fn kill_subtree(
        &self,
        pid: Pid,
        signal: Signal,
        options: KillOptions,
    ) -> BoxFuture<'_, KillResult<ProcessTreeResult>> {
        Box::pin(async move {
            let descendants = self.discovery.descendants(pid)?;
            debug!(
                "PID {}: killing {} descendant(s) before the root",
                pid,
                descendants.len()
            );

            let fan_out = try_join_all(
                descendants
                    .iter()
                    .map(|&child| self.kill_descendant(child, signal.clone(), options)),
            )
            .await;

            // The root is always signaled last, even when the fan-out
            // failed, so a dead parent never leaves live orphans mid-walk.
            let root_delivery = self.signals.send(pid, &signal);

            let fragments = match fan_out {
                Ok(fragments) => fragments,
                Err(e) => {
                    if let Err(cause) = root_delivery {
                        warn!(
                            "Root signal to PID {} failed after aborted fan-out: {}",
                            pid, cause
                        );
                    }
                    return Err(e);
                }
            };
            root_delivery.map_err(|e| KillError::delivery(pid, e))?;

            let mut merged = ProcessTreeResult::new();
            for fragment in fragments {
                merged.merge(fragment);
            }
            Ok(ProcessTreeResult::single(pid, merged))
        })
    }

    /// Kill one descendant, racing the configured timeout if any.
    ///
    /// Returns a single-entry fragment for the descendant; siblings own
    /// disjoint keys, so merging is conflict-free.
    async fn kill_descendant(
        &self,
        pid: Pid,
        signal: Signal,
        options: KillOptions,
    ) -> KillResult<ProcessTreeResult> {
        let work = async {
            if options.recursive {
                self.kill_subtree(pid, signal.clone(), options).await
            } else {
                retry_kill(&self.signals, pid, &signal, options.retries).await?;
                Ok(ProcessTreeResult::single(pid, ProcessTreeResult::new()))
            }
        };

        match options.timeout {
            Some(limit) => tokio::time::timeout(limit, work)
                .await
                .map_err(|_| KillError::Timeout {
                    pid,
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => work.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kill::mock::{MockDiscovery, MockSignals};
    use std::time::Duration;

    fn orchestrator(
        signals: MockSignals,
        discovery: MockDiscovery,
    ) -> KillOrchestrator<MockSignals, MockDiscovery> {
        KillOrchestrator::new(signals, discovery)
    }

    #[tokio::test(start_paused = true)]
    async fn test_absent_root_resolves_to_empty_tree() {
        let orch = orchestrator(MockSignals::with_alive([]), MockDiscovery::empty());
        let tree = orch
            .kill(99u32, Signal::term(), KillOptions::new())
            .await
            .unwrap();
        assert_eq!(
            tree,
            ProcessTreeResult::single(99, ProcessTreeResult::new())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_root_is_rejected_before_any_delivery() {
        let orch = orchestrator(MockSignals::with_alive([1]), MockDiscovery::empty());
        let err = orch
            .kill(-1i32, Signal::term(), KillOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, KillError::InvalidArgument(_)));
        assert_eq!(orch.signals.sent_count(1), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flat_tree_kills_children_then_root() {
        let signals = MockSignals::with_alive([1, 2, 3]);
        let discovery = MockDiscovery::new([(1, vec![2, 3])]);
        let tree = orchestrator(signals, discovery)
            .kill(1u32, Signal::term(), KillOptions::new())
            .await
            .unwrap();

        let children = tree.get(1).unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.get(2).unwrap().is_empty());
        assert!(children.get(3).unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_recursive_mode_nests_grandchildren() {
        let signals = MockSignals::with_alive([1, 2, 3, 4]);
        // Discovery returns the transitive set for each subtree root
        let discovery = MockDiscovery::new([(1, vec![2, 3, 4]), (2, vec![4])]);
        let tree = orchestrator(signals, discovery)
            .kill(1u32, Signal::term(), KillOptions::new().recursive(true))
            .await
            .unwrap();

        let children = tree.get(1).unwrap();
        assert_eq!(children.len(), 3);
        assert!(children.get(2).unwrap().contains(4));
        assert!(children.get(3).unwrap().is_empty());
        assert!(children.get(4).unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_descendant_gone_between_discovery_and_signal_is_success() {
        // Discovery still lists PID 3, but it died on its own
        let signals = MockSignals::with_alive([1, 2]);
        let discovery = MockDiscovery::new([(1, vec![2, 3])]);
        let tree = orchestrator(signals, discovery)
            .kill(1u32, Signal::term(), KillOptions::new())
            .await
            .unwrap();

        let children = tree.get(1).unwrap();
        assert!(children.contains(2));
        assert!(children.contains(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stubborn_descendant_fails_fast_without_hanging() {
        let signals = MockSignals::with_alive([1, 2, 3]).stubborn([2]);
        let discovery = MockDiscovery::new([(1, vec![2, 3])]);
        let orch = orchestrator(signals, discovery);
        let err = orch
            .kill(1u32, Signal::term(), KillOptions::new())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            KillError::NotKillable {
                pid: 2,
                signal: "SIGTERM".to_string(),
            }
        );
        // The cooperative sibling resolved, the root was still signaled,
        // but no partial tree is returned.
        assert!(!orch.signals.exists(3));
        assert_eq!(orch.signals.sent_count(1), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_race_abandons_slow_descendant() {
        let signals = MockSignals::with_alive([1, 2]).stubborn([2]);
        let discovery = MockDiscovery::new([(1, vec![2])]);
        let err = orchestrator(signals, discovery)
            .kill(
                1u32,
                Signal::term(),
                KillOptions::new()
                    .retries(10)
                    .timeout(Duration::from_millis(200)),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            KillError::Timeout {
                pid: 2,
                timeout_ms: 200,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_discovery_failure_aborts_before_any_signal() {
        let orch = orchestrator(MockSignals::with_alive([1]), MockDiscovery::failing());
        let err = orch
            .kill(1u32, Signal::term(), KillOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, KillError::Discovery(_)));
        assert_eq!(orch.signals.sent_count(1), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_denied_descendant_surfaces_delivery_error() {
        let signals = MockSignals::with_alive([1, 2]).denied([2]);
        let discovery = MockDiscovery::new([(1, vec![2])]);
        let err = orchestrator(signals, discovery)
            .kill(1u32, Signal::term(), KillOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, KillError::Delivery { pid: 2, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_budget_applies_per_descendant() {
        let signals = MockSignals::with_alive([1, 2]).stubborn([2]);
        let discovery = MockDiscovery::new([(1, vec![2])]);
        let orch = orchestrator(signals, discovery);
        let err = orch
            .kill(1u32, Signal::term(), KillOptions::new().retries(2))
            .await
            .unwrap_err();

        assert!(matches!(err, KillError::NotKillable { pid: 2, .. }));
        assert_eq!(orch.signals.sent_count(2), 3);
    }
}
