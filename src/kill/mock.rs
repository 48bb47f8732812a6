/*!
 * Mock Collaborators
 * In-memory signal primitive and tree discovery for unit tests
 */

use crate::core::types::Pid;
use crate::discovery::{DiscoveryError, DiscoveryResult, TreeDiscovery};
use crate::signals::{Delivery, Signal, SignalError, SignalResult, Signals};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Scriptable signal primitive.
///
/// Processes in `alive` die on the first delivered signal unless marked
/// `stubborn`; `denied` PIDs refuse delivery outright (EPERM-style).
pub(crate) struct MockSignals {
    alive: Mutex<HashSet<Pid>>,
    stubborn: HashSet<Pid>,
    denied: HashSet<Pid>,
    sent: Mutex<Vec<(Pid, String)>>,
}

impl MockSignals {
    pub(crate) fn with_alive(pids: impl IntoIterator<Item = Pid>) -> Self {
        Self {
            alive: Mutex::new(pids.into_iter().collect()),
            stubborn: HashSet::new(),
            denied: HashSet::new(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Mark PIDs that ignore every signal and stay alive
    pub(crate) fn stubborn(mut self, pids: impl IntoIterator<Item = Pid>) -> Self {
        self.stubborn = pids.into_iter().collect();
        self
    }

    /// Mark PIDs whose signals are refused by the OS
    pub(crate) fn denied(mut self, pids: impl IntoIterator<Item = Pid>) -> Self {
        self.denied = pids.into_iter().collect();
        self
    }

    /// Number of deliveries attempted against `pid`
    pub(crate) fn sent_count(&self, pid: Pid) -> usize {
        self.sent.lock().unwrap().iter().filter(|(p, _)| *p == pid).count()
    }
}

impl Signals for MockSignals {
    fn send(&self, pid: Pid, signal: &Signal) -> SignalResult<Delivery> {
        self.sent
            .lock()
            .unwrap()
            .push((pid, signal.name().to_string()));

        if self.denied.contains(&pid) {
            return Err(SignalError::PermissionDenied(pid));
        }

        let mut alive = self.alive.lock().unwrap();
        if !alive.contains(&pid) {
            return Ok(Delivery::AlreadyGone);
        }
        if !self.stubborn.contains(&pid) {
            alive.remove(&pid);
        }
        Ok(Delivery::Delivered)
    }

    fn exists(&self, pid: Pid) -> bool {
        self.alive.lock().unwrap().contains(&pid)
    }
}

/// Static descendant map; `failing` makes every lookup error
pub(crate) struct MockDiscovery {
    descendants: HashMap<Pid, Vec<Pid>>,
    failing: bool,
}

impl MockDiscovery {
    pub(crate) fn new(descendants: impl IntoIterator<Item = (Pid, Vec<Pid>)>) -> Self {
        Self {
            descendants: descendants.into_iter().collect(),
            failing: false,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new([])
    }

    pub(crate) fn failing() -> Self {
        Self {
            descendants: HashMap::new(),
            failing: true,
        }
    }
}

impl TreeDiscovery for MockDiscovery {
    fn descendants(&self, pid: Pid) -> DiscoveryResult<Vec<Pid>> {
        if self.failing {
            return Err(DiscoveryError::Snapshot("mock failure".to_string()));
        }
        Ok(self.descendants.get(&pid).cloned().unwrap_or_default())
    }
}
