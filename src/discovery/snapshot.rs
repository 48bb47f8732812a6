/*!
 * Snapshot Discovery
 * Transitive descendant enumeration from a sysinfo process-table snapshot
 */

use super::traits::TreeDiscovery;
use super::types::DiscoveryResult;
use crate::core::types::Pid;
use log::debug;
use std::collections::{HashMap, HashSet, VecDeque};
use sysinfo::{PidExt, ProcessExt, System, SystemExt};

/// Tree discovery backed by the OS process table.
///
/// Each call takes a fresh snapshot, builds a parent index, and walks it
/// breadth-first from the root PID.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoDiscovery;

impl SysinfoDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl TreeDiscovery for SysinfoDiscovery {
    fn descendants(&self, pid: Pid) -> DiscoveryResult<Vec<Pid>> {
        let mut sys = System::new();
        sys.refresh_processes();

        let mut children: HashMap<Pid, Vec<Pid>> = HashMap::new();
        for (child_pid, process) in sys.processes() {
            if let Some(parent) = process.parent() {
                children
                    .entry(parent.as_u32())
                    .or_default()
                    .push(child_pid.as_u32());
            }
        }

        // Breadth-first walk; the seen set guards against PID-reuse loops in
        // a torn snapshot.
        let mut found = Vec::new();
        let mut seen: HashSet<Pid> = HashSet::from([pid]);
        let mut queue = VecDeque::from([pid]);
        while let Some(next) = queue.pop_front() {
            let Some(kids) = children.get(&next) else {
                continue;
            };
            let mut kids = kids.clone();
            kids.sort_unstable();
            for kid in kids {
                if seen.insert(kid) {
                    found.push(kid);
                    queue.push_back(kid);
                }
            }
        }

        debug!("Discovered {} descendant(s) of PID {}", found.len(), pid);
        Ok(found)
    }
}
