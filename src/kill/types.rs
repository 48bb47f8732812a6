/*!
 * Kill Types
 * Options, target normalization, and the nested result tree
 */

use crate::core::errors::KillError;
use crate::core::types::{KillResult, Pid};
use serde::{Deserialize, Serialize};
use std::collections::{hash_map, HashMap};
use std::time::Duration;

/// Configuration threaded through every kill call.
///
/// There is no process-wide default; every call site carries its own value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KillOptions {
    /// Recurse into each descendant's own subtree before signaling it
    pub recursive: bool,
    /// Additional attempts per PID after the first one fails
    pub retries: u32,
    /// Upper bound on a single PID's kill, including its retries
    pub timeout: Option<Duration>,
}

impl KillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Anything that can name the process to kill: a raw PID or a handle
/// exposing one.
pub trait KillTarget {
    /// The raw PID, or `None` if the handle no longer carries one
    fn target_pid(&self) -> Option<i64>;
}

impl<T: KillTarget + ?Sized> KillTarget for &T {
    fn target_pid(&self) -> Option<i64> {
        (**self).target_pid()
    }
}

impl KillTarget for u32 {
    fn target_pid(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl KillTarget for i32 {
    fn target_pid(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl KillTarget for i64 {
    fn target_pid(&self) -> Option<i64> {
        Some(*self)
    }
}

impl KillTarget for std::process::Child {
    fn target_pid(&self) -> Option<i64> {
        Some(i64::from(self.id()))
    }
}

impl KillTarget for tokio::process::Child {
    fn target_pid(&self) -> Option<i64> {
        self.id().map(i64::from)
    }
}

/// Normalize a target into a validated PID.
///
/// Rejected before any OS call is made, so a bad argument has no side
/// effects. The ceiling is `i32::MAX`, not `u32::MAX`: delivery casts to
/// the OS `pid_t`, and anything past that bound would wrap negative and be
/// reinterpreted by `kill(2)` as a process-group or broadcast target.
pub(crate) fn resolve_target(target: impl KillTarget) -> KillResult<Pid> {
    let raw = target.target_pid().ok_or_else(|| {
        KillError::InvalidArgument("process handle no longer carries a PID".to_string())
    })?;
    if raw <= 0 || raw > i64::from(i32::MAX) {
        return Err(KillError::InvalidArgument(format!(
            "pid must be a positive integer no larger than {}, got {raw}",
            i32::MAX
        )));
    }
    Ok(raw as Pid)
}

/// Nested per-PID kill outcome.
///
/// Maps each processed PID to the result for its own descendants; a leaf
/// (or a PID handled non-recursively) maps to an empty tree. The top-level
/// call always returns a single-entry tree keyed by the root PID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessTreeResult(HashMap<Pid, ProcessTreeResult>);

impl ProcessTreeResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry tree for one processed PID
    pub fn single(pid: Pid, children: ProcessTreeResult) -> Self {
        Self(HashMap::from([(pid, children)]))
    }

    /// Absorb another fragment; key sets are disjoint by construction (each
    /// concurrent task owns exactly one descendant PID).
    pub(crate) fn merge(&mut self, other: ProcessTreeResult) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.0.contains_key(&pid)
    }

    /// Sub-results for one processed PID
    pub fn get(&self, pid: Pid) -> Option<&ProcessTreeResult> {
        self.0.get(&pid)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Pid, ProcessTreeResult> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ProcessTreeResult {
    type Item = (&'a Pid, &'a ProcessTreeResult);
    type IntoIter = hash_map::Iter<'a, Pid, ProcessTreeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
