//! Best-effort resident memory introspection.
//!
//! The converter reports its resident set size after a run. Where the platform
//! offers no way to read it, probes return `None` instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the per-process status file on Linux.
pub const PROC_SELF_STATUS: &str = "/proc/self/status";

const VM_RSS_KEY: &str = "VmRSS:";

/// Capability for reading the current resident set size.
pub trait MemoryProbe {
    /// Returns the resident set size in KiB, or `None` when unavailable.
    fn resident_kib(&self) -> Option<u64>;
}

/// Closures can stand in for a probe, which keeps tests free of `/proc`.
impl<F> MemoryProbe for F
where
    F: Fn() -> Option<u64>,
{
    fn resident_kib(&self) -> Option<u64> {
        self()
    }
}

/// Probe that parses the `VmRSS` line of a `/proc/<pid>/status` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcStatusProbe {
    path: PathBuf,
}

impl Default for ProcStatusProbe {
    fn default() -> Self {
        Self::new(PROC_SELF_STATUS)
    }
}

impl ProcStatusProbe {
    /// Creates a probe reading the given status file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the status file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MemoryProbe for ProcStatusProbe {
    fn resident_kib(&self) -> Option<u64> {
        match fs::read_to_string(&self.path) {
            Ok(status) => parse_vm_rss(&status),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "memory status unavailable");
                None
            }
        }
    }
}

/// Extracts the `VmRSS` value (in KiB) from the contents of a status file.
///
/// Only the first number after the label is used; the unit suffix is ignored.
pub fn parse_vm_rss(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix(VM_RSS_KEY))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|value| value.parse().ok())
}
