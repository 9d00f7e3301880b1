//! Process property lookups consumed by discovery

use crate::core::types::{Address, SnapshotResult};

/// Property queries against the target process.
///
/// Both lookups are single fallible calls with no side effects.
/// Implementations wrap whatever OS facility exposes these properties for a
/// process handle; discovery treats a failure the same way it treats a
/// failed memory read.
pub trait ProcessProperties: Send + Sync {
    /// The target's display name, as reported by the OS
    fn name(&self) -> SnapshotResult<String>;

    /// The address of the dynamic loader's debug-info structure in the
    /// target's address space.
    ///
    /// A lookup that succeeds but yields zero means the loader has not
    /// published its module list (or the process has none); callers treat
    /// that the same as a failed lookup.
    fn debug_address(&self) -> SnapshotResult<Address>;
}
