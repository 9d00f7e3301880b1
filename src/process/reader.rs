//! Process reader: lifecycle and the one-shot module cache

use crate::core::types::{
    InitializationState, ProcessId, ProcessModule, SnapshotError, SnapshotResult,
};
use crate::image::ImageReader;
use crate::memory::ProcessMemory;
use crate::process::modules::{discover_modules, ModuleCache};
use crate::process::{DiscoveryOptions, ProcessProperties};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Collaborators bound at initialization; present exactly while the reader
/// is in the `Valid` state.
struct BoundTarget {
    pid: ProcessId,
    memory: Arc<dyn ProcessMemory>,
    properties: Box<dyn ProcessProperties>,
}

/// Reads the state of one target process for snapshotting.
///
/// A reader is created detached, bound to a target with
/// [`initialize`](ProcessReader::initialize), and then queried. The module
/// list is computed on the first [`modules`](ProcessReader::modules) call
/// and cached for the reader's lifetime; it reflects the target at that
/// moment and is never refreshed, even if the target has since changed.
///
/// The reader exclusively owns the memory accessor and every per-module
/// memory view and [`ImageReader`] created during discovery; module
/// descriptors borrow from it and cannot outlive it.
pub struct ProcessReader {
    state: InitializationState,
    target: Option<BoundTarget>,
    options: DiscoveryOptions,
    cache: OnceLock<ModuleCache>,
}

impl ProcessReader {
    /// Creates a reader not yet bound to any process
    pub fn new() -> Self {
        Self::with_options(DiscoveryOptions::default())
    }

    /// Creates a reader with non-default discovery limits
    pub fn with_options(options: DiscoveryOptions) -> Self {
        ProcessReader {
            state: InitializationState::new(),
            target: None,
            options,
            cache: OnceLock::new(),
        }
    }

    /// Binds the reader to a target process.
    ///
    /// `memory` and `properties` must both be backed by the same process
    /// handle; the reader never rebinds to a different target. Fails only if
    /// the handle is detectably invalid. On failure the reader must be
    /// discarded.
    pub fn initialize(
        &mut self,
        pid: ProcessId,
        memory: Arc<dyn ProcessMemory>,
        properties: Box<dyn ProcessProperties>,
    ) -> SnapshotResult<()> {
        self.state.set_initializing();

        if pid == 0 {
            return Err(SnapshotError::InvalidHandle("pid 0".to_string()));
        }

        self.target = Some(BoundTarget {
            pid,
            memory,
            properties,
        });

        self.state.set_valid();
        Ok(())
    }

    /// The target's process ID. Panics if the reader is not initialized.
    pub fn pid(&self) -> ProcessId {
        self.target().pid
    }

    /// The modules loaded in the target, in loader-traversal order.
    ///
    /// The first call walks the target's load-record list (see
    /// [`crate::process::modules`]); every call, including the first,
    /// returns the cached result. Discovery never fails: a target whose
    /// bookkeeping is unreadable or corrupt yields an empty or partial
    /// list, with diagnostics on the log channel.
    ///
    /// Panics if the reader is not initialized.
    pub fn modules(&self) -> &[ProcessModule] {
        &self.cache().modules
    }

    /// The image reader backing a descriptor returned by
    /// [`modules`](ProcessReader::modules).
    ///
    /// Panics if the reader is not initialized or if `module` came from a
    /// different `ProcessReader`.
    pub fn module_reader(&self, module: &ProcessModule) -> &ImageReader {
        &self.cache().readers[module.reader_index()]
    }

    fn target(&self) -> &BoundTarget {
        self.state.assert_valid();
        match &self.target {
            Some(target) => target,
            None => unreachable!("valid state implies a bound target"),
        }
    }

    fn cache(&self) -> &ModuleCache {
        let target = self.target();
        // OnceLock makes first-call population safe under concurrent use;
        // later calls return the cached list unconditionally.
        self.cache.get_or_init(|| {
            discover_modules(&target.memory, target.properties.as_ref(), &self.options)
        })
    }
}

impl Default for ProcessReader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProcessReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ProcessReader");
        s.field("state", &self.state);
        if let Some(target) = &self.target {
            s.field("pid", &target.pid);
        }
        s.field("modules_cached", &self.cache.get().is_some());
        s.finish()
    }
}
