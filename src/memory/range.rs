//! Bounded view over a target process's address space

use crate::core::types::{Address, SnapshotError, SnapshotResult};
use crate::memory::ProcessMemory;
use std::sync::Arc;

/// A view over a shared [`ProcessMemory`] accessor, optionally restricted to
/// `[base, base + size)`.
///
/// Ranges share the underlying accessor by reference counting, so one
/// attachment to the target can back any number of per-module views. A
/// bounded range rejects reads that fall outside it before they reach the
/// accessor; an unbounded range passes everything through.
#[derive(Clone)]
pub struct ProcessMemoryRange {
    memory: Arc<dyn ProcessMemory>,
    base: Address,
    size: Option<u64>,
}

impl ProcessMemoryRange {
    /// Creates a view over the whole address space, rooted at `base`
    pub fn whole(memory: Arc<dyn ProcessMemory>, base: Address) -> Self {
        ProcessMemoryRange {
            memory,
            base,
            size: None,
        }
    }

    /// Creates a view restricted to `[base, base + size)`
    pub fn bounded(memory: Arc<dyn ProcessMemory>, base: Address, size: u64) -> Self {
        ProcessMemoryRange {
            memory,
            base,
            size: Some(size),
        }
    }

    /// The base address this view is rooted at
    pub fn base(&self) -> Address {
        self.base
    }

    /// The view's size in bytes, if it is bounded
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Checks whether `[address, address + length)` lies inside the view
    pub fn contains(&self, address: Address, length: u64) -> bool {
        let size = match self.size {
            Some(size) => size,
            None => return true,
        };
        let end = match address.as_u64().checked_add(length) {
            Some(end) => end,
            None => return false,
        };
        address.as_u64() >= self.base.as_u64() && end <= self.base.as_u64().saturating_add(size)
    }

    fn check(&self, address: Address, length: u64) -> SnapshotResult<()> {
        if self.contains(address, length) {
            Ok(())
        } else {
            Err(SnapshotError::out_of_range(
                address,
                self.base,
                self.size.unwrap_or(u64::MAX),
            ))
        }
    }
}

impl ProcessMemory for ProcessMemoryRange {
    fn read_exact(&self, address: Address, buffer: &mut [u8]) -> SnapshotResult<()> {
        self.check(address, buffer.len() as u64)?;
        self.memory.read_exact(address, buffer)
    }

    fn read_c_string_sized(&self, address: Address, max_length: usize) -> SnapshotResult<String> {
        // Clamp the bound to the view so the chunked walk in the default
        // implementation cannot step past the end of a bounded range.
        let max_length = match self.size {
            Some(size) => {
                self.check(address, 1)?;
                let available = self.base.as_u64().saturating_add(size) - address.as_u64();
                max_length.min(available as usize)
            }
            None => max_length,
        };
        self.memory.read_c_string_sized(address, max_length)
    }
}
