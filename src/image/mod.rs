//! Per-module binary image access
//!
//! An [`ImageReader`] is handed to snapshot consumers for each discovered
//! module. Discovery only establishes where an image begins and which memory
//! view covers it; interpreting the image's binary format (headers, program
//! tables, build IDs) happens lazily in the consumer, on demand, through the
//! memory view exposed here.

use crate::core::types::Address;
use crate::memory::ProcessMemoryRange;

/// Read access to one loaded module's image in the target process.
pub struct ImageReader {
    memory: ProcessMemoryRange,
    base: Address,
}

impl ImageReader {
    /// Creates a reader over `memory`, for an image loaded at `base`
    pub fn new(memory: ProcessMemoryRange, base: Address) -> Self {
        ImageReader { memory, base }
    }

    /// The module's base load address in the target process
    pub fn base_address(&self) -> Address {
        self.base
    }

    /// The memory view covering this module
    pub fn memory(&self) -> &ProcessMemoryRange {
        &self.memory
    }
}
