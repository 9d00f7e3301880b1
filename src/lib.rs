//! Proc-snapshot: post-mortem module discovery for crashed processes
//!
//! Given read access to a (possibly crashed or suspended) target process,
//! this crate reconstructs the list of dynamically loaded modules by walking
//! the dynamic loader's bookkeeping in the target's address space. Nothing
//! in the target is trusted; a corrupt or cyclic module list degrades the
//! result to a partial or empty list instead of failing.
//!
//! The OS-specific pieces stay outside the crate: callers supply a
//! [`ProcessMemory`] implementation for remote reads and a
//! [`ProcessProperties`] implementation for the two property lookups
//! discovery needs.

pub mod core;
pub mod image;
pub mod memory;
pub mod process;

// Re-export main types from core module
pub use crate::core::types::{
    Address, InitializationState, ProcessId, ProcessModule, SnapshotError, SnapshotResult,
};

pub use image::ImageReader;
pub use memory::{ProcessMemory, ProcessMemoryRange};
pub use process::{DiscoveryOptions, ProcessProperties, ProcessReader};
