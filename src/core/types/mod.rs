//! Core type definitions for proc-snapshot
//!
//! This module contains the fundamental types used throughout the crate:
//! the target-address wrapper, module descriptors, the initialization state
//! machine, and error types.

mod address;
mod error;
mod module;
mod state;

// Re-export all public types
pub use address::Address;
pub use error::{SnapshotError, SnapshotResult};
pub use module::ProcessModule;
pub use state::InitializationState;

// Common type aliases
pub type ProcessId = u32;
