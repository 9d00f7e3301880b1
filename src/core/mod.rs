//! Core module containing fundamental types for proc-snapshot
//!
//! This module provides the foundational building blocks used throughout
//! the crate, including address handling, module descriptors, the
//! initialization state machine, and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, InitializationState, ProcessModule, SnapshotError, SnapshotResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
