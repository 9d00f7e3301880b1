//! Remote-memory access seam
//!
//! The [`ProcessMemory`] trait is the only way the rest of the crate touches
//! a target's address space; [`ProcessMemoryRange`] layers per-module bounds
//! on top of a shared accessor.

pub mod accessor;
pub mod range;

pub use accessor::{ProcessMemory, MAX_C_STRING_LENGTH};
pub use range::ProcessMemoryRange;
