//! Custom error types for proc-snapshot

use std::fmt;
use thiserror::Error;

/// Main error type for snapshot operations
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid memory address: {0}")]
    InvalidAddress(String),

    #[error("Failed to read {length} bytes at {address}: {reason}")]
    ReadFailed {
        address: String,
        length: usize,
        reason: String,
    },

    #[error("Failed to read string at {address}: {reason}")]
    StringReadFailed { address: String, reason: String },

    #[error("Read at {address} outside range [{base}, {base}+0x{size:x})")]
    OutOfRange {
        address: String,
        base: String,
        size: u64,
    },

    #[error("Process property unavailable: {0}")]
    PropertyUnavailable(String),

    #[error("Invalid process handle: {0}")]
    InvalidHandle(String),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

impl SnapshotError {
    /// Creates a read failed error
    pub fn read_failed(
        address: impl fmt::Display,
        length: usize,
        reason: impl Into<String>,
    ) -> Self {
        SnapshotError::ReadFailed {
            address: address.to_string(),
            length,
            reason: reason.into(),
        }
    }

    /// Creates a string read failed error
    pub fn string_read_failed(address: impl fmt::Display, reason: impl Into<String>) -> Self {
        SnapshotError::StringReadFailed {
            address: address.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an out-of-range error for a bounded memory range
    pub fn out_of_range(address: impl fmt::Display, base: impl fmt::Display, size: u64) -> Self {
        SnapshotError::OutOfRange {
            address: address.to_string(),
            base: base.to_string(),
            size,
        }
    }
}
