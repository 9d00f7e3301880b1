//! Fallible remote-memory read capability
//!
//! Everything this crate learns about a target process flows through
//! [`ProcessMemory`]. Implementations wrap whatever OS primitive reads a
//! foreign address space; the discovery code never touches raw pointers.
//! Because the addresses handed to these methods come out of the target's
//! own (possibly corrupted) memory, every method must treat its address as
//! hostile: a bad address reports `Err`, never a fault in the inspector.

use crate::core::types::{Address, SnapshotError, SnapshotResult};

/// Default upper bound on a NUL-terminated string read.
pub const MAX_C_STRING_LENGTH: usize = 4096;

/// Read access to one target process's address space.
///
/// All methods are blocking and never retried: a read either completes or
/// fails immediately. Implementations must be callable with arbitrary,
/// attacker-controlled addresses without crashing the calling process.
pub trait ProcessMemory: Send + Sync {
    /// Reads exactly `buffer.len()` bytes starting at `address`.
    ///
    /// Partial reads are failures: either the whole buffer is filled or an
    /// error is returned and the buffer contents are unspecified.
    fn read_exact(&self, address: Address, buffer: &mut [u8]) -> SnapshotResult<()>;

    /// Reads a little-endian `u32` at `address`
    fn read_u32(&self, address: Address) -> SnapshotResult<u32> {
        let mut buffer = [0u8; 4];
        self.read_exact(address, &mut buffer)?;
        Ok(u32::from_le_bytes(buffer))
    }

    /// Reads a little-endian `u64` at `address`
    fn read_u64(&self, address: Address) -> SnapshotResult<u64> {
        let mut buffer = [0u8; 8];
        self.read_exact(address, &mut buffer)?;
        Ok(u64::from_le_bytes(buffer))
    }

    /// Reads a pointer-sized value at `address` and interprets it as an
    /// address in the target's space
    fn read_address(&self, address: Address) -> SnapshotResult<Address> {
        Ok(Address::new(self.read_u64(address)?))
    }

    /// Reads a NUL-terminated string at `address`, up to
    /// [`MAX_C_STRING_LENGTH`] bytes
    fn read_c_string(&self, address: Address) -> SnapshotResult<String> {
        self.read_c_string_sized(address, MAX_C_STRING_LENGTH)
    }

    /// Reads a NUL-terminated string at `address`, up to `max_length` bytes.
    ///
    /// The walk is one byte at a time: a string can end on the last mapped
    /// byte before an unmapped page, and a single bulk read spanning both
    /// would fail spuriously. Implementations with a cheaper bulk primitive
    /// may override this with a chunked strategy, as long as a readable
    /// prefix still resolves. A string that is not terminated within
    /// `max_length` bytes is an error.
    fn read_c_string_sized(&self, address: Address, max_length: usize) -> SnapshotResult<String> {
        let mut collected: Vec<u8> = Vec::new();
        let mut cursor = address;

        while collected.len() < max_length {
            let mut byte = [0u8; 1];
            self.read_exact(cursor, &mut byte)
                .map_err(|e| SnapshotError::string_read_failed(address, e.to_string()))?;

            if byte[0] == 0 {
                return Ok(String::from_utf8(collected)?);
            }

            collected.push(byte[0]);
            cursor = cursor.checked_offset(1)?;
        }

        Err(SnapshotError::string_read_failed(
            address,
            format!("no NUL terminator within {} bytes", max_length),
        ))
    }
}
