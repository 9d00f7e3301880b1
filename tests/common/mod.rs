//! In-memory fake target process shared by the integration tests

#![allow(dead_code)]

use proc_snapshot::{Address, ProcessMemory, ProcessProperties, SnapshotError, SnapshotResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Offsets of the remote structures, 64-bit ELF layout. The tests write the
/// same layout discovery reads.
pub const R_DEBUG_MAP_OFFSET: u64 = 8;
pub const LINK_MAP_ADDR_OFFSET: u64 = 0;
pub const LINK_MAP_NAME_OFFSET: u64 = 8;
pub const LINK_MAP_NEXT_OFFSET: u64 = 24;

/// Address where tests conventionally place the loader debug structure
pub const DEBUG_ADDRESS: u64 = 0xD000;

/// Sparse, byte-addressed fake address space. Unstored addresses read as
/// unmapped, so tests model corruption by simply not writing a field.
pub struct FakeProcessMemory {
    bytes: Mutex<HashMap<u64, u8>>,
}

impl FakeProcessMemory {
    pub fn new() -> Arc<Self> {
        Arc::new(FakeProcessMemory {
            bytes: Mutex::new(HashMap::new()),
        })
    }

    pub fn store(&self, address: u64, data: &[u8]) {
        let mut bytes = self.bytes.lock().unwrap();
        for (i, &b) in data.iter().enumerate() {
            bytes.insert(address + i as u64, b);
        }
    }

    pub fn store_u64(&self, address: u64, value: u64) {
        self.store(address, &value.to_le_bytes());
    }

    pub fn store_c_string(&self, address: u64, value: &str) {
        self.store(address, value.as_bytes());
        self.store(address + value.len() as u64, &[0]);
    }

    /// Unmaps a byte range, making later reads of it fail
    pub fn unmap(&self, address: u64, length: u64) {
        let mut bytes = self.bytes.lock().unwrap();
        for addr in address..address + length {
            bytes.remove(&addr);
        }
    }
}

impl ProcessMemory for FakeProcessMemory {
    fn read_exact(&self, address: Address, buffer: &mut [u8]) -> SnapshotResult<()> {
        let bytes = self.bytes.lock().unwrap();
        let length = buffer.len();
        for (i, slot) in buffer.iter_mut().enumerate() {
            let addr = address.as_u64().wrapping_add(i as u64);
            *slot = *bytes
                .get(&addr)
                .ok_or_else(|| SnapshotError::read_failed(Address::new(addr), length, "unmapped"))?;
        }
        Ok(())
    }
}

/// Property collaborator whose answers the tests script; counts lookups so
/// tests can prove discovery ran exactly once.
pub struct FakeProcessProperties {
    name: Option<String>,
    debug_address: Option<u64>,
    name_lookups: Arc<AtomicUsize>,
}

impl FakeProcessProperties {
    pub fn new(name: &str, debug_address: u64) -> Self {
        FakeProcessProperties {
            name: Some(name.to_string()),
            debug_address: Some(debug_address),
            name_lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A target whose name lookup fails
    pub fn without_name(debug_address: u64) -> Self {
        FakeProcessProperties {
            name: None,
            debug_address: Some(debug_address),
            name_lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A target whose debug-address lookup fails
    pub fn without_debug_address(name: &str) -> Self {
        FakeProcessProperties {
            name: Some(name.to_string()),
            debug_address: None,
            name_lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Counter incremented by every name lookup
    pub fn name_lookup_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.name_lookups)
    }
}

impl ProcessProperties for FakeProcessProperties {
    fn name(&self) -> SnapshotResult<String> {
        self.name_lookups.fetch_add(1, Ordering::SeqCst);
        self.name
            .clone()
            .ok_or_else(|| SnapshotError::PropertyUnavailable("process name".to_string()))
    }

    fn debug_address(&self) -> SnapshotResult<Address> {
        self.debug_address
            .map(Address::new)
            .ok_or_else(|| SnapshotError::PropertyUnavailable("loader debug address".to_string()))
    }
}

/// Writes the loader debug structure: the head-of-list pointer at its fixed
/// offset inside the structure at `debug_address`.
pub fn write_debug_anchor(memory: &FakeProcessMemory, debug_address: u64, head: u64) {
    memory.store_u64(debug_address + R_DEBUG_MAP_OFFSET, head);
}

/// Writes one load record at `record`, with its path string placed at
/// `record + 0x100`.
pub fn write_record(
    memory: &FakeProcessMemory,
    record: u64,
    base: u64,
    next: u64,
    name: Option<&str>,
) {
    memory.store_u64(record + LINK_MAP_ADDR_OFFSET, base);
    memory.store_u64(record + LINK_MAP_NEXT_OFFSET, next);
    let name_address = record + 0x100;
    memory.store_u64(record + LINK_MAP_NAME_OFFSET, name_address);
    if let Some(name) = name {
        memory.store_c_string(name_address, name);
    }
}

/// Lays out a well-formed chain of `names.len()` records and returns the
/// record addresses. Records are spaced 0x1000 apart starting at 0x10000;
/// record i gets base load address `0x40_0000 + i * 0x10_0000`.
pub fn write_chain(memory: &FakeProcessMemory, debug_address: u64, names: &[&str]) -> Vec<u64> {
    let records: Vec<u64> = (0..names.len()).map(|i| 0x10000 + i as u64 * 0x1000).collect();

    write_debug_anchor(
        memory,
        debug_address,
        records.first().copied().unwrap_or(0),
    );

    for (i, (&record, name)) in records.iter().zip(names).enumerate() {
        let next = records.get(i + 1).copied().unwrap_or(0);
        write_record(memory, record, record_base(i), next, Some(name));
    }

    records
}

/// Base load address assigned to record `i` by [`write_chain`]
pub fn record_base(i: usize) -> u64 {
    0x40_0000 + i as u64 * 0x10_0000
}
