//! Module discovery by walking the target loader's record list
//!
//! Starting from the dynamic loader's debug-info structure, discovery walks
//! the singly linked list of load records field-by-field through the remote
//! memory accessor and emits one descriptor per record. Nothing read from
//! the target is trusted: the process under inspection is frequently crashed
//! or corrupted, so every read can fail and the list itself may be malformed
//! or cyclic. Discovery never reports an error to its caller; it produces an
//! empty or partial list and logs what stopped it.

use crate::core::types::ProcessModule;
use crate::image::ImageReader;
use crate::memory::{ProcessMemory, ProcessMemoryRange};
use crate::process::{DiscoveryOptions, ProcessProperties};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Byte offset of the head-of-list pointer (`r_map`) inside the loader's
/// debug-info structure, 64-bit ELF layout.
const R_DEBUG_MAP_OFFSET: u64 = 8;

/// Byte offsets of the fields read from each load record (`link_map`),
/// 64-bit ELF layout.
const LINK_MAP_ADDR_OFFSET: u64 = 0;
const LINK_MAP_NAME_OFFSET: u64 = 8;
const LINK_MAP_NEXT_OFFSET: u64 = 24;

/// Prefix for the synthesized name used when a record carries no path.
/// The first record is typically the main executable, which leaves this
/// field empty; the prefix distinguishes the synthesized name from a real
/// on-disk path.
const FALLBACK_NAME_PREFIX: &str = "app:";

/// Discovery output: the descriptor list plus the arena of per-module image
/// readers the descriptors index into.
pub(crate) struct ModuleCache {
    pub modules: Vec<ProcessModule>,
    pub readers: Vec<ImageReader>,
}

impl ModuleCache {
    fn empty() -> Self {
        ModuleCache {
            modules: Vec::new(),
            readers: Vec::new(),
        }
    }
}

fn fallback_name(process_name: &str) -> String {
    format!("{}{}", FALLBACK_NAME_PREFIX, process_name)
}

/// Walks the target's load-record list and collects module descriptors.
///
/// Failure policy, in order of severity:
/// - name/anchor/head-pointer lookups failing abort discovery with zero
///   modules;
/// - a failed field read partway down the list, or the traversal ceiling,
///   stops discovery but keeps every module already collected (one corrupt
///   node makes the rest of the chain unreachable, not the prefix);
/// - a failed path-string dereference only costs that module its name,
///   which is replaced by the process-name fallback.
pub(crate) fn discover_modules(
    memory: &Arc<dyn ProcessMemory>,
    properties: &dyn ProcessProperties,
    options: &DiscoveryOptions,
) -> ModuleCache {
    let app_name = match properties.name() {
        Ok(name) => fallback_name(&name),
        Err(e) => {
            error!(error = %e, "process name lookup failed");
            return ModuleCache::empty();
        }
    };

    let debug_address = match properties.debug_address() {
        Ok(address) if !address.is_null() => address,
        Ok(_) => {
            error!("loader debug address is zero, no module list");
            return ModuleCache::empty();
        }
        Err(e) => {
            error!(error = %e, "loader debug address lookup failed");
            return ModuleCache::empty();
        }
    };

    let mut map = match memory.read_address(debug_address.offset(R_DEBUG_MAP_OFFSET)) {
        Ok(head) => head,
        Err(e) => {
            error!(error = %e, "read of load-record head pointer failed");
            return ModuleCache::empty();
        }
    };

    let mut cache = ModuleCache::empty();

    while !map.is_null() {
        if cache.modules.len() >= options.max_modules {
            error!(
                limit = options.max_modules,
                "possibly cyclic load-record list, terminating traversal"
            );
            break;
        }

        let base = match memory.read_address(map.offset(LINK_MAP_ADDR_OFFSET)) {
            Ok(base) => base,
            Err(e) => {
                // Could theoretically continue to the next record, but if any
                // part of a record fails to read the rest of the chain is
                // presumed unreachable.
                error!(record = %map, error = %e, "read of base load address failed");
                break;
            }
        };

        let next = match memory.read_address(map.offset(LINK_MAP_NEXT_OFFSET)) {
            Ok(next) => next,
            Err(e) => {
                error!(record = %map, error = %e, "read of next-record pointer failed");
                break;
            }
        };

        let name_address = match memory.read_address(map.offset(LINK_MAP_NAME_OFFSET)) {
            Ok(address) => address,
            Err(e) => {
                error!(record = %map, error = %e, "read of name pointer failed");
                break;
            }
        };

        // The path string lives outside the record proper, so losing it does
        // not condemn the rest of the chain.
        let dso_name = match memory.read_c_string_sized(name_address, options.max_name_length) {
            Ok(name) => name,
            Err(e) => {
                warn!(record = %map, error = %e, "read of module path string failed");
                String::new()
            }
        };

        let name = if dso_name.is_empty() {
            app_name.clone()
        } else {
            dso_name
        };

        let range = ProcessMemoryRange::whole(Arc::clone(memory), base);
        cache.readers.push(ImageReader::new(range, base));
        cache
            .modules
            .push(ProcessModule::new(name, cache.readers.len() - 1));

        map = next;
    }

    debug!(modules = cache.modules.len(), "module discovery complete");
    cache
}
