//! Discovery limits and their defaults

use crate::memory::MAX_C_STRING_LENGTH;
use serde::{Deserialize, Serialize};

/// Ceiling on list traversal, against cyclic or adversarial chains.
/// Stop after an unreasonably large number of modules.
pub const MAX_MODULE_COUNT: usize = 1000;

/// Limits applied while walking the target's module list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryOptions {
    /// Maximum number of load records to visit before traversal is cut off
    pub max_modules: usize,
    /// Maximum length of a module path string read from the target
    pub max_name_length: usize,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        DiscoveryOptions {
            max_modules: MAX_MODULE_COUNT,
            max_name_length: MAX_C_STRING_LENGTH,
        }
    }
}
