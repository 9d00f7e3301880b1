//! Target-process orchestration: lifecycle, properties, and module discovery

pub mod modules;
pub mod options;
pub mod properties;
pub mod reader;

pub use options::{DiscoveryOptions, MAX_MODULE_COUNT};
pub use properties::ProcessProperties;
pub use reader::ProcessReader;
