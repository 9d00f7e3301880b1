//! Module descriptor produced by discovery

use serde::Serialize;

/// One dynamically loaded module discovered in the target process.
///
/// A descriptor is a plain record: the display name recorded by the target's
/// loader (or a synthesized fallback), plus a non-owning index into the
/// [`ImageReader`](crate::image::ImageReader) arena held by the
/// [`ProcessReader`](crate::process::ProcessReader) that produced it.
/// Descriptors are created during discovery and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessModule {
    /// The module's on-disk path as recorded by the target, or the
    /// process-name-derived fallback.
    pub name: String,
    #[serde(skip)]
    reader: usize,
}

impl ProcessModule {
    pub(crate) fn new(name: String, reader: usize) -> Self {
        ProcessModule { name, reader }
    }

    /// Index of this module's image reader in the owning reader's arena.
    pub fn reader_index(&self) -> usize {
        self.reader
    }
}
