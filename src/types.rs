//! Core types shared across the transcript, tree and query layers.

use std::fmt;

/// DirId: index of a directory node inside a [`crate::tree::DirectoryTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirId(pub(crate) usize);

impl DirId {
    /// The root directory always occupies the first arena slot.
    pub const ROOT: DirId = DirId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DirId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Size: opaque scalar count in the transcript's unit
pub type Size = u64;
