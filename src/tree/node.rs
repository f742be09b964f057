//! Directory and file node types

use crate::types::{DirId, Size};

/// File node representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub size: Size,
}

impl FileNode {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Directory node representation
///
/// Children are stored as arena ids in the order they were listed. The size
/// of a directory is never stored here; see [`crate::sizes`].
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    pub name: String,
    pub parent: Option<DirId>,
    pub children: Vec<DirId>,
    pub files: Vec<FileNode>,
}

impl DirectoryNode {
    pub(crate) fn new(name: impl Into<String>, parent: Option<DirId>) -> Self {
        Self {
            name: name.into(),
            parent,
            children: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Sum of the files listed directly in this directory, or `None` when the
    /// sum does not fit in a [`Size`].
    pub fn own_file_size(&self) -> Option<Size> {
        self.files
            .iter()
            .try_fold(0, |total: Size, file| total.checked_add(file.size))
    }
}
