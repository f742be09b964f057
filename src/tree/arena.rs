//! Arena-backed directory hierarchy.

use super::node::{DirectoryNode, FileNode};
use crate::types::DirId;

pub const ROOT_NAME: &str = "/";

/// Directory tree stored as a flat arena.
///
/// Nodes are only ever appended under an existing parent, so a child's id is
/// always greater than its parent's id and the structure cannot form cycles.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    nodes: Vec<DirectoryNode>,
}

impl Default for DirectoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryTree {
    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        DirectoryTree {
            nodes: vec![DirectoryNode::new(ROOT_NAME, None)],
        }
    }

    pub fn root(&self) -> DirId {
        DirId::ROOT
    }

    /// # Panics
    ///
    /// Panics if `id` was not allocated by this tree.
    pub fn get(&self, id: DirId) -> &DirectoryNode {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: DirId) -> Option<DirId> {
        self.get(id).parent
    }

    /// Number of directories, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All directory ids in allocation order (parents before children).
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = DirId> + ExactSizeIterator {
        (0..self.nodes.len()).map(DirId)
    }

    /// First child of `parent` named `name`, if any.
    pub fn child_named(&self, parent: DirId, name: &str) -> Option<DirId> {
        self.get(parent)
            .children
            .iter()
            .copied()
            .find(|child| self.get(*child).name == name)
    }

    /// Append a new empty directory under `parent`.
    ///
    /// Panics if `parent` was not allocated by this tree.
    pub fn add_directory(&mut self, parent: DirId, name: impl Into<String>) -> DirId {
        let id = DirId(self.nodes.len());
        self.nodes.push(DirectoryNode::new(name, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append a file to `dir`. Panics if `dir` was not allocated by this tree.
    pub fn add_file(&mut self, dir: DirId, file: FileNode) {
        self.nodes[dir.0].files.push(file);
    }

    /// Absolute path of a directory, e.g. `/a/e`.
    pub fn path(&self, id: DirId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(dir) = current {
            let node = self.get(dir);
            if node.parent.is_some() {
                names.push(node.name.as_str());
            }
            current = node.parent;
        }
        names.reverse();
        format!("{}{}", ROOT_NAME, names.join("/"))
    }

    /// Total number of file entries across all directories
    pub fn file_count(&self) -> usize {
        self.nodes.iter().map(|n| n.files.len()).sum()
    }
}
