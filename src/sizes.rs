//! Directory Size Aggregation
//!
//! A directory's size is the sum of its own files plus the sizes of all of its
//! subdirectories. Sizes are derived from a finished tree and never stored on
//! the nodes themselves. Sums are checked: a total that does not fit in a
//! [`Size`] is an error naming the directory, never a wrapped value.

use crate::error::QueryError;
use crate::tree::DirectoryTree;
use crate::types::{DirId, Size};

fn overflow(tree: &DirectoryTree, id: DirId) -> QueryError {
    QueryError::SizeOverflow {
        path: tree.path(id),
    }
}

/// Recursive size of a single directory.
pub fn dir_size(tree: &DirectoryTree, id: DirId) -> Result<Size, QueryError> {
    let node = tree.get(id);
    let mut total = node.own_file_size().ok_or_else(|| overflow(tree, id))?;
    for child in &node.children {
        total = total
            .checked_add(dir_size(tree, *child)?)
            .ok_or_else(|| overflow(tree, id))?;
    }
    Ok(total)
}

/// Size of every directory in the tree, root included, in arena order.
pub fn collect_all_sizes(tree: &DirectoryTree) -> Result<Vec<Size>, QueryError> {
    Ok(SizeIndex::compute(tree)?.into_sizes())
}

/// Memoized per-directory sizes for a finished tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeIndex {
    sizes: Vec<Size>,
}

impl SizeIndex {
    /// Compute every directory size in one pass.
    ///
    /// Walks the arena from the highest id down: a child always has a larger id
    /// than its parent, so each child's total is final before it is folded into
    /// the parent.
    pub fn compute(tree: &DirectoryTree) -> Result<Self, QueryError> {
        let mut sizes = Vec::with_capacity(tree.len());
        for id in tree.ids() {
            let own = tree.get(id).own_file_size().ok_or_else(|| overflow(tree, id))?;
            sizes.push(own);
        }
        for id in tree.ids().rev() {
            if let Some(parent) = tree.parent(id) {
                let subtotal = sizes[id.index()];
                sizes[parent.index()] = sizes[parent.index()]
                    .checked_add(subtotal)
                    .ok_or_else(|| overflow(tree, parent))?;
            }
        }
        Ok(SizeIndex { sizes })
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to the tree this index was computed from.
    pub fn get(&self, id: DirId) -> Size {
        self.sizes[id.index()]
    }

    /// Root size, i.e. total used space
    pub fn total(&self) -> Size {
        self.sizes[DirId::ROOT.index()]
    }

    /// `(id, size)` pairs in arena order
    pub fn iter(&self) -> impl Iterator<Item = (DirId, Size)> + '_ {
        self.sizes
            .iter()
            .enumerate()
            .map(|(idx, size)| (DirId(idx), *size))
    }

    pub fn into_sizes(self) -> Vec<Size> {
        self.sizes
    }
}
