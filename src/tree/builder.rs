//! Transcript replay
//!
//! Folds parsed transcript lines over a caller-owned [`DirectoryTree`] with a
//! single cursor (the shell's working directory), starting at the root.

use super::arena::DirectoryTree;
use super::node::FileNode;
use crate::error::{NavigationError, SweepError};
use crate::transcript::{CdTarget, ParsedLine};
use crate::types::DirId;
use tracing::{debug, info, warn};

/// Replays transcript lines into a directory tree
pub struct TreeBuilder<'a> {
    tree: &'a mut DirectoryTree,
    cursor: DirId,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(tree: &'a mut DirectoryTree) -> Self {
        let cursor = tree.root();
        TreeBuilder { tree, cursor }
    }

    /// Current working directory
    pub fn cursor(&self) -> DirId {
        self.cursor
    }

    pub fn tree(&self) -> &DirectoryTree {
        &*self.tree
    }

    /// Apply a single line to the tree.
    pub fn apply(&mut self, line: &ParsedLine) -> Result<(), NavigationError> {
        match line {
            ParsedLine::Cd(target) => {
                self.cursor = self.resolve(target)?;
                debug!(cwd = %self.tree.path(self.cursor), "changed directory");
            }
            ParsedLine::Ls => {}
            ParsedLine::File { size, name } => {
                self.tree
                    .add_file(self.cursor, FileNode::new(name.clone(), *size));
            }
            ParsedLine::Dir { name } => {
                if self.tree.child_named(self.cursor, name).is_some() {
                    warn!(
                        cwd = %self.tree.path(self.cursor),
                        name = %name,
                        "directory listed twice; appending duplicate"
                    );
                }
                self.tree.add_directory(self.cursor, name.clone());
            }
        }
        Ok(())
    }

    /// Apply every line in order, stopping at the first navigation failure.
    pub fn replay(&mut self, lines: &[ParsedLine]) -> Result<(), SweepError> {
        for (idx, line) in lines.iter().enumerate() {
            self.apply(line).map_err(|source| SweepError::Navigation {
                line: idx + 1,
                source,
            })?;
        }
        info!(
            lines = lines.len(),
            directories = self.tree.len(),
            files = self.tree.file_count(),
            "transcript replayed"
        );
        Ok(())
    }

    fn resolve(&self, target: &CdTarget) -> Result<DirId, NavigationError> {
        match target {
            CdTarget::Root => Ok(self.tree.root()),
            CdTarget::Up => self
                .tree
                .parent(self.cursor)
                .ok_or(NavigationError::NoParent),
            CdTarget::Child(name) => self.tree.child_named(self.cursor, name).ok_or_else(|| {
                NavigationError::NoSuchChild {
                    name: name.clone(),
                    cwd: self.tree.path(self.cursor),
                }
            }),
        }
    }
}
