//! Indented text rendering of a directory tree.

use super::arena::DirectoryTree;
use crate::types::DirId;

const INDENT_STEP: usize = 2;

/// Render the hierarchy as `dir <name>` lines with files as `<size> <name>`.
///
/// Subdirectories are printed before the files of the same directory, each
/// level indented two spaces deeper than its parent.
pub fn render_tree(tree: &DirectoryTree) -> String {
    let mut out = String::new();
    render_dir(tree, tree.root(), 0, &mut out);
    out
}

fn render_dir(tree: &DirectoryTree, id: DirId, depth: usize, out: &mut String) {
    let node = tree.get(id);
    let indent = " ".repeat(depth * INDENT_STEP);
    out.push_str(&format!("{}dir {}\n", indent, node.name));

    for child in &node.children {
        render_dir(tree, *child, depth + 1, out);
    }

    let child_indent = " ".repeat((depth + 1) * INDENT_STEP);
    for file in &node.files {
        out.push_str(&format!("{}{} {}\n", child_indent, file.size, file.name));
    }
}
