//! Directory Tree
//!
//! Arena-backed hierarchy rebuilt from a transcript, the replay engine that
//! populates it, and a text renderer for inspection.

pub mod arena;
pub mod builder;
pub mod node;
pub mod render;

pub use arena::DirectoryTree;
pub use builder::TreeBuilder;
pub use node::{DirectoryNode, FileNode};
pub use render::render_tree;
