//! Transcript Analysis
//!
//! End-to-end pipeline: parse the transcript, replay it into a fresh tree,
//! aggregate sizes, then run the deletion query.

use crate::error::SweepError;
use crate::query::{plan_deletion, DeletionPlan, DiskBudget};
use crate::sizes::SizeIndex;
use crate::transcript::parse_transcript;
use crate::tree::{DirectoryTree, TreeBuilder};
use crate::types::Size;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A replayed transcript with its directory sizes
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tree: DirectoryTree,
    pub sizes: SizeIndex,
}

impl Analysis {
    /// Parse and replay a full transcript.
    pub fn from_transcript(text: &str) -> Result<Self, SweepError> {
        let lines = parse_transcript(text)?;
        debug!(lines = lines.len(), "transcript parsed");

        let mut tree = DirectoryTree::new();
        TreeBuilder::new(&mut tree).replay(&lines)?;

        let sizes = SizeIndex::compute(&tree)?;
        Ok(Analysis { tree, sizes })
    }

    pub fn used(&self) -> Size {
        self.sizes.total()
    }

    pub fn plan(&self, budget: &DiskBudget) -> Result<DeletionPlan, SweepError> {
        Ok(plan_deletion(&self.tree, &self.sizes, budget)?)
    }

    pub fn report(&self, budget: &DiskBudget) -> Result<DeletionReport, SweepError> {
        Ok(DeletionReport {
            budget: *budget,
            directory_count: self.tree.len(),
            file_count: self.tree.file_count(),
            plan: self.plan(budget)?,
        })
    }
}

/// Serializable summary of a deletion query run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionReport {
    pub budget: DiskBudget,
    pub directory_count: usize,
    pub file_count: usize,
    pub plan: DeletionPlan,
}

/// Smallest directory size that satisfies `budget` for the given transcript.
pub fn smallest_deletion_size(text: &str, budget: &DiskBudget) -> Result<Size, SweepError> {
    Ok(Analysis::from_transcript(text)?.plan(budget)?.selected_size)
}
