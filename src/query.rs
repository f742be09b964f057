//! Deletion Query
//!
//! Picks the smallest directory whose removal leaves enough free space for an
//! update of a known size.

use crate::error::QueryError;
use crate::sizes::SizeIndex;
use crate::tree::DirectoryTree;
use crate::types::Size;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_TOTAL_DISK_SPACE: Size = 70_000_000;
pub const DEFAULT_REQUIRED_FREE_SPACE: Size = 30_000_000;

fn default_total_disk_space() -> Size {
    DEFAULT_TOTAL_DISK_SPACE
}

fn default_required_free_space() -> Size {
    DEFAULT_REQUIRED_FREE_SPACE
}

/// Disk capacity and the free space the update needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskBudget {
    #[serde(default = "default_total_disk_space")]
    pub total_disk_space: Size,

    #[serde(default = "default_required_free_space")]
    pub required_free_space: Size,
}

impl Default for DiskBudget {
    fn default() -> Self {
        Self {
            total_disk_space: default_total_disk_space(),
            required_free_space: default_required_free_space(),
        }
    }
}

impl DiskBudget {
    pub fn new(total_disk_space: Size, required_free_space: Size) -> Self {
        Self {
            total_disk_space,
            required_free_space,
        }
    }

    /// Free space left with `used` occupied; negative when over capacity.
    pub fn currently_free(&self, used: Size) -> i128 {
        i128::from(self.total_disk_space) - i128::from(used)
    }

    /// Minimum size a deleted directory must have; zero when nothing needs
    /// to be freed.
    pub fn need_to_free(&self, used: Size) -> Size {
        self.required_free_space
            .saturating_add(used)
            .saturating_sub(self.total_disk_space)
    }
}

/// Outcome of the deletion query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionPlan {
    pub used: Size,
    pub currently_free: i128,
    pub need_to_free: Size,
    pub selected_size: Size,
    pub selected_path: String,
}

/// Smallest size in `sizes` that is at least `need_to_free`.
pub fn smallest_sufficient_size(
    sizes: &[Size],
    need_to_free: Size,
    used: Size,
) -> Result<Size, QueryError> {
    sizes
        .iter()
        .copied()
        .filter(|size| *size >= need_to_free)
        .min()
        .ok_or(QueryError::NoCandidate { need_to_free, used })
}

/// Run the deletion query against a finished tree.
///
/// Ties on size resolve to the directory listed first.
pub fn plan_deletion(
    tree: &DirectoryTree,
    sizes: &SizeIndex,
    budget: &DiskBudget,
) -> Result<DeletionPlan, QueryError> {
    let used = sizes.total();
    let need_to_free = budget.need_to_free(used);

    let (selected, selected_size) = sizes
        .iter()
        .filter(|(_, size)| *size >= need_to_free)
        .min_by_key(|(_, size)| *size)
        .ok_or(QueryError::NoCandidate { need_to_free, used })?;

    let plan = DeletionPlan {
        used,
        currently_free: budget.currently_free(used),
        need_to_free,
        selected_size,
        selected_path: tree.path(selected),
    };
    info!(
        used = plan.used,
        need_to_free = plan.need_to_free,
        selected_size = plan.selected_size,
        selected_path = %plan.selected_path,
        "deletion candidate selected"
    );
    Ok(plan)
}
