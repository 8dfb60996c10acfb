use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::category::Category;

/// Per-category counters for one region. All three are always reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub normal: usize,
    pub long_running: usize,
    pub failed: usize,
}

impl CategoryCounts {
    pub fn increment(&mut self, category: Category) {
        match category {
            Category::Normal => self.normal += 1,
            Category::LongRunning => self.long_running += 1,
            Category::Failed => self.failed += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Normal => self.normal,
            Category::LongRunning => self.long_running,
            Category::Failed => self.failed,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.normal + self.long_running + self.failed
    }

    #[must_use]
    pub const fn alert_worthy(&self) -> usize {
        self.long_running + self.failed
    }
}

/// Region name to category counts, sorted by region name
pub type RegionSummary = BTreeMap<String, CategoryCounts>;

/// Sum of every counter of every region
#[must_use]
pub fn summary_total(summary: &RegionSummary) -> usize {
    summary.values().map(CategoryCounts::total).sum()
}
