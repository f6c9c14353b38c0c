//! Per-drug statistics and ranked report entries.

use serde::{Deserialize, Serialize};

/// Accumulated statistics for one drug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugStatistics {
    /// Number of prescribers attributed to the drug.
    pub prescriber_count: u64,
    /// Sum of truncated costs across every counted record.
    pub total_cost: i64,
}

impl DrugStatistics {
    /// Statistics for a drug seen for the first time.
    pub fn first(cost: i64) -> Self {
        Self {
            prescriber_count: 1,
            total_cost: cost,
        }
    }
}

/// A drug and its final statistics, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub drug_name: String,
    pub statistics: DrugStatistics,
}

impl RankedEntry {
    pub fn new(drug_name: impl Into<String>, statistics: DrugStatistics) -> Self {
        Self {
            drug_name: drug_name.into(),
            statistics,
        }
    }

    pub fn prescriber_count(&self) -> u64 {
        self.statistics.prescriber_count
    }

    pub fn total_cost(&self) -> i64 {
        self.statistics.total_cost
    }
}
