//! Deterministic ordering of aggregated drugs.

use std::cmp::Ordering;

use rx_model::RankedEntry;
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregationState;

/// Direction of the drug-name comparison used when total costs tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// `A` before `B` on equal cost.
    #[default]
    Ascending,
    /// `B` before `A` on equal cost.
    Descending,
}

/// Order two entries: total cost descending, then drug name per `tie_break`.
///
/// Distinct drug names never compare equal, so this is a strict total order
/// over the entries of one run.
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry, tie_break: TieBreak) -> Ordering {
    b.total_cost()
        .cmp(&a.total_cost())
        .then_with(|| match tie_break {
            TieBreak::Ascending => a.drug_name.cmp(&b.drug_name),
            TieBreak::Descending => b.drug_name.cmp(&a.drug_name),
        })
}

/// Rank with the default tie-break.
pub fn rank(state: AggregationState) -> Vec<RankedEntry> {
    rank_with(state, TieBreak::default())
}

pub fn rank_with(state: AggregationState, tie_break: TieBreak) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = state
        .into_drugs()
        .into_iter()
        .map(|(drug_name, statistics)| RankedEntry::new(drug_name, statistics))
        .collect();
    entries.sort_by(|a, b| compare_entries(a, b, tie_break));
    entries
}
