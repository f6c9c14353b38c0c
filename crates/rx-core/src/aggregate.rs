//! Single-pass aggregation of prescription records into per-drug statistics.
//!
//! Prescriber identities are deduplicated across the whole run, not per
//! drug: once a prescriber has been seen under any drug, later records for
//! the same prescriber never raise another drug's prescriber count.
//!
//! The first record for a drug always counts one prescriber, even when that
//! prescriber was already seen under a different drug. Only updates to an
//! existing drug consult the seen set.

use std::collections::{BTreeMap, BTreeSet};

use rx_model::{DrugStatistics, PrescriberIdentity, Record, parse_cost};
use tracing::{debug, trace};

use crate::error::{AggregateError, Result};

/// What a single record did to the aggregation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Record named a drug not seen before.
    NewDrug,
    /// Record was added to an existing drug.
    Updated,
    /// Record lacked a drug name or cost and was ignored.
    Skipped,
}

/// Accumulated statistics for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationState {
    drugs: BTreeMap<String, DrugStatistics>,
    prescribers: BTreeSet<PrescriberIdentity>,
    records_read: usize,
    records_skipped: usize,
}

impl AggregationState {
    pub fn get(&self, drug_name: &str) -> Option<&DrugStatistics> {
        self.drugs.get(drug_name)
    }

    pub fn drugs(&self) -> &BTreeMap<String, DrugStatistics> {
        &self.drugs
    }

    pub fn drug_count(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    /// Number of distinct prescriber identities seen during the run.
    pub fn prescriber_count(&self) -> usize {
        self.prescribers.len()
    }

    pub fn has_seen(&self, prescriber: &PrescriberIdentity) -> bool {
        self.prescribers.contains(prescriber)
    }

    pub fn records_read(&self) -> usize {
        self.records_read
    }

    pub fn records_skipped(&self) -> usize {
        self.records_skipped
    }

    pub fn into_drugs(self) -> BTreeMap<String, DrugStatistics> {
        self.drugs
    }
}

/// Owns the aggregation state while records are being pushed.
#[derive(Debug, Default)]
pub struct Aggregator {
    state: AggregationState,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the state.
    ///
    /// # Errors
    ///
    /// Fails when the cost field is present but not numeric, or when a
    /// drug's total no longer fits in an `i64`. Either error ends the run.
    pub fn push(&mut self, record: &Record) -> Result<RecordOutcome> {
        self.state.records_read += 1;
        let (Some(drug_name), Some(raw_cost)) = (record.drug_name(), record.cost()) else {
            self.state.records_skipped += 1;
            debug!(line = ?record.line, "skipping record without drug name or cost");
            return Ok(RecordOutcome::Skipped);
        };
        let cost = parse_cost(raw_cost).map_err(|source| AggregateError::MalformedRecord {
            line: record.line,
            source,
        })?;
        let prescriber = record.prescriber();

        if let Some(stats) = self.state.drugs.get_mut(drug_name) {
            stats.total_cost =
                stats
                    .total_cost
                    .checked_add(cost)
                    .ok_or_else(|| AggregateError::CostOverflow {
                        drug_name: drug_name.to_string(),
                    })?;
            if self.state.prescribers.insert(prescriber) {
                stats.prescriber_count += 1;
            }
            Ok(RecordOutcome::Updated)
        } else {
            trace!(line = ?record.line, "new drug entry");
            self.state
                .drugs
                .insert(drug_name.to_string(), DrugStatistics::first(cost));
            self.state.prescribers.insert(prescriber);
            Ok(RecordOutcome::NewDrug)
        }
    }

    pub fn state(&self) -> &AggregationState {
        &self.state
    }

    pub fn finish(self) -> AggregationState {
        self.state
    }
}

/// Aggregate a full record sequence in input order.
///
/// # Errors
///
/// Returns the first [`AggregateError`] encountered; no partial state is
/// returned.
pub fn accumulate<I>(records: I) -> Result<AggregationState>
where
    I: IntoIterator<Item = Record>,
{
    let mut aggregator = Aggregator::new();
    for record in records {
        aggregator.push(&record)?;
    }
    Ok(aggregator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rx_model::ModelError;

    fn record(last: &str, first: &str, drug: &str, cost: &str) -> Record {
        ["1", last, first, drug, cost].into_iter().collect()
    }

    #[test]
    fn counts_new_drug_with_one_prescriber() {
        let mut aggregator = Aggregator::new();
        let outcome = aggregator.push(&record("Doe", "John", "DrugA", "10.40")).unwrap();
        assert_eq!(outcome, RecordOutcome::NewDrug);
        let state = aggregator.finish();
        assert_eq!(
            state.get("DrugA"),
            Some(&DrugStatistics {
                prescriber_count: 1,
                total_cost: 10
            })
        );
        assert!(state.has_seen(&PrescriberIdentity::from_names("John", "Doe")));
    }

    #[test]
    fn repeated_prescriber_adds_cost_only() {
        let state = accumulate([
            record("Doe", "John", "DrugA", "10.40"),
            record("Doe", "John", "DrugA", "5.60"),
        ])
        .unwrap();
        let stats = state.get("DrugA").unwrap();
        assert_eq!(stats.prescriber_count, 1);
        assert_eq!(stats.total_cost, 15);
    }

    #[test]
    fn new_drug_ignores_seen_set() {
        let state = accumulate([
            record("Doe", "John", "DrugA", "1"),
            record("Doe", "John", "DrugB", "1"),
        ])
        .unwrap();
        assert_eq!(state.get("DrugB").unwrap().prescriber_count, 1);
        assert_eq!(state.prescriber_count(), 1);
    }

    #[test]
    fn existing_drug_consults_global_seen_set() {
        let state = accumulate([
            record("Doe", "John", "DrugA", "1"),
            record("Roe", "Jane", "DrugB", "1"),
            record("Doe", "John", "DrugB", "1"),
        ])
        .unwrap();
        assert_eq!(state.get("DrugB").unwrap().prescriber_count, 1);
        assert_eq!(state.get("DrugB").unwrap().total_cost, 2);
    }

    #[test]
    fn drug_names_are_case_sensitive() {
        let state = accumulate([
            record("Doe", "John", "Ambien", "1"),
            record("Roe", "Jane", "AMBIEN", "2"),
        ])
        .unwrap();
        assert_eq!(state.drug_count(), 2);
    }

    #[test]
    fn skips_records_missing_drug_or_cost() {
        let mut aggregator = Aggregator::new();
        aggregator.push(&record("Doe", "John", "DrugA", "10")).unwrap();
        let outcome = aggregator.push(&record("Roe", "Jane", "DrugA", "")).unwrap();
        assert_eq!(outcome, RecordOutcome::Skipped);
        let outcome = aggregator.push(&record("Roe", "Jane", "", "5")).unwrap();
        assert_eq!(outcome, RecordOutcome::Skipped);
        let short: Record = ["1", "Roe", "Jane", "DrugA"].into_iter().collect();
        assert_eq!(aggregator.push(&short).unwrap(), RecordOutcome::Skipped);

        let state = aggregator.finish();
        assert_eq!(state.get("DrugA").unwrap().prescriber_count, 1);
        assert_eq!(state.get("DrugA").unwrap().total_cost, 10);
        assert!(!state.has_seen(&PrescriberIdentity::from_names("Jane", "Roe")));
        assert_eq!(state.records_read(), 4);
        assert_eq!(state.records_skipped(), 3);
    }

    #[test]
    fn malformed_cost_aborts() {
        let result = accumulate([
            record("Doe", "John", "DrugA", "10"),
            record("Roe", "Jane", "DrugA", "ten").with_line(3),
        ]);
        match result {
            Err(AggregateError::MalformedRecord { line, source }) => {
                assert_eq!(line, Some(3));
                assert_eq!(
                    source,
                    ModelError::MalformedCost {
                        value: "ten".to_string()
                    }
                );
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn total_overflow_is_reported() {
        let result = accumulate([
            record("Doe", "John", "DrugA", "9e18"),
            record("Roe", "Jane", "DrugA", "9e18"),
        ]);
        assert!(matches!(
            result,
            Err(AggregateError::CostOverflow { ref drug_name }) if drug_name == "DrugA"
        ));
    }

    #[test]
    fn empty_input_yields_empty_state() {
        let state = accumulate(Vec::new()).unwrap();
        assert!(state.is_empty());
        assert_eq!(state.records_read(), 0);
    }
}
