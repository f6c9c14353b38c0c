//! Report pipeline stages.
//!
//! 1. Aggregate: stream the input file through an [`Aggregator`]
//! 2. Rank: order the finished state
//! 3. Output: write the report (skipped on dry runs)

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use rx_core::{AggregationState, Aggregator, RunOptions, rank_with};
use rx_ingest::RecordReader;
use rx_model::RankedEntry;
use rx_report::write_report;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: RunOptions,
    pub dry_run: bool,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records_read: usize,
    pub records_skipped: usize,
    pub distinct_drugs: usize,
    pub distinct_prescribers: usize,
}

impl RunSummary {
    pub fn from_state(state: &AggregationState) -> Self {
        Self {
            records_read: state.records_read(),
            records_skipped: state.records_skipped(),
            distinct_drugs: state.drug_count(),
            distinct_prescribers: state.prescriber_count(),
        }
    }
}

#[derive(Debug)]
pub struct ReportRun {
    pub input: PathBuf,
    /// `None` on dry runs.
    pub output: Option<PathBuf>,
    pub entries: Vec<RankedEntry>,
    pub summary: RunSummary,
}

/// Stream every record of `input` into a fresh aggregator.
pub fn aggregate_file(input: &Path) -> Result<AggregationState> {
    let reader =
        RecordReader::open(input).with_context(|| format!("open input: {}", input.display()))?;
    let mut aggregator = Aggregator::new();
    for record in reader {
        let record = record.with_context(|| format!("read input: {}", input.display()))?;
        aggregator
            .push(&record)
            .with_context(|| format!("aggregate input: {}", input.display()))?;
    }
    Ok(aggregator.finish())
}

pub fn run(config: &ReportConfig) -> Result<ReportRun> {
    let run_span = info_span!("report", input = %config.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let state = info_span!("aggregate").in_scope(|| aggregate_file(&config.input))?;
    let summary = RunSummary::from_state(&state);
    info!(
        records = summary.records_read,
        skipped = summary.records_skipped,
        drugs = summary.distinct_drugs,
        prescribers = summary.distinct_prescribers,
        "aggregation complete"
    );

    let entries = info_span!("rank").in_scope(|| rank_with(state, config.options.tie_break));
    debug!(tie_break = ?config.options.tie_break, rows = entries.len(), "ranked drugs");

    let output = if config.dry_run {
        info!("dry run: report not written");
        None
    } else {
        info_span!("output", path = %config.output.display())
            .in_scope(|| write_report(&config.output, &entries))
            .with_context(|| format!("write report: {}", config.output.display()))?;
        Some(config.output.clone())
    };

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(ReportRun {
        input: config.input.clone(),
        output,
        entries,
        summary,
    })
}
