use anyhow::Result;

use rx_core::{RunOptions, TieBreak};

use crate::cli::{ReportArgs, TieBreakArg};
use rx_cli::pipeline::{ReportConfig, ReportRun, run};

pub fn run_report(args: &ReportArgs) -> Result<ReportRun> {
    let tie_break = match args.tie_break {
        TieBreakArg::Asc => TieBreak::Ascending,
        TieBreakArg::Desc => TieBreak::Descending,
    };
    let config = ReportConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        options: RunOptions::new().with_tie_break(tie_break),
        dry_run: args.dry_run,
    };
    run(&config)
}
