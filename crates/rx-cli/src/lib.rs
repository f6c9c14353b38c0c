//! CLI library components for the drug cost report.

pub mod logging;
pub mod pipeline;
