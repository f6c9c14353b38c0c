//! Options for a report run.

use serde::{Deserialize, Serialize};

use crate::rank::TieBreak;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Drug-name direction applied when total costs tie.
    pub tie_break: TieBreak,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
