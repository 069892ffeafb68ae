//! Folds findings into summary counters and a flat issue list.
//!
//! Issue policy: a non-passing finding with non-empty `details` contributes
//! exactly one issue, the details string verbatim. Empty details contribute
//! nothing. Passing findings never contribute.

use crate::models::{Finding, Status, Summary};

#[derive(Debug, Default, Clone)]
/// Running counters plus collected issues.
pub struct ResultAggregator {
    summary: Summary,
    issues: Vec<String>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finding into the running state.
    pub fn push(&mut self, finding: &Finding) {
        self.summary.total += 1;
        match finding.status {
            Status::Pass => {
                self.summary.passed += 1;
                return;
            }
            Status::Warn => self.summary.warned += 1,
            Status::Fail => self.summary.failed += 1,
        }
        if !finding.details.is_empty() {
            self.issues.push(finding.details.clone());
        }
    }

    pub fn finish(self) -> (Summary, Vec<String>) {
        (self.summary, self.issues)
    }

    /// Fold a whole sequence. Total over every input, including an empty one.
    pub fn fold(findings: &[Finding]) -> (Summary, Vec<String>) {
        let mut agg = Self::new();
        for f in findings {
            agg.push(f);
        }
        agg.finish()
    }
}
