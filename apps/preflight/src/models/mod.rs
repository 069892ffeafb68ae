//! Shared data models for findings, summaries, and the final report.

pub mod rule;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
/// Outcome of a single check. Ordered by severity: `Pass < Warn < Fail`.
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Warn => "WARN",
            Status::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// The atomic output of one check execution.
pub struct Finding {
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl Finding {
    pub fn new(
        name: impl Into<String>,
        status: Status,
        details: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            details: details.into(),
            timestamp,
        }
    }

    pub fn pass(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, Status::Pass, details, Utc::now())
    }

    pub fn warn(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, Status::Warn, details, Utc::now())
    }

    pub fn fail(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, Status::Fail, details, Utc::now())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Per-status counters. `total == passed + warned + failed`.
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Immutable aggregate of one run.
pub struct Report {
    pub summary: Summary,
    pub results: Vec<Finding>,
    pub issues: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Highest severity across all results, `None` for an empty report.
    pub fn worst_status(&self) -> Option<Status> {
        self.results.iter().map(|f| f.status).max()
    }
}
