//! End-to-end run: execute checks, fold findings, build the report.

use crate::aggregate::ResultAggregator;
use crate::check::Check;
use crate::models::Report;
use crate::provider::FileProvider;
use crate::report::ReportBuilder;
use crate::runner::{CheckRunner, Clock, SystemClock};
use tracing::info;

/// Run `checks` in order against `files` and assemble the report.
pub fn run_pipeline(files: &dyn FileProvider, checks: &[Box<dyn Check>]) -> Report {
    run_pipeline_with_clock(files, checks, &SystemClock)
}

pub fn run_pipeline_with_clock(
    files: &dyn FileProvider,
    checks: &[Box<dyn Check>],
    clock: &dyn Clock,
) -> Report {
    let findings = CheckRunner::with_clock(files, clock).run_all(checks);
    let (summary, issues) = ResultAggregator::fold(&findings);
    info!(
        total = summary.total,
        passed = summary.passed,
        warned = summary.warned,
        failed = summary.failed,
        issues = issues.len(),
        "report assembled"
    );
    ReportBuilder::with_clock(clock).build(findings, summary, issues)
}
