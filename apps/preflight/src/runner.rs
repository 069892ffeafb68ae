//! Sequential check execution with per-check fault containment.
//!
//! Every check yields exactly one finding. A check that returns `Err` or
//! panics is recorded as a synthesized `FAIL` finding and the run continues.
//! The process panic hook still fires for a panicking check, so the standard
//! panic message is printed to stderr next to the `FAIL` finding.

use crate::check::Check;
use crate::models::{Finding, Status};
use crate::provider::FileProvider;
use chrono::{DateTime, Utc};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// Name used for synthesized findings when a check declares none.
pub const UNKNOWN_CHECK: &str = "unknown check";

/// Source of timestamps for synthesized findings and reports.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same instant.
#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn panic_payload_to_string(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Runs checks in order against one shared provider.
pub struct CheckRunner<'a> {
    files: &'a dyn FileProvider,
    clock: &'a dyn Clock,
}

impl<'a> CheckRunner<'a> {
    pub fn new(files: &'a dyn FileProvider) -> Self {
        Self {
            files,
            clock: &SystemClock,
        }
    }

    pub fn with_clock(files: &'a dyn FileProvider, clock: &'a dyn Clock) -> Self {
        Self { files, clock }
    }

    /// Execute `checks` strictly in order. Output length always equals
    /// `checks.len()`.
    pub fn run_all(&self, checks: &[Box<dyn Check>]) -> Vec<Finding> {
        let findings: Vec<Finding> = checks.iter().map(|c| self.run_one(c.as_ref())).collect();
        let failed = findings.iter().filter(|f| f.status == Status::Fail).count();
        info!(checks = findings.len(), failed, "check run complete");
        findings
    }

    fn run_one(&self, check: &dyn Check) -> Finding {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let name = check.name().to_string();
            (name, check.run(self.files))
        }));
        match outcome {
            Ok((name, Ok(finding))) => {
                debug!(check = %name, status = %finding.status, "check finished");
                finding
            }
            Ok((name, Err(err))) => self.crashed(&name, &err.to_string()),
            Err(payload) => {
                let name = catch_unwind(AssertUnwindSafe(|| check.name().to_string()))
                    .unwrap_or_default();
                let text = panic_payload_to_string(payload.as_ref());
                self.crashed(&name, &format!("panicked: {text}"))
            }
        }
    }

    fn crashed(&self, name: &str, description: &str) -> Finding {
        let name = if name.trim().is_empty() {
            UNKNOWN_CHECK
        } else {
            name
        };
        warn!(check = %name, error = %description, "check crashed");
        Finding::new(
            name,
            Status::Fail,
            format!("check crashed: {description}"),
            self.clock.now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::FnCheck;
    use crate::error::CheckError;
    use crate::provider::MemoryProvider;
    use chrono::TimeZone;

    struct Nameless;

    impl Check for Nameless {
        fn name(&self) -> &str {
            ""
        }

        fn run(&self, _files: &dyn FileProvider) -> Result<Finding, CheckError> {
            Err(CheckError::Message("boom".into()))
        }
    }

    #[test]
    fn test_error_becomes_fail_finding() {
        let files = MemoryProvider::new();
        let checks: Vec<Box<dyn Check>> = vec![Box::new(FnCheck::new("erroring", |_| {
            Err(CheckError::Message("bad input".into()))
        }))];
        let out = CheckRunner::new(&files).run_all(&checks);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "erroring");
        assert_eq!(out[0].status, Status::Fail);
        assert_eq!(out[0].details, "check crashed: bad input");
    }

    #[test]
    fn test_panic_is_contained_and_run_continues() {
        let files = MemoryProvider::new();
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(FnCheck::new("panics", |_| panic!("index out of range"))),
            Box::new(FnCheck::new("after", |_| Ok(Finding::pass("after", "")))),
        ];
        let out = CheckRunner::new(&files).run_all(&checks);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].status, Status::Fail);
        assert!(out[0].details.contains("index out of range"));
        assert_eq!(out[1].name, "after");
        assert_eq!(out[1].status, Status::Pass);
    }

    #[test]
    fn test_nameless_check_uses_unknown_label() {
        let files = MemoryProvider::new();
        let checks: Vec<Box<dyn Check>> = vec![Box::new(Nameless)];
        let out = CheckRunner::new(&files).run_all(&checks);
        assert_eq!(out[0].name, UNKNOWN_CHECK);
    }

    #[test]
    fn test_synthesized_finding_uses_clock() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = FixedClock(at);
        let files = MemoryProvider::new();
        let checks: Vec<Box<dyn Check>> = vec![Box::new(FnCheck::new("x", |_| {
            Err(CheckError::Message("nope".into()))
        }))];
        let out = CheckRunner::with_clock(&files, &clock).run_all(&checks);
        assert_eq!(out[0].timestamp, at);
    }

    #[test]
    fn test_successful_finding_is_verbatim() {
        let files = MemoryProvider::new();
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let expected = Finding::new("custom", Status::Warn, "details", at);
        let returned = expected.clone();
        let checks: Vec<Box<dyn Check>> = vec![Box::new(FnCheck::new("declared", move |_| {
            Ok(returned.clone())
        }))];
        let out = CheckRunner::new(&files).run_all(&checks);
        assert_eq!(out, vec![expected]);
    }
}
