//! Report assembly and JSON serialization.
//!
//! The artifact schema is fixed:
//! `{ "summary": {total, passed, warned, failed}, "results": [...],
//! "issues": [...], "generated_at": "<rfc3339>" }`.
//! `results` and `issues` keep their input order.

use crate::error::ReportError;
use crate::models::{Finding, Report, Summary};
use crate::runner::{Clock, SystemClock};
use std::fs;
use std::path::Path;
use tracing::info;

/// Default artifact path, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "test_report.json";

pub struct ReportBuilder<'a> {
    clock: &'a dyn Clock,
}

impl Default for ReportBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ReportBuilder<'a> {
    pub fn new() -> Self {
        Self {
            clock: &SystemClock,
        }
    }

    pub fn with_clock(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Package already-aggregated values. Nothing is recomputed.
    pub fn build(&self, findings: Vec<Finding>, summary: Summary, issues: Vec<String>) -> Report {
        Report {
            summary,
            results: findings,
            issues,
            generated_at: self.clock.now(),
        }
    }

    pub fn serialize(report: &Report) -> Result<Vec<u8>, ReportError> {
        let mut bytes = serde_json::to_vec_pretty(report)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Report, ReportError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize and overwrite the artifact at `path`.
    pub fn write_to(report: &Report, path: &Path) -> Result<(), ReportError> {
        let bytes = Self::serialize(report)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, bytes).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use crate::runner::FixedClock;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn sample() -> Report {
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 8, 30, 0).unwrap();
        let findings = vec![
            Finding::new("Structure", Status::Pass, "", at),
            Finding::new("Docs", Status::Warn, "missing docs: LICENSE", at),
        ];
        let summary = Summary {
            total: 2,
            passed: 1,
            warned: 1,
            failed: 0,
        };
        ReportBuilder::with_clock(&FixedClock(at)).build(
            findings,
            summary,
            vec!["missing docs: LICENSE".into()],
        )
    }

    #[test]
    fn test_build_stamps_clock_time() {
        let report = sample();
        assert_eq!(
            report.generated_at,
            Utc.with_ymd_and_hms(2025, 3, 9, 8, 30, 0).unwrap()
        );
        assert_eq!(report.results.len(), 2);
    }

    #[test]
    fn test_schema_shape() {
        let bytes = ReportBuilder::serialize(&sample()).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["summary"]["total"], 2);
        assert_eq!(v["summary"]["warned"], 1);
        assert_eq!(v["results"][1]["status"], "WARN");
        assert_eq!(v["results"][0]["details"], "");
        assert_eq!(v["issues"][0], "missing docs: LICENSE");
        assert!(v["generated_at"].is_string());
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let report = sample();
        let back = ReportBuilder::deserialize(&ReportBuilder::serialize(&report).unwrap()).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(matches!(
            ReportBuilder::deserialize(b"{not json"),
            Err(ReportError::Encoding(_))
        ));
    }

    #[test]
    fn test_write_overwrites_existing_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/test_report.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale content that is longer than nothing").unwrap();
        ReportBuilder::write_to(&sample(), &path).unwrap();
        let back = ReportBuilder::deserialize(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(back, sample());
    }
}
