//! Output rendering for check runs and check listings.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is the
//! serialized report artifact itself.

use crate::error::ReportError;
use crate::models::rule::CheckDef;
use crate::models::{Report, Status, Summary};
use crate::report::ReportBuilder;
use owo_colors::OwoColorize;
use std::io::{self, Write};

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn status_tag(status: Status, color: bool) -> String {
    let (icon, tag) = match status {
        Status::Pass => ("✔", "⟦pass⟧"),
        Status::Warn => ("▲", "⟦warn⟧"),
        Status::Fail => ("✖", "⟦fail⟧"),
    };
    if !color {
        return format!("{icon} {tag}");
    }
    match status {
        Status::Pass => format!("{} {}", icon.green(), tag.green().bold()),
        Status::Warn => format!("{} {}", icon.yellow(), tag.yellow().bold()),
        Status::Fail => format!("{} {}", icon.red(), tag.red().bold()),
    }
}

/// Recommendations derived from the summary, in display order.
pub fn recommendations(summary: &Summary, issue_count: usize) -> Vec<&'static str> {
    let mut out = Vec::new();
    if summary.failed > 0 {
        out.push("Fix failing checks before handing the project off");
    }
    if summary.warned > 0 {
        out.push("Address warnings to improve quality");
    }
    if issue_count == 0 {
        out.push("No issues found; ready for the next stage");
    } else {
        out.push("Review and fix the issues listed above");
    }
    out
}

/// Write the human-readable rendering of `report` to `w`.
pub fn render_human(report: &Report, color: bool, w: &mut dyn Write) -> io::Result<()> {
    for f in &report.results {
        let name = if color {
            f.name.bold().to_string()
        } else {
            f.name.clone()
        };
        writeln!(w, "{} {}", status_tag(f.status, color), name)?;
        if !f.details.is_empty() {
            writeln!(w, "    {}", f.details)?;
        }
    }
    if !report.issues.is_empty() {
        writeln!(w)?;
        writeln!(w, "Issues ({}):", report.issues.len())?;
        for (i, issue) in report.issues.iter().enumerate() {
            writeln!(w, "  {}. {}", i + 1, issue)?;
        }
    }
    let s = &report.summary;
    let summary = format!(
        "— Summary — total={} passed={} warned={} failed={}",
        s.total, s.passed, s.warned, s.failed
    );
    writeln!(w)?;
    if color {
        writeln!(w, "{}", summary.bold())?;
    } else {
        writeln!(w, "{}", summary)?;
    }
    for r in recommendations(s, report.issues.len()) {
        writeln!(w, "  - {}", r)?;
    }
    Ok(())
}

/// Print a report in the requested format to stdout.
pub fn print_report(report: &Report, output: &str) -> Result<(), ReportError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let io_err = |source| ReportError::Io {
        path: "<stdout>".into(),
        source,
    };
    match output {
        "json" => lock
            .write_all(&ReportBuilder::serialize(report)?)
            .map_err(io_err),
        _ => render_human(report, use_colors(output), &mut lock).map_err(io_err),
    }
}

/// Print configured checks in execution order.
pub fn print_check_list(defs: &[CheckDef], output: &str) {
    match output {
        "json" => {
            let items: Vec<_> = defs
                .iter()
                .map(|d| serde_json::json!({ "name": d.name(), "kind": d.kind() }))
                .collect();
            println!("{}", serde_json::Value::Array(items));
        }
        _ => {
            let color = use_colors(output);
            for (i, d) in defs.iter().enumerate() {
                if color {
                    println!("{:>3}. {} {}", i + 1, d.name().bold(), d.kind().bright_black());
                } else {
                    println!("{:>3}. {} ({})", i + 1, d.name(), d.kind());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Finding;
    use chrono::Utc;

    fn report() -> Report {
        Report {
            summary: Summary {
                total: 2,
                passed: 1,
                warned: 0,
                failed: 1,
            },
            results: vec![
                Finding::pass("Structure", ""),
                Finding::fail("Docs", "missing files: LICENSE"),
            ],
            issues: vec!["missing files: LICENSE".into()],
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_human_plain() {
        let mut buf = Vec::new();
        render_human(&report(), false, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("✔ ⟦pass⟧ Structure"));
        assert!(text.contains("✖ ⟦fail⟧ Docs\n    missing files: LICENSE"));
        assert!(text.contains("  1. missing files: LICENSE"));
        assert!(text.contains("total=2 passed=1 warned=0 failed=1"));
        assert!(text.contains("Fix failing checks"));
    }

    #[test]
    fn test_recommendations_clean_run() {
        let recs = recommendations(&Summary::default(), 0);
        assert_eq!(recs, vec!["No issues found; ready for the next stage"]);
    }
}
