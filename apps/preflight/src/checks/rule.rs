use super::summarize_hits;
use crate::check::Check;
use crate::error::CheckError;
use crate::models::{Finding, Status};
use crate::provider::FileProvider;
use chrono::Utc;
use std::path::Path;

/// Flags each file under `pattern` that contains every `when` marker and
/// none of the `unless` markers.
pub struct RuleCheck {
    pub name: String,
    pub pattern: String,
    pub when: Vec<String>,
    pub unless: Vec<String>,
    pub message: String,
    pub status: Status,
}

impl RuleCheck {
    fn applies(&self, content: &str) -> bool {
        self.when.iter().all(|m| content.contains(m.as_str()))
            && !self.unless.iter().any(|m| content.contains(m.as_str()))
    }
}

impl Check for RuleCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, files: &dyn FileProvider) -> Result<Finding, CheckError> {
        let targets = files.list_matching(Path::new("."), &self.pattern)?;
        let mut hits = Vec::new();
        for path in &targets {
            match files.read_text(path) {
                Ok(content) if self.applies(&content) => {
                    hits.push(format!("{}: {}", path.display(), self.message));
                }
                Ok(_) => {}
                Err(e) => hits.push(format!("{}: error reading file - {e}", path.display())),
            }
        }
        if hits.is_empty() {
            Ok(Finding::pass(
                &self.name,
                format!("no issues across {} file(s)", targets.len()),
            ))
        } else {
            Ok(Finding::new(&self.name, self.status, summarize_hits(hits), Utc::now()))
        }
    }
}
