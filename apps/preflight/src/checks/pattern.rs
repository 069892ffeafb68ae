use super::summarize_hits;
use crate::check::Check;
use crate::error::CheckError;
use crate::models::rule::PatternMode;
use crate::models::{Finding, Status};
use crate::provider::FileProvider;
use chrono::Utc;
use regex::Regex;
use std::path::Path;

/// Regex scan over files matching `pattern`.
///
/// `Forbid` flags files whose content matches; `Require` flags files that
/// do not.
pub struct PatternCheck {
    pub name: String,
    pub pattern: String,
    pub regex: String,
    pub mode: PatternMode,
    pub message: Option<String>,
    pub status: Status,
}

impl PatternCheck {
    fn hit_message(&self) -> String {
        self.message.clone().unwrap_or_else(|| match self.mode {
            PatternMode::Forbid => format!("matches forbidden pattern /{}/", self.regex),
            PatternMode::Require => format!("missing required pattern /{}/", self.regex),
        })
    }
}

impl Check for PatternCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, files: &dyn FileProvider) -> Result<Finding, CheckError> {
        let re = Regex::new(&self.regex).map_err(|e| CheckError::InvalidPattern {
            pattern: self.regex.clone(),
            reason: e.to_string(),
        })?;
        let targets = files.list_matching(Path::new("."), &self.pattern)?;
        let message = self.hit_message();
        let mut hits = Vec::new();
        for path in &targets {
            match files.read_text(path) {
                Ok(content) => {
                    let matched = re.is_match(&content);
                    let hit = match self.mode {
                        PatternMode::Forbid => matched,
                        PatternMode::Require => !matched,
                    };
                    if hit {
                        hits.push(format!("{}: {message}", path.display()));
                    }
                }
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
