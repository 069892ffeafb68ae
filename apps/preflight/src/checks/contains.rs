use crate::check::Check;
use crate::error::{CheckError, ProviderError};
use crate::models::{Finding, Status};
use crate::provider::FileProvider;
use chrono::Utc;
use std::path::Path;

/// A single file must contain every marker literally.
pub struct ContainsCheck {
    pub name: String,
    pub file: String,
    pub markers: Vec<String>,
    /// When false, an absent file passes.
    pub required: bool,
    pub status: Status,
}

impl Check for ContainsCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, files: &dyn FileProvider) -> Result<Finding, CheckError> {
        let content = match files.read_text(Path::new(&self.file)) {
            Ok(s) => s,
            Err(ProviderError::NotFound(_)) if !self.required => {
                return Ok(Finding::pass(
                    &self.name,
                    format!("{} not present; skipped", self.file),
                ));
            }
            Err(e) => {
                return Ok(Finding::new(
                    &self.name,
                    self.status,
                    format!("error reading {}: {e}", self.file),
                    Utc::now(),
                ));
            }
        };
        let missing: Vec<&str> = self
            .markers
            .iter()
            .map(String::as_str)
            .filter(|m| !content.contains(m))
            .collect();
        if missing.is_empty() {
            Ok(Finding::pass(
                &self.name,
                format!("{} contains all {} markers", self.file, self.markers.len()),
            ))
        } else {
            Ok(Finding::new(
                &self.name,
                self.status,
                format!("missing in {}: {}", self.file, missing.join(", ")),
                Utc::now(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MemoryProvider;

    fn check(required: bool) -> ContainsCheck {
        ContainsCheck {
            name: "README sections".into(),
            file: "README.md".into(),
            markers: vec!["Features".into(), "Installation".into(), "Usage".into()],
            required,
            status: Status::Warn,
        }
    }

    #[test]
    fn test_missing_markers_reported() {
        let files = MemoryProvider::new().with_file("README.md", "## Features\n## Usage\n");
        let f = check(false).run(&files).unwrap();
        assert_eq!(f.status, Status::Warn);
        assert_eq!(f.details, "missing in README.md: Installation");
    }

    #[test]
    fn test_absent_optional_file_passes() {
        let f = check(false).run(&MemoryProvider::new()).unwrap();
        assert_eq!(f.status, Status::Pass);
    }

    #[test]
    fn test_absent_required_file_is_reported() {
        let f = check(true).run(&MemoryProvider::new()).unwrap();
        assert_eq!(f.status, Status::Warn);
        assert!(f.details.contains("file not found"));
    }

    #[test]
    fn test_undecodable_file_is_reported() {
        let files = MemoryProvider::new().with_file("README.md", vec![0xff, 0xfe]);
        let f = check(false).run(&files).unwrap();
        assert_eq!(f.status, Status::Warn);
        assert!(f.details.contains("not valid UTF-8"));
    }
}
