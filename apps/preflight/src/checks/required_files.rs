use crate::check::Check;
use crate::error::CheckError;
use crate::models::{Finding, Status};
use crate::provider::FileProvider;
use std::path::Path;

/// Every listed path must exist in the target tree.
pub struct RequiredFilesCheck {
    pub name: String,
    pub files: Vec<String>,
    pub status: Status,
}

impl Check for RequiredFilesCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, files: &dyn FileProvider) -> Result<Finding, CheckError> {
        let missing: Vec<&str> = self
            .files
            .iter()
            .map(String::as_str)
            .filter(|f| !files.exists(Path::new(f)))
            .collect();
        if missing.is_empty() {
            Ok(Finding::pass(
                &self.name,
                format!("all {} required files present", self.files.len()),
            ))
        } else {
            let details = format!("missing files: {}", missing.join(", "));
            Ok(Finding::new(&self.name, self.status, details, chrono::Utc::now()))
        }
    }
}
