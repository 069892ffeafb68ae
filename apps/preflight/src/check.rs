//! The `Check` capability and a closure adapter.

use crate::error::CheckError;
use crate::models::Finding;
use crate::provider::FileProvider;

/// An independent, named validation unit.
///
/// Implementations must be idempotent and must not modify the target tree.
/// Returning `Err` or panicking is tolerated: the runner converts either into
/// a failing finding.
pub trait Check {
    fn name(&self) -> &str;
    fn run(&self, files: &dyn FileProvider) -> Result<Finding, CheckError>;
}

type CheckFn = dyn Fn(&dyn FileProvider) -> Result<Finding, CheckError>;

/// A check built from a name and a closure.
pub struct FnCheck {
    name: String,
    run_fn: Box<CheckFn>,
}

impl FnCheck {
    pub fn new<F>(name: impl Into<String>, run_fn: F) -> Self
    where
        F: Fn(&dyn FileProvider) -> Result<Finding, CheckError> + 'static,
    {
        Self {
            name: name.into(),
            run_fn: Box::new(run_fn),
        }
    }
}

impl Check for FnCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, files: &dyn FileProvider) -> Result<Finding, CheckError> {
        (self.run_fn)(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use crate::provider::MemoryProvider;
    use std::path::Path;

    #[test]
    fn test_fn_check_delegates() {
        let check = FnCheck::new("readme", |files| {
            if files.exists(Path::new("README.md")) {
                Ok(Finding::pass("readme", ""))
            } else {
                Ok(Finding::fail("readme", "README.md missing"))
            }
        });
        assert_eq!(check.name(), "readme");
        let empty = MemoryProvider::new();
        assert_eq!(check.run(&empty).unwrap().status, Status::Fail);
        let with = MemoryProvider::new().with_file("README.md", "");
        assert_eq!(check.run(&with).unwrap().status, Status::Pass);
    }
}
