//! Built-in checks constructed from `[[checks]]` config entries.
//!
//! - `required_files`: path existence.
//! - `contains`: literal markers inside one file.
//! - `rule`: conditional marker rule across a glob.
//! - `pattern`: regex forbidden in, or required by, files across a glob.

mod contains;
mod pattern;
mod required_files;
mod rule;

pub use contains::ContainsCheck;
pub use pattern::PatternCheck;
pub use required_files::RequiredFilesCheck;
pub use rule::RuleCheck;

use crate::check::Check;
use crate::models::rule::{CheckDef, Level};
use crate::models::Status;

fn status_or(level: Option<Level>, default: Level) -> Status {
    level.unwrap_or(default).into()
}

/// Render collected hits as one details string, sorted for stable output.
fn summarize_hits(mut hits: Vec<String>) -> String {
    hits.sort();
    format!("found {} issue(s): {}", hits.len(), hits.join("; "))
}

/// Instantiate every configured check, preserving declaration order.
pub fn build_checks(defs: &[CheckDef]) -> Vec<Box<dyn Check>> {
    defs.iter().map(build_check).collect()
}

fn build_check(def: &CheckDef) -> Box<dyn Check> {
    match def.clone() {
        CheckDef::RequiredFiles { name, files, level } => Box::new(RequiredFilesCheck {
            name,
            files,
            status: status_or(level, Level::Fail),
        }),
        CheckDef::Contains {
            name,
            file,
            markers,
            required,
            level,
        } => Box::new(ContainsCheck {
            name,
            file,
            markers,
            required,
            status: status_or(level, Level::Warn),
        }),
        CheckDef::Rule {
            name,
            pattern,
            when,
            unless,
            message,
            level,
        } => Box::new(RuleCheck {
            name,
            pattern,
            when,
            unless,
            message,
            status: status_or(level, Level::Warn),
        }),
        CheckDef::Pattern {
            name,
            pattern,
            regex,
            mode,
            message,
            level,
        } => Box::new(PatternCheck {
            name,
            pattern,
            regex,
            mode,
            message,
            status: status_or(level, Level::Warn),
        }),
    }
}
