//! Check definitions as declared under `[[checks]]` in the config file.
//!
//! Each entry is tagged by `kind`:
//! - `required_files`: listed paths must exist.
//! - `contains`: a single file must contain every marker.
//! - `rule`: files matching a glob are flagged when all `when` markers are
//!   present and no `unless` marker is.
//! - `pattern`: a regex is forbidden in, or required by, matching files.
//!
//! `level` selects the status reported when a check finds something.

use crate::models::Status;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Status a configured check reports when it is not satisfied.
pub enum Level {
    Warn,
    Fail,
}

impl From<Level> for Status {
    fn from(level: Level) -> Self {
        match level {
            Level::Warn => Status::Warn,
            Level::Fail => Status::Fail,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    #[default]
    Forbid,
    Require,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A configured check.
pub enum CheckDef {
    RequiredFiles {
        name: String,
        files: Vec<String>,
        #[serde(default)]
        level: Option<Level>,
    },
    Contains {
        name: String,
        file: String,
        markers: Vec<String>,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        level: Option<Level>,
    },
    Rule {
        name: String,
        pattern: String,
        #[serde(default)]
        when: Vec<String>,
        #[serde(default)]
        unless: Vec<String>,
        message: String,
        #[serde(default)]
        level: Option<Level>,
    },
    Pattern {
        name: String,
        pattern: String,
        regex: String,
        #[serde(default)]
        mode: PatternMode,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        level: Option<Level>,
    },
}

impl CheckDef {
    pub fn name(&self) -> &str {
        match self {
            CheckDef::RequiredFiles { name, .. }
            | CheckDef::Contains { name, .. }
            | CheckDef::Rule { name, .. }
            | CheckDef::Pattern { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CheckDef::RequiredFiles { .. } => "required_files",
            CheckDef::Contains { .. } => "contains",
            CheckDef::Rule { .. } => "rule",
            CheckDef::Pattern { .. } => "pattern",
        }
    }
}
