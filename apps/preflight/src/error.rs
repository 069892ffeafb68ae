//! Error types for providers, checks, report output, and configuration.
//!
//! Only `ReportError` and `ConfigError` ever reach the binary. Provider and
//! check errors are folded into findings by the checks or the runner.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a `FileProvider`.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("file is not valid UTF-8: {}", .0.display())]
    Decode(PathBuf),

    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures a check may return instead of a finding.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{0}")]
    Message(String),
}

/// Failures while encoding or persisting a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while loading `preflight.{toml,yaml}`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("invalid value for {key}: '{value}' (expected human|json)")]
    Invalid { key: String, value: String },
}
