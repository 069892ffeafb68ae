//! Configuration discovery and effective settings resolution.
//!
//! Preflight reads `preflight.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `root`: the directory holding the config file
//! - `output`: `human`
//! - `report`: `test_report.json`
//! - `fail_on_warn`: false
//! - `checks`: none
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use crate::models::rule::CheckDef;
use crate::report::DEFAULT_REPORT_PATH;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["preflight.toml", "preflight.yaml", "preflight.yml"];
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `preflight.toml|yaml`.
pub struct PreflightConfig {
    /// Target project root, relative to the config file directory.
    pub root: Option<String>,
    pub output: Option<String>,
    /// Report artifact path; an empty string disables writing.
    pub report: Option<String>,
    pub fail_on_warn: Option<bool>,
    #[serde(default)]
    pub checks: Vec<CheckDef>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub config_dir: PathBuf,
    pub config_found: bool,
    pub target_root: PathBuf,
    pub output: String,
    pub report: Option<PathBuf>,
    pub fail_on_warn: bool,
    pub checks: Vec<CheckDef>,
}

/// CLI-provided overrides; `None` defers to the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides<'a> {
    pub repo_root: Option<&'a str>,
    pub root: Option<&'a str>,
    pub output: Option<&'a str>,
    pub report: Option<&'a str>,
    pub no_report: bool,
    pub fail_on_warn: Option<bool>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `preflight.toml|yaml|yml` or a `.git` directory is found.
/// A relative `start` is resolved against the current directory first so
/// the walk can reach its ancestors.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(start))
            .unwrap_or_else(|_| start.to_path_buf())
    };
    let mut cur = start.as_path();
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) if !p.as_os_str().is_empty() => cur = p,
            _ => return start.clone(),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `PreflightConfig` from `preflight.toml` or `preflight.yaml|yml` if
/// present. A present but invalid file is an error.
pub fn load_config(root: &Path) -> Result<Option<PreflightConfig>, ConfigError> {
    let toml_path = root.join("preflight.toml");
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|e| ConfigError::Parse {
            path: toml_path.clone(),
            reason: e.to_string(),
        })?;
        return Ok(Some(cfg));
    }
    for yml in ["preflight.yaml", "preflight.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|e| ConfigError::Parse {
                path: p.clone(),
                reason: e.to_string(),
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides<'_>) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli.repo_root.unwrap_or("."));
    let config_dir = detect_repo_root(&start);
    let loaded = load_config(&config_dir)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let target_root = match (cli.root, cfg.root.as_deref()) {
        (Some(r), _) => PathBuf::from(r),
        (None, Some(r)) => config_dir.join(r),
        (None, None) => config_dir.clone(),
    };

    let output = cli
        .output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if !OUTPUT_MODES.contains(&output.as_str()) {
        return Err(ConfigError::Invalid {
            key: "output".into(),
            value: output,
        });
    }

    let report = if cli.no_report {
        None
    } else {
        let raw = cli
            .report
            .map(|s| s.to_string())
            .or(cfg.report)
            .unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string());
        if raw.is_empty() {
            None
        } else {
            Some(PathBuf::from(raw))
        }
    };

    let fail_on_warn = cli.fail_on_warn.or(cfg.fail_on_warn).unwrap_or(false);

    Ok(Effective {
        config_dir,
        config_found,
        target_root,
        output,
        report,
        fail_on_warn,
        checks: cfg.checks,
    })
}
