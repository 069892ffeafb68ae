//! Read-only access to the target project's file tree.
//!
//! Checks only see the tree through [`FileProvider`]. Paths passed in and
//! returned are relative to the provider root; listing order is unspecified.

use crate::error::ProviderError;
use glob::{glob_with, MatchOptions, Pattern};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait FileProvider {
    fn exists(&self, path: &Path) -> bool;
    fn read_text(&self, path: &Path) -> Result<String, ProviderError>;
    fn list_matching(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ProviderError>;
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

fn is_current_dir(p: &Path) -> bool {
    p.as_os_str().is_empty() || p == Path::new(".")
}

/// Provider backed by the real filesystem under `root`.
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if is_current_dir(path) {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }
}

impl FileProvider for FsProvider {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read_text(&self, path: &Path) -> Result<String, ProviderError> {
        let abs = self.resolve(path);
        let bytes = fs::read(&abs).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProviderError::NotFound(path.to_path_buf()),
            _ => ProviderError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        String::from_utf8(bytes).map_err(|_| ProviderError::Decode(path.to_path_buf()))
    }

    fn list_matching(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ProviderError> {
        let invalid = |reason: String| ProviderError::InvalidGlob {
            pattern: pattern.to_string(),
            reason,
        };
        Pattern::new(pattern).map_err(|e| invalid(e.to_string()))?;
        let base = self.resolve(root);
        let full = format!(
            "{}/{}",
            Pattern::escape(&base.to_string_lossy()),
            pattern.trim_start_matches("./")
        );
        let entries = glob_with(&full, match_options()).map_err(|e| invalid(e.to_string()))?;
        let mut out = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                ProviderError::Io {
                    path: pathdiff::diff_paths(&path, &self.root).unwrap_or(path),
                    source: e.into_error(),
                }
            })?;
            if !entry.is_file() {
                continue;
            }
            let rel = pathdiff::diff_paths(&entry, &self.root).unwrap_or(entry);
            out.push(rel);
        }
        Ok(out)
    }
}

/// Provider over an in-memory file map, keyed by relative path.
#[derive(Default, Clone)]
pub struct MemoryProvider {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }
}

impl FileProvider for MemoryProvider {
    fn exists(&self, path: &Path) -> bool {
        if is_current_dir(path) {
            return true;
        }
        self.files.contains_key(path) || self.files.keys().any(|k| k.starts_with(path))
    }

    fn read_text(&self, path: &Path) -> Result<String, ProviderError> {
        let bytes = self
            .files
            .get(path)
            .ok_or_else(|| ProviderError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes.clone()).map_err(|_| ProviderError::Decode(path.to_path_buf()))
    }

    fn list_matching(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ProviderError> {
        let pat = Pattern::new(pattern.trim_start_matches("./")).map_err(|e| {
            ProviderError::InvalidGlob {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        let opts = match_options();
        Ok(self
            .files
            .keys()
            .filter(|k| {
                let rel = if is_current_dir(root) {
                    Some(k.as_path())
                } else {
                    k.strip_prefix(root).ok()
                };
                rel.is_some_and(|r| pat.matches_path_with(r, opts))
            })
            .cloned()
            .collect())
    }
}
