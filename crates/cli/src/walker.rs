// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input discovery with gitignore support.
//!
//! Explicit file arguments are taken as-is; directories are walked with
//! the `ignore` crate, respecting `.gitignore`, exclude globs and a depth
//! limit.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::config::WalkConfig;
use crate::error::{Error, Result};

/// Directories never worth searching.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth.
    pub max_depth: Option<usize>,

    /// Exclude globs (walker-level: prevents I/O on subtrees).
    pub exclude_patterns: Vec<String>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        WalkerConfig::from(&WalkConfig::default())
    }
}

impl From<&WalkConfig> for WalkerConfig {
    fn from(config: &WalkConfig) -> Self {
        Self {
            max_depth: Some(config.max_depth),
            exclude_patterns: config.exclude.clone(),
            git_ignore: config.git_ignore,
            hidden: !config.hidden,
        }
    }
}

/// Collects the files a command should read.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Expand paths into a list of files.
    ///
    /// Files named explicitly are always kept. Directory contents are
    /// sorted per root so output order is stable.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                files.extend(self.walk(path)?);
            } else if path.exists() {
                files.push(path.clone());
            } else {
                return Err(Error::Io {
                    path: path.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
                });
            }
        }
        tracing::debug!("collected {} input file(s)", files.len());
        Ok(files)
    }

    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .require_git(false)
            .follow_links(true)
            .max_depth(self.config.max_depth);

        // Override globs without `!` whitelist; with `!` they exclude.
        if !self.config.exclude_patterns.is_empty() {
            let mut overrides = OverrideBuilder::new(root);
            for pattern in &self.config.exclude_patterns {
                overrides.add(&format!("!{}", pattern)).map_err(|e| Error::Walk {
                    message: format!("invalid exclude pattern '{}': {}", pattern, e),
                })?;
            }
            let overrides = overrides.build().map_err(|e| Error::Walk {
                message: e.to_string(),
            })?;
            builder.overrides(overrides);
        }

        builder.filter_entry(|entry| {
            !entry.file_type().is_some_and(|t| t.is_dir())
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
        });

        let mut files = Vec::new();
        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|t| t.is_file()) {
                        files.push(entry.into_path());
                    }
                }
                Err(err) if is_loop_error(&err) => {
                    tracing::warn!("Symlink loop detected: {}", err);
                }
                Err(err) => {
                    tracing::warn!("Walk error: {}", err);
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
