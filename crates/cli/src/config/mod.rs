// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles retext.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::{MatchingOptions, RegexOptions};

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "retext.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    walk: Option<toml::Value>,

    #[serde(default)]
    rule: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Input discovery settings.
    #[serde(default)]
    pub walk: WalkConfig,

    /// Rewrite rules, applied in order.
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
}

/// Input discovery settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WalkConfig {
    /// Maximum directory depth (default: 100).
    #[serde(default = "WalkConfig::default_max_depth")]
    pub max_depth: usize,

    /// Include hidden files and directories.
    #[serde(default)]
    pub hidden: bool,

    /// Respect .gitignore files (default: true).
    #[serde(default = "WalkConfig::default_git_ignore")]
    pub git_ignore: bool,

    /// Glob patterns to skip (e.g., "*.min.js", "vendor/**").
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
            hidden: false,
            git_ignore: Self::default_git_ignore(),
            exclude: Vec::new(),
        }
    }
}

impl WalkConfig {
    fn default_max_depth() -> usize {
        100
    }

    fn default_git_ignore() -> bool {
        true
    }
}

/// One `[[rule]]` entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleConfig {
    /// Rule name used in diagnostics.
    pub name: String,

    /// Regular expression to match.
    pub pattern: String,

    /// Replacement template (`{N}` inserts group N).
    #[serde(default)]
    pub replace: String,

    #[serde(default)]
    pub case_insensitive: bool,

    #[serde(default)]
    pub multi_line: bool,

    #[serde(default)]
    pub dot_matches_new_line: bool,

    #[serde(default)]
    pub ignore_whitespace: bool,

    /// Treat the pattern as a literal string.
    #[serde(default)]
    pub literal: bool,

    /// Only replace a contiguous run of matches from the start.
    #[serde(default)]
    pub anchored: bool,
}

impl RuleConfig {
    pub fn regex_options(&self) -> RegexOptions {
        RegexOptions {
            case_insensitive: self.case_insensitive,
            multi_line: self.multi_line,
            dot_matches_new_line: self.dot_matches_new_line,
            ignore_whitespace: self.ignore_whitespace,
            ignore_metacharacters: self.literal,
            ..RegexOptions::default()
        }
    }

    pub fn matching_options(&self) -> MatchingOptions {
        MatchingOptions {
            anchored: self.anchored,
        }
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "walk", "rule"];

/// Known walk keys in the config.
const KNOWN_WALK_KEYS: &[&str] = &["max_depth", "hidden", "git_ignore", "exclude"];

/// Known rule keys in the config.
const KNOWN_RULE_KEYS: &[&str] = &[
    "name",
    "pattern",
    "replace",
    "case_insensitive",
    "multi_line",
    "dot_matches_new_line",
    "ignore_whitespace",
    "literal",
    "anchored",
];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade retext to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Parse full config
    toml::from_str(content).map_err(|e| config_error(e, path))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_error(e, path))?;
    for key in unknown_keys(&flexible) {
        warn_unknown_key(path, &key);
    }

    Ok(config)
}

/// Dotted paths of every key the config does not recognize.
fn unknown_keys(flexible: &FlexibleConfig) -> Vec<String> {
    let mut unknown: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    if let Some(toml::Value::Table(t)) = &flexible.walk {
        unknown.extend(
            t.keys()
                .filter(|key| !KNOWN_WALK_KEYS.contains(&key.as_str()))
                .map(|key| format!("walk.{}", key)),
        );
    }

    if let Some(toml::Value::Array(rules)) = &flexible.rule {
        for (i, rule) in rules.iter().enumerate() {
            if let toml::Value::Table(t) = rule {
                unknown.extend(
                    t.keys()
                        .filter(|key| !KNOWN_RULE_KEYS.contains(&key.as_str()))
                        .map(|key| format!("rule[{}].{}", i, key)),
                );
            }
        }
    }

    unknown
}

fn config_error(e: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::debug!("unknown config key {} in {}", key, path.display());
    eprintln!(
        "retext: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
