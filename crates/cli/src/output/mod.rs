// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for command results.

use serde::Serialize;

use crate::pattern::LineMatch;
use crate::rules::Rewrite;

pub mod json;
pub mod text;

/// Label used for standard input.
pub const STDIN_LABEL: &str = "-";

/// One match found in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundMatch {
    pub path: String,
    pub line: u32,
    pub offset: usize,
    pub text: String,
    #[serde(skip)]
    pub column: usize,
    #[serde(skip)]
    pub line_content: String,
}

impl FoundMatch {
    pub fn new(path: &str, m: LineMatch) -> Self {
        Self {
            path: path.to_string(),
            line: m.line,
            offset: m.offset,
            text: m.text,
            column: m.column,
            line_content: m.line_content,
        }
    }
}

/// Groups captured by one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundGroups {
    pub path: String,
    pub groups: Vec<String>,
}

/// Substitution counts for one rewritten input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRewrite {
    pub path: String,
    pub total: usize,
    pub rules: Vec<RuleCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCount {
    pub name: String,
    pub count: usize,
}

impl FileRewrite {
    pub fn new(path: &str, rewrite: &Rewrite) -> Self {
        Self {
            path: path.to_string(),
            total: rewrite.total(),
            rules: rewrite
                .counts
                .iter()
                .map(|(name, count)| RuleCount {
                    name: name.clone(),
                    count: *count,
                })
                .collect(),
        }
    }
}
