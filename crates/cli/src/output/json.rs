// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.

use std::io::Write;

use serde::Serialize;

use super::{FileRewrite, FoundGroups, FoundMatch};

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

#[derive(Debug, Serialize)]
struct MatchesOutput<'a> {
    matches: &'a [FoundMatch],
    total: usize,
}

#[derive(Debug, Serialize)]
struct GroupsOutput<'a> {
    groups: &'a [FoundGroups],
}

#[derive(Debug, Serialize)]
struct RewritesOutput<'a> {
    files: &'a [FileRewrite],
    total: usize,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// `{ "matches": [...], "total": N }`
    pub fn write_matches(&mut self, matches: &[FoundMatch]) -> std::io::Result<()> {
        self.write(&MatchesOutput {
            matches,
            total: matches.len(),
        })
    }

    /// `{ "groups": [...] }`
    pub fn write_groups(&mut self, groups: &[FoundGroups]) -> std::io::Result<()> {
        self.write(&GroupsOutput { groups })
    }

    /// `{ "files": [...], "total": N }`
    pub fn write_rewrites(&mut self, files: &[FileRewrite]) -> std::io::Result<()> {
        self.write(&RewritesOutput {
            files,
            total: files.iter().map(|f| f.total).sum(),
        })
    }

    fn write<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
