// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <path>:<line>: <line content>
//! <path>:<group0>\t<group1>...
//! <path>: <N> substitution(s)
//!   <rule>: <count>
//! ```

use std::io::Write;
use termcolor::WriteColor;

use super::{FileRewrite, FoundGroups, FoundMatch};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one match as `path:line: content`, highlighting the match.
    pub fn write_match(&mut self, m: &FoundMatch) -> std::io::Result<()> {
        self.write_location(&m.path, Some(m.line))?;
        write!(self.out, " ")?;

        // A multi-line match is highlighted up to the end of its first line.
        let start = m.column.min(m.line_content.len());
        let end = (start + m.text.len()).min(m.line_content.len());
        match (
            m.line_content.get(..start),
            m.line_content.get(start..end),
            m.line_content.get(end..),
        ) {
            (Some(before), Some(matched), Some(after)) => {
                write!(self.out, "{}", before)?;
                self.out.set_color(&scheme::matched())?;
                write!(self.out, "{}", matched)?;
                self.out.reset()?;
                writeln!(self.out, "{}", after)
            }
            _ => writeln!(self.out, "{}", m.line_content),
        }
    }

    /// Write one match's groups, tab-separated.
    pub fn write_groups(&mut self, found: &FoundGroups, show_path: bool) -> std::io::Result<()> {
        if show_path {
            self.write_location(&found.path, None)?;
        }
        writeln!(self.out, "{}", found.groups.join("\t"))
    }

    /// Write the substitution counts for one input.
    pub fn write_rewrite(&mut self, rewrite: &FileRewrite) -> std::io::Result<()> {
        self.write_location(&rewrite.path, None)?;
        write!(self.out, " ")?;
        self.out.set_color(&scheme::count())?;
        write!(self.out, "{}", rewrite.total)?;
        self.out.reset()?;
        writeln!(
            self.out,
            " substitution{}",
            if rewrite.total == 1 { "" } else { "s" }
        )?;
        for rule in rewrite.rules.iter().filter(|r| r.count > 0) {
            writeln!(self.out, "  {}: {}", rule.name, rule.count)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    fn write_location(&mut self, path: &str, line: Option<u32>) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path)?;
        self.out.reset()?;
        if let Some(line) = line {
            write!(self.out, ":")?;
            self.out.set_color(&scheme::line_number())?;
            write!(self.out, "{}", line)?;
            self.out.reset()?;
        }
        write!(self.out, ":")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
