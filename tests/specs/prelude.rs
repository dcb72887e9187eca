// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the retext binary and asserting on
//! its stdout, stderr and exit code.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the retext binary
pub fn retext_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("retext"))
}

/// Create a command builder with the given arguments
pub fn retext(args: &[&str]) -> CliBuilder {
    CliBuilder::new().args(args)
}

/// Command builder for fluent test assertions
pub struct CliBuilder {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

#[allow(dead_code)]
impl CliBuilder {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed text on standard input
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    /// Run and require exit code 0
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and require a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let run = RunAssert {
            output: self.output(),
        };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit code\nstdout: {}\nstderr: {}",
            run.stdout(),
            run.stderr()
        );
        run
    }

    fn output(self) -> std::process::Output {
        let mut cmd = retext_cmd();
        cmd.args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        let mut cmd = assert_cmd::Command::from_std(cmd);
        if let Some(stdin) = self.stdin {
            cmd.write_stdin(stdin);
        }
        cmd.output().expect("command should run")
    }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be valid JSON")
    }

    /// Exact stdout, diffed on failure
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Exact stderr, diffed on failure
    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    /// `&str` means "contains"; any `Predicate<str>` also works
    pub fn stdout_has<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        expect("stdout", &self.stdout(), predicate.into_predicate(), true);
        self
    }

    pub fn stdout_lacks<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        expect("stdout", &self.stdout(), predicate.into_predicate(), false);
        self
    }

    pub fn stderr_has<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        expect("stderr", &self.stderr(), predicate.into_predicate(), true);
        self
    }

    pub fn stderr_lacks<I: IntoStrPredicate<P>, P: Predicate<str>>(self, predicate: I) -> Self {
        expect("stderr", &self.stderr(), predicate.into_predicate(), false);
        self
    }
}

fn expect<P: Predicate<str>>(stream: &str, text: &str, predicate: P, holds: bool) {
    assert_eq!(
        predicate.eval(text),
        holds,
        "{} should {}match predicate:\n{}",
        stream,
        if holds { "" } else { "NOT " },
        text
    );
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with helper methods.
///
/// Contains a `.git` directory so config discovery stops at the project
/// root instead of climbing into the host's directories.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write retext.toml with `version = 1` prepended
    pub fn config(&self, content: &str) {
        std::fs::write(
            self.path().join("retext.toml"),
            format!("version = 1\n{}", content),
        )
        .unwrap();
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Read a file back
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.path().join(path)).unwrap()
    }
}
