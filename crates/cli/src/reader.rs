// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated input reading.
//!
//! Inputs are read whole into memory: standard input, or every file the
//! walker yields. Files over the size limit and files that are not UTF-8
//! text are skipped with a warning.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::WalkConfig;
use crate::error::{Error, Result};
use crate::output::STDIN_LABEL;
use crate::walker::{FileWalker, WalkerConfig};

/// Size at which to log large files (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// One input's text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Display label: the path, or `-` for standard input.
    pub label: String,
    /// Source file, `None` for standard input.
    pub path: Option<PathBuf>,
    pub text: String,
}

impl Input {
    pub fn from_stdin(text: String) -> Self {
        Self {
            label: STDIN_LABEL.to_string(),
            path: None,
            text,
        }
    }

    /// Replace the file's content with `text`.
    ///
    /// Returns false without touching the file when nothing changed or the
    /// input is standard input.
    pub fn write_back(&self, text: &str) -> Result<bool> {
        let Some(path) = &self.path else {
            return Ok(false);
        };
        if text == self.text {
            return Ok(false);
        }
        std::fs::write(path, text).map_err(|e| Error::Io {
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!("rewrote {}", path.display());
        Ok(true)
    }
}

/// Gather command inputs: standard input when no paths are given,
/// otherwise every file under `paths`.
pub fn load_inputs(paths: &[PathBuf], walk: &WalkConfig) -> Result<Vec<Input>> {
    let reader = InputReader::new();
    if paths.is_empty() {
        return Ok(vec![reader.read_stdin()?]);
    }
    let files = FileWalker::new(WalkerConfig::from(walk)).collect(paths)?;
    reader.read_all(&files)
}

/// Size-gated input reader.
pub struct InputReader {
    max_size: u64,
}

impl Default for InputReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl InputReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read all of standard input.
    pub fn read_stdin(&self) -> Result<Input> {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| Error::Io {
                path: PathBuf::from(STDIN_LABEL),
                source: e,
            })?;
        Ok(Input::from_stdin(text))
    }

    /// Read one file.
    ///
    /// Returns `Err(FileTooLarge)` over the size limit and
    /// `Err(NotText)` for content that is not UTF-8.
    pub fn read(&self, path: &Path) -> Result<Input> {
        let size = std::fs::metadata(path)
            .map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut bytes = Vec::with_capacity(size as usize);
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        let text = String::from_utf8(bytes).map_err(|_| Error::NotText {
            path: path.to_path_buf(),
        })?;

        Ok(Input {
            label: path.display().to_string(),
            path: Some(path.to_path_buf()),
            text,
        })
    }

    /// Read files in parallel, keeping their order.
    ///
    /// Oversized and non-text files are skipped with a warning; any other
    /// error aborts.
    pub fn read_all(&self, paths: &[PathBuf]) -> Result<Vec<Input>> {
        let results: Vec<Result<Input>> = paths.par_iter().map(|path| self.read(path)).collect();

        let mut inputs = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(input) => inputs.push(input),
                Err(e @ (Error::FileTooLarge { .. } | Error::NotText { .. })) => {
                    tracing::debug!("skipping input: {}", e);
                    eprintln!("retext: warning: {} (skipped)", e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(inputs)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
