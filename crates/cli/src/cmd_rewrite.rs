// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rewrite command implementation.

use std::io::Write;

use rayon::prelude::*;
use termcolor::StandardStream;

use retext::cli::{Cli, OutputFormat, RewriteArgs};
use retext::color::resolve_color;
use retext::discovery;
use retext::error::{Error, ExitCode};
use retext::output::FileRewrite;
use retext::output::json::JsonFormatter;
use retext::output::text::TextFormatter;
use retext::reader;
use retext::rules::{Rewrite, RuleSet};

/// Run the rewrite command.
pub fn run(cli: &Cli, args: &RewriteArgs) -> anyhow::Result<ExitCode> {
    if args.in_place && args.paths.is_empty() {
        return Err(Error::Argument("--in-place requires at least one PATH".to_string()).into());
    }

    let cwd = std::env::current_dir()?;
    let (config, config_path) = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let rules = RuleSet::compile(&config.rules, config_path.as_deref())?;
    if rules.is_empty() {
        return Err(Error::Config {
            message: "no rewrite rules configured (add [[rule]] entries to retext.toml)"
                .to_string(),
            path: config_path,
        }
        .into());
    }
    tracing::debug!("rules: {}", rules.names().collect::<Vec<_>>().join(", "));

    let inputs = reader::load_inputs(&args.paths, &config.walk)?;
    let rewrites: Vec<Rewrite> = inputs
        .par_iter()
        .map(|input| rules.apply(&input.text))
        .collect();

    if args.dry_run {
        let report: Vec<FileRewrite> = inputs
            .iter()
            .zip(&rewrites)
            .map(|(input, rewrite)| FileRewrite::new(&input.label, rewrite))
            .collect();
        match args.output {
            OutputFormat::Text => {
                let mut formatter = TextFormatter::new(StandardStream::stdout(resolve_color()));
                for file in report.iter().filter(|f| f.total > 0) {
                    formatter.write_rewrite(file)?;
                }
                formatter.flush()?;
            }
            OutputFormat::Json => {
                JsonFormatter::new(std::io::stdout().lock()).write_rewrites(&report)?;
            }
        }
    } else if args.in_place {
        for (input, rewrite) in inputs.iter().zip(&rewrites) {
            input.write_back(&rewrite.text)?;
        }
    } else {
        let mut stdout = std::io::stdout().lock();
        for rewrite in &rewrites {
            stdout.write_all(rewrite.text.as_bytes())?;
        }
        stdout.flush()?;
    }

    Ok(ExitCode::Success)
}
