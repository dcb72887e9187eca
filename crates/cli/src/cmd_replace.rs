// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replace command implementation.

use std::io::Write;

use rayon::prelude::*;

use retext::cli::{Cli, ReplaceArgs};
use retext::discovery;
use retext::error::{Error, ExitCode};
use retext::pattern::{MatchingOptions, Template};
use retext::reader;

/// Run the replace command.
pub fn run(cli: &Cli, args: &ReplaceArgs) -> anyhow::Result<ExitCode> {
    let pattern = args.pattern.compile()?;
    let replacer = Template::parse(&args.template)
        .and_then(|template| template.into_replacer(pattern))
        .map_err(|e| Error::Argument(e.to_string()))?;
    let options = MatchingOptions {
        anchored: args.anchored,
    };

    if args.in_place && args.paths.is_empty() {
        return Err(Error::Argument("--in-place requires at least one PATH".to_string()).into());
    }

    let cwd = std::env::current_dir()?;
    let (config, _) = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let inputs = reader::load_inputs(&args.paths, &config.walk)?;

    let outputs: Vec<String> = inputs
        .par_iter()
        .map(|input| replacer.apply(&input.text, options))
        .collect();

    if args.in_place {
        let mut changed = 0;
        for (input, text) in inputs.iter().zip(&outputs) {
            if input.write_back(text)? {
                changed += 1;
            }
        }
        tracing::debug!("{} of {} file(s) changed", changed, inputs.len());
    } else {
        let mut stdout = std::io::stdout().lock();
        for text in &outputs {
            stdout.write_all(text.as_bytes())?;
        }
        stdout.flush()?;
    }

    Ok(ExitCode::Success)
}
