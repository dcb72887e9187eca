// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Find and groups command implementations.

use rayon::prelude::*;
use termcolor::StandardStream;

use retext::cli::{Cli, FindArgs, OutputFormat};
use retext::color::resolve_color;
use retext::discovery;
use retext::error::ExitCode;
use retext::output::json::JsonFormatter;
use retext::output::text::TextFormatter;
use retext::output::{FoundGroups, FoundMatch};
use retext::reader::{self, Input};

/// Run the find command.
pub fn run(cli: &Cli, args: &FindArgs) -> anyhow::Result<ExitCode> {
    let pattern = args.pattern.compile()?;
    let inputs = gather(cli, args)?;

    let matches: Vec<FoundMatch> = inputs
        .par_iter()
        .flat_map_iter(|input| {
            pattern
                .find_all_with_lines(&input.text)
                .into_iter()
                .map(move |m| FoundMatch::new(&input.label, m))
        })
        .collect();
    tracing::debug!("{} match(es) in {} input(s)", matches.len(), inputs.len());

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::new(StandardStream::stdout(resolve_color()));
            for m in &matches {
                formatter.write_match(m)?;
            }
            formatter.flush()?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_matches(&matches)?;
        }
    }

    Ok(exit_code(matches.is_empty()))
}

/// Run the groups command.
pub fn run_groups(cli: &Cli, args: &FindArgs) -> anyhow::Result<ExitCode> {
    let pattern = args.pattern.compile()?;
    let inputs = gather(cli, args)?;

    let found: Vec<FoundGroups> = inputs
        .par_iter()
        .flat_map_iter(|input| {
            pattern
                .matches_groups(&input.text)
                .into_iter()
                .map(move |groups| FoundGroups {
                    path: input.label.clone(),
                    groups,
                })
        })
        .collect();

    match args.output {
        OutputFormat::Text => {
            let show_path = !args.paths.is_empty();
            let mut formatter = TextFormatter::new(StandardStream::stdout(resolve_color()));
            for groups in &found {
                formatter.write_groups(groups, show_path)?;
            }
            formatter.flush()?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_groups(&found)?;
        }
    }

    Ok(exit_code(found.is_empty()))
}

fn gather(cli: &Cli, args: &FindArgs) -> anyhow::Result<Vec<Input>> {
    let cwd = std::env::current_dir()?;
    let (config, _) = discovery::load_config(cli.config.as_deref(), &cwd)?;
    Ok(reader::load_inputs(&args.paths, &config.walk)?)
}

fn exit_code(no_matches: bool) -> ExitCode {
    if no_matches {
        ExitCode::NoMatch
    } else {
        ExitCode::Success
    }
}
