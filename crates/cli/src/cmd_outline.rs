// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outline command implementation.

use std::io::Write;

use serde::Deserialize;

use retext::cli::{Cli, OutlineArgs};
use retext::error::{Error, ExitCode};
use retext::outline::{
    Bookmark, BookmarkDataSource, Outline, OutlineDelegate, OutlineSection, Publication, Selection,
};

/// Saved bookmarks stored alongside the navigation collections.
#[derive(Deserialize)]
struct StoredBookmarks {
    #[serde(default)]
    bookmarks: Vec<Bookmark>,
}

/// Serves the document's bookmarks and records what was selected.
struct Navigator {
    bookmarks: Vec<Bookmark>,
    target: Option<String>,
}

impl OutlineDelegate for Navigator {
    fn bookmarks(&self) -> Option<&dyn BookmarkDataSource> {
        Some(&self.bookmarks as &dyn BookmarkDataSource)
    }

    fn bookmarks_mut(&mut self) -> Option<&mut dyn BookmarkDataSource> {
        Some(&mut self.bookmarks as &mut dyn BookmarkDataSource)
    }

    fn did_select_item(&mut self, target: &str) {
        self.target = Some(target.to_string());
    }

    fn did_select_bookmark(&mut self, bookmark: &Bookmark) {
        self.target = Some(bookmark.display_title().to_string());
    }
}

/// Run the outline command.
pub fn run(_cli: &Cli, args: &OutlineArgs) -> anyhow::Result<ExitCode> {
    let section = OutlineSection::from_name(&args.section).ok_or_else(|| {
        Error::Argument(format!(
            "unknown section `{}` (expected toc, bookmarks, page-list or landmarks)",
            args.section
        ))
    })?;

    let content = std::fs::read_to_string(&args.file).map_err(|e| Error::Io {
        path: args.file.clone(),
        source: e,
    })?;
    let invalid =
        |e: serde_json::Error| Error::Argument(format!("{}: {}", args.file.display(), e));
    let document: serde_json::Value = serde_json::from_str(&content).map_err(invalid)?;
    let publication = Publication::deserialize(&document).map_err(invalid)?;
    let stored = StoredBookmarks::deserialize(&document).map_err(invalid)?;

    let outline = Outline::new(&publication);
    let mut navigator = Navigator {
        bookmarks: stored.bookmarks,
        target: None,
    };

    if let Some(row) = args.select {
        return match outline.select(section, row, &mut navigator) {
            Selection::None => {
                eprintln!("retext: no row {} in {}", row, args.section);
                Ok(ExitCode::NoMatch)
            }
            _ => {
                if let Some(target) = &navigator.target {
                    println!("{}", target);
                }
                Ok(ExitCode::Success)
            }
        };
    }

    let mut stdout = std::io::stdout().lock();
    let rows = outline.row_count(section, &navigator);
    for row in 0..rows {
        let title = outline.row_title(section, row, &navigator).unwrap_or_default();
        match outline.row_detail(section, row, &navigator) {
            Some(detail) => writeln!(stdout, "{}\t{}", title, detail)?,
            None => writeln!(stdout, "{}", title)?,
        }
    }
    stdout.flush()?;

    tracing::debug!("{}: {} row(s) in {:?}", outline.title(), rows, section);
    Ok(if rows == 0 {
        ExitCode::NoMatch
    } else {
        ExitCode::Success
    })
}
