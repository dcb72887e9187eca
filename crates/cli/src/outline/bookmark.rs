// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bookmarks and the collection that stores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved reading location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Title of the resource the bookmark points into.
    pub title: Option<String>,
    /// Resource the bookmark points into.
    pub href: String,
    pub created: DateTime<Utc>,
    /// Page number, when the publication is paginated.
    pub position: Option<u32>,
    /// Progression through the resource, from 0.0 to 1.0.
    pub progression: Option<f64>,
}

impl Bookmark {
    /// Title shown for the bookmark: its title, else its href.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.href)
    }

    /// Secondary label: the page when known, else the progression.
    pub fn detail(&self) -> Option<String> {
        if let Some(position) = self.position {
            Some(format!("page {}", position))
        } else {
            self.progression
                .map(|p| format!("{:.2}% through the chapter", p * 100.0))
        }
    }

    /// Creation time formatted for display.
    pub fn created_label(&self) -> String {
        self.created.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// The reader's bookmark store.
pub trait BookmarkDataSource {
    fn count(&self) -> usize;

    fn bookmark(&self, index: usize) -> Option<&Bookmark>;

    /// Remove the bookmark at `index`. Returns false when nothing was removed.
    fn remove_bookmark(&mut self, index: usize) -> bool;
}

impl BookmarkDataSource for Vec<Bookmark> {
    fn count(&self) -> usize {
        self.len()
    }

    fn bookmark(&self, index: usize) -> Option<&Bookmark> {
        self.get(index)
    }

    fn remove_bookmark(&mut self, index: usize) -> bool {
        if index < self.len() {
            self.remove(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "bookmark_tests.rs"]
mod tests;
