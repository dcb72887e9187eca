// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Headless model of the reader's outline screen.
//!
//! Binds a publication's navigation collections and the bookmark store to
//! a sectioned list of rows, and turns row selection and deletion into
//! delegate events. Rendering is left to the host.

mod bookmark;
mod link;

pub use bookmark::{Bookmark, BookmarkDataSource};
pub use link::{Link, Publication, PublicationFormat, flatten};

/// The lists the outline can show.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutlineSection {
    #[default]
    TableOfContents,
    Bookmarks,
    PageList,
    Landmarks,
}

impl OutlineSection {
    /// Section for a segment index; unknown indices show the table of contents.
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Self::Bookmarks,
            2 => Self::PageList,
            3 => Self::Landmarks,
            _ => Self::TableOfContents,
        }
    }

    /// Parse a section name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "toc" | "table-of-contents" => Some(Self::TableOfContents),
            "bookmarks" => Some(Self::Bookmarks),
            "page-list" | "pages" => Some(Self::PageList),
            "landmarks" => Some(Self::Landmarks),
            _ => None,
        }
    }
}

/// Receives outline events and supplies the bookmark store.
pub trait OutlineDelegate {
    fn bookmarks(&self) -> Option<&dyn BookmarkDataSource> {
        None
    }

    fn bookmarks_mut(&mut self) -> Option<&mut dyn BookmarkDataSource> {
        None
    }

    /// The user picked a navigation target.
    fn did_select_item(&mut self, target: &str);

    /// The user picked a bookmark.
    fn did_select_bookmark(&mut self, bookmark: &Bookmark);
}

/// Outcome of selecting a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Item(String),
    Bookmark(Bookmark),
    None,
}

impl Selection {
    /// Whether the outline should close after this selection.
    pub fn dismisses(&self) -> bool {
        !matches!(self, Selection::None)
    }
}

/// Flattened navigation rows for one publication.
#[derive(Debug, Clone)]
pub struct Outline {
    title: String,
    format: PublicationFormat,
    table_of_contents: Vec<Link>,
    page_list: Vec<Link>,
    landmarks: Vec<Link>,
}

impl Outline {
    pub fn new(publication: &Publication) -> Self {
        Self {
            title: publication.title.clone(),
            format: publication.format,
            table_of_contents: flatten(&publication.table_of_contents),
            page_list: flatten(&publication.page_list),
            landmarks: flatten(&publication.landmarks),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rows of a link section. Bookmarks have no links.
    pub fn links(&self, section: OutlineSection) -> &[Link] {
        match section {
            OutlineSection::TableOfContents => &self.table_of_contents,
            OutlineSection::PageList => &self.page_list,
            OutlineSection::Landmarks => &self.landmarks,
            OutlineSection::Bookmarks => &[],
        }
    }

    pub fn row_count(&self, section: OutlineSection, delegate: &dyn OutlineDelegate) -> usize {
        match section {
            OutlineSection::Bookmarks => delegate.bookmarks().map_or(0, |b| b.count()),
            _ => self.links(section).len(),
        }
    }

    pub fn row_title(
        &self,
        section: OutlineSection,
        row: usize,
        delegate: &dyn OutlineDelegate,
    ) -> Option<String> {
        match section {
            OutlineSection::Bookmarks => delegate
                .bookmarks()?
                .bookmark(row)
                .map(|b| b.display_title().to_string()),
            _ => self
                .links(section)
                .get(row)
                .map(|link| link.display_title().to_string()),
        }
    }

    /// Secondary label for a row; only bookmarks have one.
    pub fn row_detail(
        &self,
        section: OutlineSection,
        row: usize,
        delegate: &dyn OutlineDelegate,
    ) -> Option<String> {
        match section {
            OutlineSection::Bookmarks => delegate.bookmarks()?.bookmark(row)?.detail(),
            _ => None,
        }
    }

    /// Only bookmark rows can be deleted.
    pub fn can_delete(&self, section: OutlineSection) -> bool {
        section == OutlineSection::Bookmarks
    }

    /// Select a row and notify the delegate.
    ///
    /// Link rows target their href, except in comic archives where the
    /// row index is the target. Out-of-range rows select nothing.
    pub fn select(
        &self,
        section: OutlineSection,
        row: usize,
        delegate: &mut dyn OutlineDelegate,
    ) -> Selection {
        let selection = match section {
            OutlineSection::Bookmarks => {
                let bookmark = delegate.bookmarks().and_then(|b| b.bookmark(row)).cloned();
                match bookmark {
                    Some(bookmark) => {
                        delegate.did_select_bookmark(&bookmark);
                        Selection::Bookmark(bookmark)
                    }
                    None => Selection::None,
                }
            }
            _ => match self.links(section).get(row) {
                Some(link) => {
                    let target = if self.format == PublicationFormat::Cbz {
                        row.to_string()
                    } else {
                        link.href.clone()
                    };
                    delegate.did_select_item(&target);
                    Selection::Item(target)
                }
                None => Selection::None,
            },
        };
        tracing::debug!(?section, row, ?selection, "outline selection");
        selection
    }

    /// Delete a bookmark row. Returns true when a bookmark was removed.
    pub fn delete(
        &self,
        section: OutlineSection,
        row: usize,
        delegate: &mut dyn OutlineDelegate,
    ) -> bool {
        if !self.can_delete(section) {
            return false;
        }
        delegate
            .bookmarks_mut()
            .is_some_and(|source| source.remove_bookmark(row))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
