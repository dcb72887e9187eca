// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Navigation links and the publication collections that hold them.

use serde::{Deserialize, Serialize};

/// A navigation entry: a titled pointer into the publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Link>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            title: None,
            href: href.into(),
            children: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new(href)
        }
    }

    pub fn with_children(mut self, children: Vec<Link>) -> Self {
        self.children = children;
        self
    }

    /// Title shown for this link, falling back to the href.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.href)
    }
}

/// Flatten a link tree in pre-order: each link, then its descendants.
pub fn flatten(links: &[Link]) -> Vec<Link> {
    let mut out = Vec::new();
    for link in links {
        out.push(Link {
            children: Vec::new(),
            ..link.clone()
        });
        out.extend(flatten(&link.children));
    }
    out
}

/// Publication container format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationFormat {
    #[default]
    Epub,
    Pdf,
    /// Comic book archive; navigation targets are page indices.
    Cbz,
    #[serde(other)]
    Other,
}

/// The navigation collections of a publication.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub format: PublicationFormat,
    #[serde(default, alias = "toc")]
    pub table_of_contents: Vec<Link>,
    #[serde(default)]
    pub landmarks: Vec<Link>,
    #[serde(default)]
    pub page_list: Vec<Link>,
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
