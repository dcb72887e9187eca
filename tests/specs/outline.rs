// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the outline command.

use crate::prelude::*;

const NAV: &str = r#"{
  "title": "Moby-Dick",
  "format": "epub",
  "toc": [
    { "title": "Loomings", "href": "c1.xhtml", "children": [
      { "href": "c1.xhtml#whale" }
    ] },
    { "title": "The Carpet-Bag", "href": "c2.xhtml" }
  ],
  "landmarks": [{ "title": "Cover", "href": "cover.xhtml" }],
  "bookmarks": [
    { "title": "Loomings", "href": "c1.xhtml", "created": "2026-01-02T03:04:05Z",
      "position": 7, "progression": null },
    { "title": null, "href": "c2.xhtml", "created": "2026-01-03T00:00:00Z",
      "position": null, "progression": 0.25 }
  ]
}"#;

fn project() -> Project {
    let temp = Project::empty();
    temp.file("nav.json", NAV);
    temp
}

#[test]
fn lists_flattened_table_of_contents() {
    let temp = project();

    retext(&["outline", "nav.json"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("Loomings\nc1.xhtml#whale\nThe Carpet-Bag\n");
}

#[test]
fn lists_bookmarks_with_detail() {
    let temp = project();

    retext(&["outline", "nav.json", "--section", "bookmarks"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("Loomings\tpage 7\nc2.xhtml\t25.00% through the chapter\n");
}

#[test]
fn empty_section_exits_1() {
    let temp = project();

    retext(&["outline", "nav.json", "--section", "page-list"])
        .pwd(temp.path())
        .exits(1)
        .stdout_eq("");
}

#[test]
fn select_prints_target() {
    let temp = project();

    retext(&["outline", "nav.json", "--select", "1"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("c1.xhtml#whale\n");
}

#[test]
fn select_bookmark_prints_title() {
    let temp = project();

    retext(&["outline", "nav.json", "--section", "bookmarks", "--select", "0"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("Loomings\n");
}

#[test]
fn select_untitled_bookmark_prints_href() {
    let temp = project();

    retext(&["outline", "nav.json", "--section", "bookmarks", "--select", "1"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("c2.xhtml\n");
}

#[test]
fn select_out_of_range_exits_1() {
    let temp = project();

    retext(&["outline", "nav.json", "--section", "landmarks", "--select", "5"])
        .pwd(temp.path())
        .exits(1)
        .stderr_has("no row 5");
}

#[test]
fn unknown_section_exits_2() {
    let temp = project();

    retext(&["outline", "nav.json", "--section", "chapters"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unknown section `chapters`");
}
