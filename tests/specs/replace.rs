// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the replace command.

use crate::prelude::*;

#[test]
fn replace_swaps_groups_on_stdin() {
    retext(&["replace", r"(\d+)-(\d+)", "{2}/{1}"])
        .stdin("a 12-34 b 56-78 c")
        .passes()
        .stdout_eq("a 34/12 b 78/56 c");
}

#[test]
fn replace_literal_percent() {
    retext(&["replace", "%", "pct"])
        .stdin("100% done, 50% left")
        .passes()
        .stdout_eq("100pct done, 50pct left");
}

#[test]
fn replace_without_matches_echoes_input() {
    retext(&["replace", "zzz", "y"])
        .stdin("unchanged\n")
        .passes()
        .stdout_eq("unchanged\n");
}

#[test]
fn replace_braces_are_escaped_by_doubling() {
    retext(&["replace", "x", "{{{0}}}"])
        .stdin("axb")
        .passes()
        .stdout_eq("a{x}b");
}

#[test]
fn replace_anchored_stops_at_first_gap() {
    retext(&["replace", "--anchored", r"\d", "#"])
        .stdin("12a34")
        .passes()
        .stdout_eq("##a34");
}

/// > A template naming a group the pattern lacks is an argument error
#[test]
fn replace_unknown_group_exits_2() {
    retext(&["replace", r"(\d+)", "{2}"])
        .stdin("1")
        .exits(2)
        .stderr_has("group 2 does not exist");
}

#[test]
fn replace_malformed_template_exits_2() {
    retext(&["replace", "a", "{"])
        .stdin("a")
        .exits(2)
        .stderr_has("invalid template");
}

#[test]
fn replace_in_place_writes_changed_files_only() {
    let temp = Project::empty();
    temp.file("a.txt", "range 1-2\n");
    temp.file("b.txt", "nothing\n");
    let before = std::fs::metadata(temp.path().join("b.txt"))
        .unwrap()
        .modified()
        .unwrap();

    retext(&["replace", r"(\d+)-(\d+)", "{2}-{1}", "--in-place", "a.txt", "b.txt"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("");

    assert_eq!(temp.read("a.txt"), "range 2-1\n");
    assert_eq!(temp.read("b.txt"), "nothing\n");
    let after = std::fs::metadata(temp.path().join("b.txt"))
        .unwrap()
        .modified()
        .unwrap();
    assert_eq!(before, after);
}

#[test]
fn replace_in_place_requires_paths() {
    retext(&["replace", "a", "b", "--in-place"])
        .stdin("a")
        .exits(2)
        .stderr_has("--in-place requires");
}

#[test]
fn replace_files_to_stdout() {
    let temp = Project::empty();
    temp.file("a.txt", "x1\n");

    retext(&["replace", "x", "y", "a.txt"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("y1\n");
    assert_eq!(temp.read("a.txt"), "x1\n");
}
