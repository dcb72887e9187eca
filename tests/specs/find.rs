// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the find and groups commands.

use crate::prelude::*;

#[test]
fn find_prints_path_line_and_content() {
    let temp = Project::empty();
    temp.file("notes.txt", "intro\nsee 12-34 here\nand 56-78\n");

    retext(&["find", r"\d+-\d+", "notes.txt"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("notes.txt:2: see 12-34 here\nnotes.txt:3: and 56-78\n");
}

#[test]
fn find_reads_stdin_without_paths() {
    retext(&["find", "%"])
        .stdin("100% done\n50% left\n")
        .passes()
        .stdout_eq("-:1: 100% done\n-:2: 50% left\n");
}

/// > Exit code 1 when nothing matches
#[test]
fn find_without_matches_exits_1() {
    retext(&["find", "zzz"]).stdin("nothing here\n").exits(1).stdout_eq("");
}

/// > Exit code 2 for an invalid pattern
#[test]
fn find_invalid_pattern_exits_2() {
    retext(&["find", "("])
        .stdin("x")
        .exits(2)
        .stderr_has("retext: invalid pattern `(`");
}

#[test]
fn find_ignore_case_flag() {
    retext(&["find", "-i", "hello"])
        .stdin("HeLLo world\n")
        .passes()
        .stdout_eq("-:1: HeLLo world\n");
}

#[test]
fn find_fixed_strings_flag() {
    retext(&["find", "-F", "a.c"])
        .stdin("abc\na.c\n")
        .passes()
        .stdout_eq("-:2: a.c\n");
}

#[test]
fn find_walks_directories_respecting_gitignore() {
    let temp = Project::empty();
    temp.file(".gitignore", "build/\n");
    temp.file("docs/a.txt", "match\n");
    temp.file("docs/b.txt", "match\n");
    temp.file("build/c.txt", "match\n");

    retext(&["find", "match", "."])
        .pwd(temp.path())
        .passes()
        .stdout_has("a.txt:1: match")
        .stdout_has("b.txt:1: match")
        .stdout_lacks("c.txt");
}

#[test]
fn find_respects_walk_exclude() {
    let temp = Project::empty();
    temp.config("[walk]\nexclude = [\"*.min.js\"]\n");
    temp.file("app.js", "target\n");
    temp.file("app.min.js", "target\n");

    retext(&["find", "target", "."])
        .pwd(temp.path())
        .passes()
        .stdout_has("app.js")
        .stdout_lacks("app.min.js");
}

#[test]
fn find_missing_file_exits_3() {
    let temp = Project::empty();

    retext(&["find", "a", "missing.txt"])
        .pwd(temp.path())
        .exits(3)
        .stderr_has("missing.txt");
}

#[test]
fn find_json_shape() {
    let temp = Project::empty();
    temp.file("in.txt", "a 1\nb 22\n");

    let run = retext(&["find", r"\d+", "in.txt", "-o", "json"])
        .pwd(temp.path())
        .passes();
    let json = run.json();
    assert_eq!(json["total"], 2);
    assert_eq!(
        json["matches"][1],
        serde_json::json!({ "path": "in.txt", "line": 2, "offset": 6, "text": "22" })
    );
}

#[test]
fn find_json_without_matches_still_prints_document() {
    let run = retext(&["find", "zzz", "-o", "json"]).stdin("abc").exits(1);
    assert_eq!(run.json(), serde_json::json!({ "matches": [], "total": 0 }));
}

// =============================================================================
// GROUPS
// =============================================================================

#[test]
fn groups_from_stdin_are_tab_separated() {
    retext(&["groups", r"(\d+)-(\d+)"])
        .stdin("a 12-34 b 56-78 c")
        .passes()
        .stdout_eq("12-34\t12\t34\n56-78\t56\t78\n");
}

/// > Non-participating groups are omitted, not blank
#[test]
fn groups_omit_missing_groups() {
    retext(&["groups", "(a)?b"])
        .stdin("ab b")
        .passes()
        .stdout_eq("ab\ta\nb\n");
}

#[test]
fn groups_prefix_path_for_files() {
    let temp = Project::empty();
    temp.file("n.txt", "Part 3: Notes\n");

    retext(&["groups", r"Part (\d+): (\w+)", "n.txt"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("n.txt:Part 3: Notes\t3\tNotes\n");
}

#[test]
fn groups_json_shape() {
    let run = retext(&["groups", "(a)?b", "-o", "json"]).stdin("b").passes();
    assert_eq!(
        run.json(),
        serde_json::json!({ "groups": [{ "path": "-", "groups": ["b"] }] })
    );
}

#[test]
fn groups_without_matches_exits_1() {
    retext(&["groups", "(x)"]).stdin("abc").exits(1);
}
