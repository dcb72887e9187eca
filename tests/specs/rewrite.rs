// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the rewrite command.

use crate::prelude::*;

const RULES: &str = r#"
[[rule]]
name = "swap-ranges"
pattern = '(\d+)-(\d+)'
replace = "{2}/{1}"

[[rule]]
name = "percent"
pattern = "%"
replace = " percent"
literal = true
"#;

#[test]
fn rewrite_applies_rules_in_order() {
    let temp = Project::empty();
    temp.config(RULES);

    retext(&["rewrite"])
        .pwd(temp.path())
        .stdin("pages 12-34 at 50%\n")
        .passes()
        .stdout_eq("pages 34/12 at 50 percent\n");
}

#[test]
fn rewrite_without_rules_is_config_error() {
    let temp = Project::empty();
    temp.config("");

    retext(&["rewrite"])
        .pwd(temp.path())
        .stdin("x")
        .exits(2)
        .stderr_has("no rewrite rules configured");
}

#[test]
fn rewrite_invalid_rule_pattern_names_rule() {
    let temp = Project::empty();
    temp.config("[[rule]]\nname = \"broken\"\npattern = \"(\"\n");

    retext(&["rewrite"])
        .pwd(temp.path())
        .stdin("x")
        .exits(2)
        .stderr_has("rule `broken`");
}

#[test]
fn rewrite_dry_run_reports_counts() {
    let temp = Project::empty();
    temp.config(RULES);
    temp.file("a.txt", "1-2 and 3-4 at 5%\n");
    temp.file("b.txt", "untouched\n");

    retext(&["rewrite", "--dry-run", "a.txt", "b.txt"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("a.txt: 3 substitutions\n  swap-ranges: 2\n  percent: 1\n");
    assert_eq!(temp.read("a.txt"), "1-2 and 3-4 at 5%\n");
}

#[test]
fn rewrite_dry_run_json() {
    let temp = Project::empty();
    temp.config(RULES);
    temp.file("a.txt", "5%\n");

    let run = retext(&["rewrite", "--dry-run", "-o", "json", "a.txt"])
        .pwd(temp.path())
        .passes();
    let json = run.json();
    assert_eq!(json["total"], 1);
    assert_eq!(json["files"][0]["path"], "a.txt");
    assert_eq!(
        json["files"][0]["rules"],
        serde_json::json!([
            { "name": "swap-ranges", "count": 0 },
            { "name": "percent", "count": 1 }
        ])
    );
}

#[test]
fn rewrite_in_place() {
    let temp = Project::empty();
    temp.config(RULES);
    temp.file("docs/a.txt", "10-20\n");

    retext(&["rewrite", "--in-place", "docs"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("");
    assert_eq!(temp.read("docs/a.txt"), "20/10\n");
}
