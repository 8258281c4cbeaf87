//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `glimpse` binary to check argument parsing,
//! rendering output, and error reporting end-to-end.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("glimpse").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vec"))
        .stdout(predicate::str::contains("mat"))
        .stdout(predicate::str::contains("inspect"));
}

// ---------------------------------------------------------------------------
// vec / mat
// ---------------------------------------------------------------------------

#[test]
fn vec_prints_summary_and_children() {
    cmd()
        .args(["vec", "float", "1", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("vec3: [1.   2.   3.  ]\n"))
        .stdout(predicate::str::contains("  [0] = 1\n"))
        .stdout(predicate::str::contains("  [2] = 3\n"));
}

#[test]
fn vec_accepts_negative_values() {
    cmd()
        .args(["vec", "int", "-4", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ivec2: [-4.    5.  ]"));
}

#[test]
fn unknown_element_type_is_rejected() {
    cmd()
        .args(["vec", "quaternion", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown element type"));
}

#[test]
fn bad_literal_is_reported() {
    cmd()
        .args(["vec", "float", "one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Float literal: one"));
}

#[test]
fn mat_prints_grid_and_columns() {
    cmd()
        .args(["mat", "float", "--rows", "3", "1", "2", "3", "4", "5", "6"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mat2x3: \n[[1.   4.  ]"))
        .stdout(predicate::str::contains("  [1] = float [3]\n"))
        .stdout(predicate::str::contains("    [2] = 6\n"));
}

#[test]
fn mat_with_partial_column_fails() {
    cmd()
        .args(["mat", "float", "--rows", "3", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("whole number of columns"));
}

#[test]
fn precision_flag_overrides_default() {
    cmd()
        .args(["--precision", "1", "vec", "double", "0.5", "0.26"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dvec2: [0.5 0.3]"));
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_renders_snapshot_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "snapshot": {{ "base_address": 16, "bytes": [7, 0, 0, 0, 9, 0, 0, 0] }},
            "root": {{
                "address": 16,
                "ty": {{
                    "name": "glm::vec<2, custom_t, (glm::qualifier)0>",
                    "size": 8,
                    "kind": {{ "struct": {{ "template_args": [
                        {{ "value": 2 }},
                        {{ "type": {{ "name": "custom_t", "size": 4, "kind": {{ "scalar": "signed" }} }} }}
                    ] }} }}
                }}
            }}
        }}"#
    )
    .unwrap();

    cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tvec2: [7.   9.  ]"));
}

#[test]
fn inspect_missing_file_fails() {
    cmd()
        .args(["inspect", "/nonexistent/snapshot.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}
