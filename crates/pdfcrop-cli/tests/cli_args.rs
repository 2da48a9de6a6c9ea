use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdfcrop").unwrap()
}

#[test]
fn help_flag_prints_usage_with_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn info_subcommand_help() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--pages"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--password"));
}

#[test]
fn render_subcommand_help() {
    cmd()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bbox"))
        .stdout(predicate::str::contains("--padding"))
        .stdout(predicate::str::contains("--resolution"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--pdfium-dir"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdfcrop"));
}

#[test]
fn no_subcommand_is_usage_error() {
    cmd().assert().failure().code(2);
}

#[test]
fn unknown_format_rejected() {
    cmd()
        .args(["info", "a.pdf", "--format", "xml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn malformed_bbox_rejected() {
    cmd()
        .args(["render", "a.pdf", "--bbox", "1,2,three,4"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid coordinate: 'three'"));
}

#[test]
fn short_bbox_rejected() {
    cmd()
        .args(["render", "a.pdf", "--bbox", "1,2,3"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected 4 comma-separated values"));
}

#[test]
fn page_zero_rejected_by_parser() {
    cmd()
        .args(["render", "a.pdf", "--bbox", "0,0,1,1", "--page", "0"])
        .assert()
        .failure()
        .code(2);
}
