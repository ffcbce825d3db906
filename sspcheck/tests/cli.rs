use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn sspcheck() -> Command {
    Command::cargo_bin("sspcheck").unwrap()
}

#[test]
fn conforming_document_reports_ok() {
    sspcheck()
        .args([
            "validate",
            &fixture("ssp_valid.xml"),
            "--stylesheet",
            &fixture("ssp.xsl"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(": ok"));
}

#[test]
fn failed_assertions_are_printed_and_exit_nonzero() {
    sspcheck()
        .args([
            "validate",
            &fixture("ssp_missing_title.xml"),
            "--stylesheet",
            &fixture("ssp.xsl"),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("failed-assert: metadata/title"))
        .stdout(predicate::str::contains("An SSP must declare a title."))
        .stdout(predicate::str::contains("1 failed assertion(s)"));
}

#[test]
fn missing_input_document_is_an_error() {
    sspcheck()
        .args([
            "validate",
            "/no/such/file.xml",
            "--stylesheet",
            &fixture("ssp.xsl"),
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read input document"));
}

#[test]
fn missing_stylesheet_is_an_error() {
    sspcheck()
        .args([
            "validate",
            &fixture("ssp_valid.xml"),
            "--stylesheet",
            "/no/such/file.xsl",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read stylesheet"));
}
