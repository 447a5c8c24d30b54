use super::*;
use crate::output::tests::{error, report};
use crate::validation::Check;

fn parse(output: &str) -> Vec<serde_json::Value> {
    serde_json::from_str(output).unwrap()
}

#[test]
fn emits_issue_per_consolidated_error() {
    let errors = vec![
        error(Some(0), Check::TrimTrailingWhitespace, "trailing whitespace"),
        error(Some(1), Check::TrimTrailingWhitespace, "trailing whitespace"),
        error(None, Check::InsertFinalNewline, "final newline expected"),
    ];

    let output = CodeClimateFormatter
        .format(&[report("./web/app.js", errors)])
        .unwrap();
    let issues = parse(&output);

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["check_name"], "trim_trailing_whitespace");
    assert_eq!(issues[0]["description"], "trailing whitespace");
    assert_eq!(issues[0]["severity"], "minor");
    assert_eq!(issues[0]["location"]["path"], "web/app.js");
    assert_eq!(issues[0]["location"]["lines"]["begin"], 1);
    assert_eq!(issues[0]["location"]["lines"]["end"], 2);
    assert_eq!(issues[1]["check_name"], "insert_final_newline");
    assert_eq!(issues[1]["location"]["lines"]["begin"], 1);
}

#[test]
fn fingerprint_is_sha256_of_location_and_message() {
    let mut run = error(Some(4), Check::TrimTrailingWhitespace, "trailing whitespace");
    run.additional_identical = 2;

    let mut hasher = Sha256::new();
    hasher.update(b"a.txt:5:2:trailing whitespace");
    let expected = format!("{:x}", hasher.finalize());

    assert_eq!(fingerprint("a.txt", &run), expected);
    assert_eq!(expected.len(), 64);
}

#[test]
fn fingerprints_differ_by_line() {
    let first = error(Some(0), Check::TrimTrailingWhitespace, "trailing whitespace");
    let second = error(Some(5), Check::TrimTrailingWhitespace, "trailing whitespace");
    assert_ne!(fingerprint("a.txt", &first), fingerprint("a.txt", &second));
}

#[test]
fn no_errors_is_an_empty_array() {
    let output = CodeClimateFormatter.format(&[report("a.txt", vec![])]).unwrap();
    assert!(parse(&output).is_empty());
}
