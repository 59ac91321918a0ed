use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("chart.csv");
    let content = "date,rank,song,artist,last-week,peak-rank,weeks-on-board\n\
                   2021-01-02,1,Song A,Artist A,,,\n\
                   2021-01-02,not-a-rank,Song B,Artist B,,,\n";
    fs::write(&input, content).unwrap();

    let mut cmd = Command::cargo_bin("rankframes").unwrap();
    cmd.arg("validate").arg("--input").arg(&input);
    let output = cmd.output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("rankframes validate ok"));
    assert!(stdout.contains("records: 1"));
    assert!(stdout.contains("dropped (rank): 1"));
    assert!(stdout.contains("weeks: 1"));
}
