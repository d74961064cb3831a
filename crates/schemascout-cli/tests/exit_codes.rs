//! Exit-code behavior that needs no database.

use std::process::Command;

#[test]
fn unknown_engine_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_schemascout"))
        .args([
            "--engine-type",
            "oracle",
            "--user",
            "scout",
            "--password",
            "secret",
            "--host",
            "db.example.com",
            "--database",
            "app",
        ])
        .output()
        .expect("run CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized engine type"), "stderr: {stderr}");
}

#[test]
fn missing_required_arguments_exit_nonzero() {
    let status = Command::new(env!("CARGO_BIN_EXE_schemascout"))
        .arg("--engine-type")
        .arg("postgres")
        .status()
        .expect("run CLI");

    assert!(!status.success());
}
