//! Live-database integration test for the CLI.
//!
//! Ignored by default because it requires a reachable PostgreSQL server.
//! To run it:
//!
//! ```bash
//! SCHEMASCOUT_PG_HOST=localhost SCHEMASCOUT_PG_USER=postgres \
//! SCHEMASCOUT_PG_PASSWORD=postgres SCHEMASCOUT_PG_DATABASE=postgres \
//! cargo test -p schemascout-cli -- --ignored
//! ```

use std::process::Command;

use tempfile::tempdir;

fn env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set for this test"))
}

#[test]
#[ignore = "Requires a PostgreSQL database connection"]
fn collects_postgres_metadata_end_to_end() {
    let host = env("SCHEMASCOUT_PG_HOST");
    let user = env("SCHEMASCOUT_PG_USER");
    let password = env("SCHEMASCOUT_PG_PASSWORD");
    let database = env("SCHEMASCOUT_PG_DATABASE");
    let port = std::env::var("SCHEMASCOUT_PG_PORT").unwrap_or_else(|_| "5432".to_string());

    let dir = tempdir().expect("temp dir");

    let status = Command::new(env!("CARGO_BIN_EXE_schemascout"))
        .args([
            "--engine-type",
            "postgres",
            "--user",
            &user,
            "--password",
            &password,
            "--host",
            &host,
            "--port",
            &port,
            "--database",
            &database,
            "--schema-list",
            "public",
            "--output-dir",
        ])
        .arg(dir.path())
        .status()
        .expect("run CLI");

    assert!(status.success(), "CLI should exit 0 against a live server");

    let artifacts: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read output dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();

    assert!(
        artifacts
            .iter()
            .any(|path| path.extension().is_some_and(|ext| ext == "tsv")),
        "expected a table-metadata TSV artifact"
    );
    assert!(
        artifacts
            .iter()
            .any(|path| path.extension().is_some_and(|ext| ext == "sql")),
        "expected a view-definitions SQL artifact"
    );
}

#[test]
#[ignore = "Requires network access to demonstrate the fatal-connection exit code"]
fn unreachable_host_exits_nonzero() {
    let status = Command::new(env!("CARGO_BIN_EXE_schemascout"))
        .args([
            "--engine-type",
            "postgres",
            "--user",
            "nobody",
            "--password",
            "nothing",
            "--host",
            "127.0.0.1",
            "--port",
            "1",
            "--database",
            "missing",
        ])
        .status()
        .expect("run CLI");

    assert!(!status.success());
}
