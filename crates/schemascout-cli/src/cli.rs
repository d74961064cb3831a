//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use schemascout_export::SkipPolicy;
use std::path::PathBuf;

/// schemascout - collect schema, table, column and view metadata from a
/// live database via introspection
#[derive(Parser, Debug)]
#[command(name = "schemascout")]
#[command(
    about = "Collect schema, table, column and view metadata from a database",
    long_about = None
)]
#[command(version)]
pub struct Args {
    /// Database engine: postgres, redshift or snowflake
    #[arg(short, long, default_value = "redshift")]
    pub engine_type: String,

    /// Database user. For Postgres any user that can read the catalogs will do
    #[arg(short, long)]
    pub user: String,

    /// Password for the database user; passed through to the driver, never recorded
    #[arg(short, long)]
    pub password: String,

    /// Host where the database is located (account name for Snowflake)
    #[arg(long)]
    pub host: String,

    /// Port used by the database for connections
    #[arg(long, default_value_t = 5439)]
    pub port: u16,

    /// Database instance to connect to
    #[arg(short, long)]
    pub database: String,

    /// Require SSL-encrypted connections to the database
    #[arg(long)]
    pub ssl_mode: bool,

    /// Default schema to operate against, for Snowflake
    #[arg(long, default_value = "public")]
    pub schema: String,

    /// Warehouse to operate against, for Snowflake
    #[arg(short, long)]
    pub warehouse: Option<String>,

    /// Comma-delimited list of schemas; skips schema discovery entirely
    #[arg(long, value_name = "SCHEMAS")]
    pub schema_list: Option<String>,

    /// Directory for generated artifacts, created on demand
    #[arg(long, default_value = "data")]
    pub output_dir: PathBuf,

    /// Explicit path for the table-metadata TSV (default: derived name under --output-dir)
    #[arg(long, value_name = "FILE")]
    pub tables_out: Option<PathBuf>,

    /// Explicit path for the view-definitions SQL file
    #[arg(long, value_name = "FILE")]
    pub views_out: Option<PathBuf>,

    /// How to record rows that fail to serialize
    #[arg(long, default_value = "placeholder", value_enum)]
    pub skipped_rows: SkippedRowsArg,

    /// Also dump the full in-memory model for diagnostics
    #[arg(long)]
    pub debug: bool,

    /// Log severity: trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SkippedRowsArg {
    /// Emit a sentinel entry for each skipped item
    Placeholder,
    /// Drop skipped items silently
    Omit,
}

impl From<SkippedRowsArg> for SkipPolicy {
    fn from(arg: SkippedRowsArg) -> Self {
        match arg {
            SkippedRowsArg::Placeholder => SkipPolicy::Placeholder,
            SkippedRowsArg::Omit => SkipPolicy::Omit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Vec<&'static str> {
        vec![
            "schemascout",
            "-u",
            "scout",
            "-p",
            "secret",
            "--host",
            "db.example.com",
            "-d",
            "warehouse",
        ]
    }

    #[test]
    fn parses_minimal_args_with_defaults() {
        let args = Args::try_parse_from(minimal()).expect("parse");
        assert_eq!(args.engine_type, "redshift");
        assert_eq!(args.port, 5439);
        assert_eq!(args.schema, "public");
        assert_eq!(args.output_dir, PathBuf::from("data"));
        assert_eq!(args.skipped_rows, SkippedRowsArg::Placeholder);
        assert!(!args.ssl_mode);
        assert!(!args.debug);
    }

    #[test]
    fn requires_connection_arguments() {
        let result = Args::try_parse_from(["schemascout", "-u", "scout"]);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_schema_list_and_explicit_paths() {
        let mut argv = minimal();
        argv.extend([
            "--schema-list",
            "a, b",
            "--tables-out",
            "/tmp/t.tsv",
            "--skipped-rows",
            "omit",
        ]);
        let args = Args::try_parse_from(argv).expect("parse");
        assert_eq!(args.schema_list.as_deref(), Some("a, b"));
        assert_eq!(args.tables_out, Some(PathBuf::from("/tmp/t.tsv")));
        assert_eq!(args.skipped_rows, SkippedRowsArg::Omit);
    }
}
