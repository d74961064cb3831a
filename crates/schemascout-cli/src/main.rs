//! schemascout CLI - database schema extraction

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use schemascout_core::{ConnectParams, Credentials, EngineType, MetadataCollector, SqlxIntrospector};
use schemascout_export::{ArtifactNaming, ArtifactWriter};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;

/// Fatal connection, enumeration or write failure. Per-item failures never
/// reach this; completion with skipped items still exits 0.
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("schemascout: error: {err}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match runtime.block_on(run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("schemascout: error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let engine = EngineType::parse(&args.engine_type)?;
    let credentials = Credentials {
        user: args.user.clone(),
        password: args.password.clone(),
    };
    let params = ConnectParams {
        host: args.host.clone(),
        port: args.port,
        database: args.database.clone(),
        ssl_mode: args.ssl_mode,
        schema: Some(args.schema.clone()),
        warehouse: args.warehouse.clone(),
    };

    let introspector = SqlxIntrospector::connect(engine, &credentials, &params)
        .await
        .context("failed to connect to the database")?;

    let mut collector = MetadataCollector::new();
    let tables = collector
        .collect_tables(&introspector, args.schema_list.as_deref())
        .await
        .context("table metadata collection failed")?;
    let table_failures = collector.stats().item_failures;

    let views = collector
        .collect_views(&introspector, args.schema_list.as_deref())
        .await
        .context("view metadata collection failed")?;
    let view_failures = collector.stats().item_failures;

    if table_failures + view_failures > 0 {
        info!(
            "completed with {} skipped items (see warnings above)",
            table_failures + view_failures
        );
    }

    let naming = ArtifactNaming::new(engine.as_str(), &args.database);
    let writer = ArtifactWriter::new(naming)
        .with_output_dir(&args.output_dir)
        .with_skip_policy(args.skipped_rows.into());

    let tsv_path = writer
        .write_table_metadata(&tables, args.tables_out.clone())
        .context("failed to write table metadata")?;
    let sql_path = writer
        .write_view_definitions(&views, args.views_out.clone())
        .context("failed to write view definitions")?;

    println!("{}", tsv_path.display());
    println!("{}", sql_path.display());

    if args.debug {
        let dump_path = writer
            .write_debug_dump(&tables, &views, None)
            .context("failed to write debug dump")?;
        println!("{}", dump_path.display());
    }

    Ok(())
}
