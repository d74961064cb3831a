//! Drives an introspector across schemas to build catalogs.
//!
//! Collection is resilient by construction: a failure while reading one
//! table's columns or one view's definition is counted and logged, the item
//! is retained empty, and the run continues. Only connection-level failures
//! abort.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::IntrospectError;
use crate::introspect::Introspect;
use crate::model::{TableCatalog, TableMetadata, ViewCatalog};
use crate::progress::{elapsed_time, incremental_marker, CancelFlag, MARKER_INTERVAL};

/// Counters and timing for one collection run. Transient; rebuilt on every
/// `collect_*` call and exposed read-only for observability.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub schema_count: usize,
    pub table_count: usize,
    pub column_count: usize,
    pub view_count: usize,
    /// Per-item retrieval failures that were recorded and skipped.
    pub item_failures: usize,
    pub elapsed: Duration,
    /// Wall-clock time spent in each processed schema, in run order.
    pub schema_elapsed: Vec<(String, Duration)>,
    /// Set when a cancellation flag stopped the run at a schema boundary.
    pub cancelled: bool,
}

/// Walks schemas → tables → columns and schemas → views → definitions.
#[derive(Default)]
pub struct MetadataCollector {
    cancel: CancelFlag,
    stats: RunStats,
}

impl MetadataCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collector whose run can be stopped from another task at schema
    /// boundaries.
    pub fn with_cancel(cancel: CancelFlag) -> Self {
        Self {
            cancel,
            stats: RunStats::default(),
        }
    }

    /// Stats for the most recent `collect_*` call.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Resolve the schema set: an explicit comma-delimited filter replaces
    /// discovery and skips the database round-trip entirely.
    async fn resolve_schemas(
        introspector: &dyn Introspect,
        filter: Option<&str>,
    ) -> Result<Vec<String>, IntrospectError> {
        match filter {
            Some(list) => Ok(parse_schema_filter(list)),
            None => introspector.list_schemas().await,
        }
    }

    /// Build a [`TableCatalog`] for the resolved schema set.
    pub async fn collect_tables(
        &mut self,
        introspector: &dyn Introspect,
        schema_filter: Option<&str>,
    ) -> Result<TableCatalog, IntrospectError> {
        let run_start = Instant::now();
        self.stats = RunStats::default();

        let schemas = Self::resolve_schemas(introspector, schema_filter).await?;
        self.stats.schema_count = schemas.len();

        info!("EXTRACTING TABLE METADATA");
        info!("Total schema count: {}", schemas.len());

        let mut catalog = TableCatalog::default();
        for (index, schema) in schemas.iter().enumerate() {
            if self.cancel.is_cancelled() {
                self.stats.cancelled = true;
                warn!(
                    "collection cancelled after {} of {} schemas",
                    index,
                    schemas.len()
                );
                break;
            }

            let schema_start = Instant::now();
            let tables = introspector.list_tables(schema).await?;
            info!(
                "\t {} {}",
                incremental_marker(index, MARKER_INTERVAL, 0),
                schema.to_uppercase()
            );
            info!("\t\t\t   table count: {}", tables.len());
            self.stats.table_count += tables.len();

            let entry = catalog.ensure_schema(schema);
            for table in tables {
                match introspector.list_columns(schema, &table).await {
                    Ok(columns) => {
                        self.stats.column_count += columns.len();
                        entry.insert(table, TableMetadata { columns });
                    }
                    Err(err) => {
                        // Recoverable: keep the table, record the failure.
                        self.stats.item_failures += 1;
                        warn!("failed to read columns for {schema}.{table}: {err}");
                        entry.insert(table, TableMetadata::default());
                    }
                }
            }

            debug!(
                "\t\t\texecution time: {}",
                elapsed_time(schema_start.elapsed().as_secs())
            );
            self.stats
                .schema_elapsed
                .push((schema.clone(), schema_start.elapsed()));
        }

        self.stats.elapsed = run_start.elapsed();
        info!(
            "  Total time taken: {}",
            elapsed_time(self.stats.elapsed.as_secs())
        );
        info!(" Total table count: {}", self.stats.table_count);
        info!("Total column count: {}", self.stats.column_count);

        Ok(catalog)
    }

    /// Build a [`ViewCatalog`] for the resolved schema set. The catalog
    /// stores raw definition bodies; wrapping into `CREATE VIEW` statements
    /// happens at serialization time.
    pub async fn collect_views(
        &mut self,
        introspector: &dyn Introspect,
        schema_filter: Option<&str>,
    ) -> Result<ViewCatalog, IntrospectError> {
        let run_start = Instant::now();
        self.stats = RunStats::default();

        let schemas = Self::resolve_schemas(introspector, schema_filter).await?;
        self.stats.schema_count = schemas.len();

        info!("EXTRACTING VIEW METADATA");
        info!("Total schema count: {}", schemas.len());

        let mut catalog = ViewCatalog::default();
        for (index, schema) in schemas.iter().enumerate() {
            if self.cancel.is_cancelled() {
                self.stats.cancelled = true;
                warn!(
                    "collection cancelled after {} of {} schemas",
                    index,
                    schemas.len()
                );
                break;
            }

            let schema_start = Instant::now();
            let views = introspector.list_views(schema).await?;
            info!(
                "\t {} {}",
                incremental_marker(index, MARKER_INTERVAL, 0),
                schema.to_uppercase()
            );
            info!("\t\t\t    view count: {}", views.len());
            self.stats.view_count += views.len();

            let entry = catalog.ensure_schema(schema);
            for view in views {
                match introspector.view_definition(schema, &view).await {
                    Ok(body) => {
                        entry.insert(view, body);
                    }
                    Err(err) => {
                        self.stats.item_failures += 1;
                        warn!("failed to read definition for {schema}.{view}: {err}");
                        entry.insert(view, String::new());
                    }
                }
            }

            debug!(
                "\t\t\texecution time: {}",
                elapsed_time(schema_start.elapsed().as_secs())
            );
            self.stats
                .schema_elapsed
                .push((schema.clone(), schema_start.elapsed()));
        }

        self.stats.elapsed = run_start.elapsed();
        info!(
            "  Total time taken: {}",
            elapsed_time(self.stats.elapsed.as_secs())
        );
        info!("  Total view count: {}", self.stats.view_count);

        Ok(catalog)
    }
}

/// Split a comma-delimited schema list, stripping whitespace and dropping
/// empty segments.
fn parse_schema_filter(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
