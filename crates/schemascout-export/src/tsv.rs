//! Quoted, tab-separated column-metadata artifact.

use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use schemascout_core::{ColumnMetadata, TableCatalog};
use tracing::warn;

use crate::{ArtifactError, SkipPolicy};

const HEADER: [&str; 6] = ["schema", "table", "name", "type", "nullable", "default"];

/// Write one data row per column, iterating schemas, tables and columns in
/// model order. A row that fails to render is counted and logged; the file
/// is still finalized.
pub(crate) fn write_table_metadata(
    catalog: &TableCatalog,
    path: &Path,
    skip_policy: SkipPolicy,
) -> Result<(), ArtifactError> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Always)
        .from_writer(file);

    writer
        .write_record(HEADER)
        .map_err(|err| ArtifactError::Csv(err.to_string()))?;

    let mut skipped = 0usize;
    for (schema, tables) in &catalog.schemas {
        for (table, metadata) in tables {
            for column in &metadata.columns {
                if let Err(err) = write_column_row(&mut writer, schema, table, column) {
                    skipped += 1;
                    warn!(
                        "skipping unwritable row for {schema}.{table}.{}: {err}",
                        column.name
                    );
                    if skip_policy == SkipPolicy::Placeholder {
                        let _ = writer.write_record([
                            schema.as_str(),
                            table.as_str(),
                            column.name.as_str(),
                            "",
                            "",
                            "",
                        ]);
                    }
                }
            }
        }
    }

    if skipped > 0 {
        warn!("{skipped} rows could not be rendered");
    }

    writer.flush()?;
    Ok(())
}

fn write_column_row(
    writer: &mut Writer<File>,
    schema: &str,
    table: &str,
    column: &ColumnMetadata,
) -> Result<(), csv::Error> {
    writer.write_record([
        schema,
        table,
        column.name.as_str(),
        column.data_type.as_str(),
        if column.nullable { "true" } else { "false" },
        column.default.as_deref().unwrap_or(""),
    ])
}
