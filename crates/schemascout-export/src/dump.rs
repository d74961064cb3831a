//! Human-readable dump of the in-memory model, for diagnostics.
//!
//! Not machine-parseable; the TSV and SQL artifacts are the durable
//! formats.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use schemascout_core::{TableCatalog, ViewCatalog};

use crate::ArtifactError;

pub(crate) fn write_debug_dump(
    tables: &TableCatalog,
    views: &ViewCatalog,
    path: &Path,
) -> Result<(), ArtifactError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "TABLE CATALOG")?;
    writeln!(writer, "{tables:#?}")?;
    writeln!(writer)?;
    writeln!(writer, "VIEW CATALOG")?;
    writeln!(writer, "{views:#?}")?;

    writer.flush()?;
    Ok(())
}
