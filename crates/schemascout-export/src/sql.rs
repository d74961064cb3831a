//! View-definitions SQL artifact.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use schemascout_core::ViewCatalog;
use tracing::warn;

use crate::{ArtifactError, SkipPolicy};

/// Write one `CREATE VIEW schema.view AS body` block per view, separated by
/// a blank line, in schema-then-view model order. A view that fails to
/// render is counted and logged; the file is still finalized.
pub(crate) fn write_view_definitions(
    catalog: &ViewCatalog,
    path: &Path,
    skip_policy: SkipPolicy,
) -> Result<(), ArtifactError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut skipped = 0usize;
    for (schema, views) in &catalog.schemas {
        for (view, body) in views {
            if let Err(err) = write!(writer, "CREATE VIEW {schema}.{view} AS {body}\n\n") {
                skipped += 1;
                warn!("skipping unwritable view {schema}.{view}: {err}");
                if skip_policy == SkipPolicy::Placeholder {
                    let _ = write!(writer, "-- skipped view {schema}.{view}\n\n");
                }
            }
        }
    }

    if skipped > 0 {
        warn!("{skipped} view definitions could not be rendered");
    }

    writer.flush()?;
    Ok(())
}
