//! Artifact serialization for collected catalogs.
//!
//! Produces the quoted tab-separated column-metadata file, the SQL file of
//! `CREATE VIEW` statements, and an optional human-readable dump of the
//! in-memory model.

mod dump;
mod error;
mod naming;
mod sql;
mod tsv;

pub use error::ArtifactError;
pub use naming::ArtifactNaming;

use std::fs;
use std::path::PathBuf;

use schemascout_core::{TableCatalog, ViewCatalog};
use tracing::info;

/// What to do with a row or view that cannot be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Emit a sentinel entry so the artifact accounts for every enumerated
    /// item.
    #[default]
    Placeholder,
    /// Drop the item silently.
    Omit,
}

/// Serializes catalogs to durable artifacts under one output directory.
///
/// The naming timestamp is fixed when the writer is constructed and shared
/// by every artifact of the run.
pub struct ArtifactWriter {
    naming: ArtifactNaming,
    output_dir: PathBuf,
    skip_policy: SkipPolicy,
}

impl ArtifactWriter {
    pub fn new(naming: ArtifactNaming) -> Self {
        Self {
            naming,
            output_dir: PathBuf::from("data"),
            skip_policy: SkipPolicy::default(),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_skip_policy(mut self, policy: SkipPolicy) -> Self {
        self.skip_policy = policy;
        self
    }

    /// Write the quoted TSV of column metadata and return its path.
    ///
    /// With no explicit path the name is derived from engine, database and
    /// the run timestamp, under the managed output directory (created on
    /// demand).
    pub fn write_table_metadata(
        &self,
        catalog: &TableCatalog,
        path: Option<PathBuf>,
    ) -> Result<PathBuf, ArtifactError> {
        let path = self.resolve_path(path, self.naming.table_metadata_filename())?;
        info!(
            "Outputting table column metadata file for {} schemas: {}",
            catalog.schemas.len(),
            path.display()
        );
        tsv::write_table_metadata(catalog, &path, self.skip_policy)?;
        Ok(path)
    }

    /// Write the view-definitions SQL file and return its path.
    pub fn write_view_definitions(
        &self,
        catalog: &ViewCatalog,
        path: Option<PathBuf>,
    ) -> Result<PathBuf, ArtifactError> {
        let path = self.resolve_path(path, self.naming.view_ddl_filename())?;
        info!(
            "Outputting view metadata for {} schemas: {}",
            catalog.schemas.len(),
            path.display()
        );
        sql::write_view_definitions(catalog, &path, self.skip_policy)?;
        Ok(path)
    }

    /// Dump both catalogs in human-readable form, for diagnostics.
    pub fn write_debug_dump(
        &self,
        tables: &TableCatalog,
        views: &ViewCatalog,
        path: Option<PathBuf>,
    ) -> Result<PathBuf, ArtifactError> {
        let path = self.resolve_path(path, self.naming.debug_dump_filename())?;
        dump::write_debug_dump(tables, views, &path)?;
        Ok(path)
    }

    fn resolve_path(
        &self,
        explicit: Option<PathBuf>,
        derived_name: String,
    ) -> Result<PathBuf, ArtifactError> {
        match explicit {
            Some(path) => Ok(path),
            None => {
                fs::create_dir_all(&self.output_dir)?;
                Ok(self.output_dir.join(derived_name))
            }
        }
    }
}
