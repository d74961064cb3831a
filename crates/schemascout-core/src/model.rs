//! In-memory catalog model built by a collection run.
//!
//! The maps are insertion-ordered: schemas appear in resolution order,
//! tables and views in enumeration order, so serialized artifacts are
//! deterministic for a given database state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One column of one table, as reported by the database. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    /// Rendered type description, e.g. `character varying(50)`.
    pub data_type: String,
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Ordered column list for one table.
///
/// A table whose column retrieval failed is kept with an empty list so that
/// listings stay consistent with what was enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub columns: Vec<ColumnMetadata>,
}

/// Schema name → table name → column metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCatalog {
    pub schemas: IndexMap<String, IndexMap<String, TableMetadata>>,
}

impl TableCatalog {
    /// Ensure `schema` has an entry, even one with zero tables.
    pub fn ensure_schema(&mut self, schema: &str) -> &mut IndexMap<String, TableMetadata> {
        self.schemas.entry(schema.to_string()).or_default()
    }

    pub fn insert_table(
        &mut self,
        schema: &str,
        table: impl Into<String>,
        metadata: TableMetadata,
    ) {
        self.ensure_schema(schema).insert(table.into(), metadata);
    }

    pub fn table_count(&self) -> usize {
        self.schemas.values().map(IndexMap::len).sum()
    }

    pub fn column_count(&self) -> usize {
        self.schemas
            .values()
            .flat_map(IndexMap::values)
            .map(|table| table.columns.len())
            .sum()
    }
}

/// Schema name → view name → raw view SQL body.
///
/// The body is the bare definition with no wrapping statement; it is empty
/// when retrieval failed for that view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCatalog {
    pub schemas: IndexMap<String, IndexMap<String, String>>,
}

impl ViewCatalog {
    pub fn ensure_schema(&mut self, schema: &str) -> &mut IndexMap<String, String> {
        self.schemas.entry(schema.to_string()).or_default()
    }

    pub fn insert_view(&mut self, schema: &str, view: impl Into<String>, body: impl Into<String>) {
        self.ensure_schema(schema).insert(view.into(), body.into());
    }

    pub fn view_count(&self) -> usize {
        self.schemas.values().map(IndexMap::len).sum()
    }
}
