//! SQLx-backed introspection over `information_schema`.
//!
//! One implementation serves every supported engine: the Postgres family
//! connects natively, and warehouse engines expose a compatible
//! `information_schema` once a driver for their scheme is installed.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};

use super::{ConnectParams, ConnectionSpec, Credentials, EngineType, Introspect};
use crate::error::IntrospectError;
use crate::model::ColumnMetadata;

const LIST_SCHEMAS: &str = "\
    SELECT schema_name FROM information_schema.schemata \
    WHERE schema_name <> 'information_schema' AND schema_name NOT LIKE 'pg_%' \
    ORDER BY schema_name";

const LIST_TABLES: &str = "\
    SELECT table_name FROM information_schema.tables \
    WHERE table_schema = $1 AND table_type = 'BASE TABLE' \
    ORDER BY table_name";

const LIST_COLUMNS: &str = "\
    SELECT column_name, data_type, is_nullable, column_default, \
           character_maximum_length, numeric_precision, numeric_scale \
    FROM information_schema.columns \
    WHERE table_schema = $1 AND table_name = $2 \
    ORDER BY ordinal_position";

const LIST_VIEWS: &str = "\
    SELECT table_name FROM information_schema.views \
    WHERE table_schema = $1 \
    ORDER BY table_name";

const VIEW_DEFINITION: &str = "\
    SELECT view_definition FROM information_schema.views \
    WHERE table_schema = $1 AND table_name = $2";

/// An introspector bound to one database session.
pub struct SqlxIntrospector {
    pool: AnyPool,
    engine: EngineType,
}

impl SqlxIntrospector {
    /// Connect to `engine` with the given credentials and parameters.
    ///
    /// The connection form is resolved once here; an unreachable host, bad
    /// credentials or a scheme without an installed driver all surface as a
    /// fatal [`IntrospectError::Connect`].
    pub async fn connect(
        engine: EngineType,
        credentials: &Credentials,
        params: &ConnectParams,
    ) -> Result<Self, IntrospectError> {
        sqlx::any::install_default_drivers();

        let spec = ConnectionSpec::resolve(engine, credentials, params);
        let pool = AnyPool::connect(&spec.connect_url())
            .await
            .map_err(IntrospectError::Connect)?;

        Ok(Self { pool, engine })
    }
}

#[async_trait]
impl Introspect for SqlxIntrospector {
    fn engine(&self) -> EngineType {
        self.engine
    }

    async fn list_schemas(&self) -> Result<Vec<String>, IntrospectError> {
        let rows = sqlx::query(LIST_SCHEMAS)
            .fetch_all(&self.pool)
            .await
            .map_err(IntrospectError::Query)?;
        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("schema_name"))
            .collect())
    }

    async fn list_tables(&self, schema: &str) -> Result<Vec<String>, IntrospectError> {
        let rows = sqlx::query(LIST_TABLES)
            .bind(self.engine.normalize_schema(schema))
            .fetch_all(&self.pool)
            .await
            .map_err(IntrospectError::Query)?;
        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("table_name"))
            .collect())
    }

    async fn list_columns(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<Vec<ColumnMetadata>, IntrospectError> {
        let rows = sqlx::query(LIST_COLUMNS)
            .bind(self.engine.normalize_schema(schema))
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(IntrospectError::Query)?;
        Ok(rows.iter().map(column_from_row).collect())
    }

    async fn list_views(&self, schema: &str) -> Result<Vec<String>, IntrospectError> {
        let rows = sqlx::query(LIST_VIEWS)
            .bind(self.engine.normalize_schema(schema))
            .fetch_all(&self.pool)
            .await
            .map_err(IntrospectError::Query)?;
        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("table_name"))
            .collect())
    }

    async fn view_definition(
        &self,
        schema: &str,
        view: &str,
    ) -> Result<String, IntrospectError> {
        let row = sqlx::query(VIEW_DEFINITION)
            .bind(self.engine.normalize_schema(schema))
            .bind(view)
            .fetch_optional(&self.pool)
            .await
            .map_err(IntrospectError::Query)?;

        let body = row
            .and_then(|row| {
                row.try_get::<Option<String>, _>("view_definition")
                    .ok()
                    .flatten()
            })
            .unwrap_or_default();

        // information_schema reports the body with a trailing semicolon on
        // some engines; the catalog stores the bare definition.
        Ok(body.trim_end().trim_end_matches(';').trim_end().to_string())
    }
}

/// Decode one `information_schema.columns` row. Engines disagree on which
/// fields are populated; anything absent degrades to its null form instead
/// of failing the row.
fn column_from_row(row: &AnyRow) -> ColumnMetadata {
    let name: String = row.try_get("column_name").unwrap_or_default();
    let base_type: String = row.try_get("data_type").unwrap_or_default();
    let nullable = row
        .try_get::<String, _>("is_nullable")
        .map(|value| value.eq_ignore_ascii_case("yes"))
        .unwrap_or(true);
    let default = row
        .try_get::<Option<String>, _>("column_default")
        .ok()
        .flatten();
    let char_length = row
        .try_get::<Option<i32>, _>("character_maximum_length")
        .ok()
        .flatten();
    let precision = row
        .try_get::<Option<i32>, _>("numeric_precision")
        .ok()
        .flatten();
    let scale = row
        .try_get::<Option<i32>, _>("numeric_scale")
        .ok()
        .flatten();

    ColumnMetadata {
        name,
        data_type: render_data_type(&base_type, char_length, precision, scale),
        nullable,
        default,
    }
}

/// Fold length or precision into the reported base type, e.g.
/// `character varying` + 50 → `character varying(50)`.
///
/// `numeric_precision` is also populated for plain integer types (as a bit
/// width), so precision/scale are only rendered for arbitrary-precision
/// types.
fn render_data_type(
    base: &str,
    char_length: Option<i32>,
    precision: Option<i32>,
    scale: Option<i32>,
) -> String {
    if base.is_empty() {
        return String::new();
    }
    if let Some(length) = char_length {
        return format!("{base}({length})");
    }
    match (precision, scale) {
        (Some(precision), Some(scale))
            if base.eq_ignore_ascii_case("numeric") || base.eq_ignore_ascii_case("decimal") =>
        {
            format!("{base}({precision},{scale})")
        }
        _ => base.to_string(),
    }
}
