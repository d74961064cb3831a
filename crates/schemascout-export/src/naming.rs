//! Default artifact naming: engine, database and a run-fixed timestamp.

use chrono::{DateTime, Local};

/// Timestamp format shared by both artifacts of a run.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Debug, Clone)]
pub struct ArtifactNaming {
    engine: String,
    database: String,
    stamped_at: DateTime<Local>,
}

impl ArtifactNaming {
    /// Fix the run timestamp now. Both artifacts of the run share it.
    pub fn new(engine: impl Into<String>, database: impl Into<String>) -> Self {
        Self::with_stamped_at(engine, database, Local::now())
    }

    /// Fixed-timestamp constructor, for deterministic tests.
    pub fn with_stamped_at(
        engine: impl Into<String>,
        database: impl Into<String>,
        stamped_at: DateTime<Local>,
    ) -> Self {
        Self {
            engine: engine.into(),
            database: database.into(),
            stamped_at,
        }
    }

    pub fn timestamp(&self) -> String {
        self.stamped_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn table_metadata_filename(&self) -> String {
        format!(
            "{}_{}_table_column_metadata_{}.tsv",
            self.engine,
            self.database,
            self.timestamp()
        )
    }

    pub fn view_ddl_filename(&self) -> String {
        format!(
            "{}_{}_view_ddl_{}.sql",
            self.engine,
            self.database,
            self.timestamp()
        )
    }

    pub fn debug_dump_filename(&self) -> String {
        format!(
            "{}_{}_catalog_dump_{}.txt",
            self.engine,
            self.database,
            self.timestamp()
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;

    #[test]
    fn filenames_share_the_run_timestamp() {
        let stamped = Local.with_ymd_and_hms(2026, 1, 18, 12, 30, 5).unwrap();
        let naming = ArtifactNaming::with_stamped_at("postgres", "app", stamped);
        assert_eq!(
            naming.table_metadata_filename(),
            "postgres_app_table_column_metadata_2026-01-18_12-30-05.tsv"
        );
        assert_eq!(
            naming.view_ddl_filename(),
            "postgres_app_view_ddl_2026-01-18_12-30-05.sql"
        );
    }

    #[test]
    fn timestamp_is_fixed_at_construction() {
        let naming = ArtifactNaming::new("redshift", "warehouse");
        let first = naming.timestamp();
        let second = naming.timestamp();
        assert_eq!(first, second);
    }
}
