pub mod collector;
pub mod error;
pub mod introspect;
pub mod model;
pub mod progress;

// Re-export main types and functions
pub use collector::{MetadataCollector, RunStats};
pub use error::IntrospectError;
pub use introspect::{
    ConnectParams, ConnectionSpec, Credentials, EngineType, Introspect, SqlxIntrospector,
    WarehouseParams,
};
pub use model::{ColumnMetadata, TableCatalog, TableMetadata, ViewCatalog};
pub use progress::{elapsed_time, incremental_marker, CancelFlag};
