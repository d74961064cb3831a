//! Error types for the export crate.

use thiserror::Error;

/// Errors that can occur while producing artifacts.
///
/// These surface only for file creation and finalization; a single row or
/// view that fails to render is counted and logged inside the writer, never
/// propagated.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),
}
