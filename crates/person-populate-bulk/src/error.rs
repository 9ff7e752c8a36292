//! Error types for the bulk populator.

use thiserror::Error;

/// Errors that can occur while populating bulk files.
#[derive(Error, Debug)]
pub enum BulkPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generation error (includes profile rejection).
    #[error("Generator error: {0}")]
    Generator(#[from] person_generator::GeneratorError),
}
