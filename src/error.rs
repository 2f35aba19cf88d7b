//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for plantshop-core operations.
///
/// This is an alias for `anyhow::Result`, with context added via
/// `.context()` and `.with_context()` at operation boundaries.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a catalog snapshot fails.
///
/// Callers match on the cause: a missing snapshot usually means "not fetched
/// yet" and degrades to an empty catalog, while a parse failure is a real
/// defect worth surfacing.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog snapshot not found at {path}")]
    NotFound { path: PathBuf },
    #[error("failed to read catalog snapshot at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog snapshot at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
