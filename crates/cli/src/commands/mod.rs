//! CLI command implementations.

pub mod seed;
pub mod stats;

use thiserror::Error;

use dresshaus_server::services::CatalogError;
use dresshaus_server::store::StoreError;

/// Errors that can occur during CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// The target collection already holds records.
    #[error("Collection '{0}' already has {1} records (use --force to replace)")]
    NotEmpty(&'static str, usize),

    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persistence failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
