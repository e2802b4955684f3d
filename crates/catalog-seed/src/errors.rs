use std::path::PathBuf;

use catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
