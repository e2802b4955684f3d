use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown catalog table: {0}")]
    UnknownTable(String),

    #[error("Table {table} expects {expected} values, got {actual}")]
    ColumnMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
}
