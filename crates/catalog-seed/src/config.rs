//! Configuration for a reset run.

use std::path::PathBuf;

use catalog::DatabaseConfig;

use crate::errors::SeedError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub database: DatabaseConfig,
    /// Directory of `<table>.json` overrides (`SEED_DATA_DIR`).
    pub data_dir: Option<PathBuf>,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, SeedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SeedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig::from_lookup(&lookup)?;
        let data_dir = lookup("SEED_DATA_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self { database, data_dir })
    }
}
