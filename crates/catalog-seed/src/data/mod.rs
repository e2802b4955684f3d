//! Source data for the catalog tables.
//!
//! The built-in arrays are the default. A data directory can override any of
//! them with a `<table>.json` file holding an array of records.

mod cars;
mod exteriors;
mod interiors;
mod roofs;
mod wheels;

use std::path::Path;

use catalog::{Car, CatalogRecord, Exterior, Interior, Roof, Wheel};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::errors::SeedError;

pub use cars::cars;
pub use exteriors::exteriors;
pub use interiors::interiors;
pub use roofs::roofs;
pub use wheels::wheels;

/// Base price of every preset car before options.
pub const BASE_CAR_PRICE: i32 = 65000;

/// One record array per catalog table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogData {
    pub cars: Vec<Car>,
    pub exteriors: Vec<Exterior>,
    pub interiors: Vec<Interior>,
    pub wheels: Vec<Wheel>,
    pub roofs: Vec<Roof>,
}

impl CatalogData {
    pub fn builtin() -> Self {
        Self {
            cars: cars(),
            exteriors: exteriors(),
            interiors: interiors(),
            wheels: wheels(),
            roofs: roofs(),
        }
    }

    /// Loads each table from `<dir>/<table>.json`, falling back to the
    /// built-in array for any file that does not exist.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, SeedError> {
        let dir = dir.as_ref();

        Ok(Self {
            cars: load_or_builtin(dir, cars)?,
            exteriors: load_or_builtin(dir, exteriors)?,
            interiors: load_or_builtin(dir, interiors)?,
            wheels: load_or_builtin(dir, wheels)?,
            roofs: load_or_builtin(dir, roofs)?,
        })
    }

    pub fn load(dir: Option<&Path>) -> Result<Self, SeedError> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Ok(Self::builtin()),
        }
    }
}

fn load_or_builtin<R, F>(dir: &Path, builtin: F) -> Result<Vec<R>, SeedError>
where
    R: CatalogRecord + DeserializeOwned,
    F: FnOnce() -> Vec<R>,
{
    let table = R::SCHEMA.name;
    let path = dir.join(format!("{table}.json"));

    if !path.is_file() {
        debug!("No {} found, using built-in {table}", path.display());
        return Ok(builtin());
    }

    let raw = std::fs::read_to_string(&path).map_err(|source| SeedError::Io {
        path: path.clone(),
        source,
    })?;
    let records: Vec<R> = serde_json::from_str(&raw).map_err(|source| SeedError::Json {
        path: path.clone(),
        source,
    })?;

    info!("Loaded {} {table} from {}", records.len(), path.display());
    Ok(records)
}
