//! Resets the car catalog tables and seeds them with the catalog data.
//!
//! Every run drops and recreates `cars`, `exteriors`, `interiors`, `wheels`
//! and `roofs`, then inserts one row per record. Tables are reset concurrently
//! and a failing row or table never stops the rest of the run.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use catalog_seed::prelude::*;
//!
//! let db = Database::connect(&DatabaseConfig::from_env()?).await?;
//! let reports = Seeder::new(db).reset_all(CatalogData::builtin()).await;
//! ```

pub mod config;
pub mod data;
pub mod db;
pub mod errors;

pub use catalog::{Car, Exterior, Interior, Roof, Wheel};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::data::CatalogData;
    pub use crate::db::{Seeder, TableReport};
    pub use crate::errors::SeedError;
    pub use crate::{Car, Exterior, Interior, Roof, Wheel};
    pub use catalog::{Database, DatabaseConfig};
}
