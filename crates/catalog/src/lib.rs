//! Core types for the car customizer catalog.
//!
//! The catalog is made of five flat tables: `cars` and the four option tables
//! `exteriors`, `interiors`, `wheels` and `roofs`. This crate holds the record
//! types, the table schemas they map to, connection settings, and the thin
//! [`Database`] wrapper used to reset and fill those tables.

pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod schema;

pub use config::DatabaseConfig;
pub use database::Database;
pub use errors::CatalogError;
pub use models::{Car, Exterior, Interior, Roof, Wheel};
pub use schema::{CatalogRecord, Column, ColumnType, SqlValue, TableSchema};
