//! Database integration for resetting the catalog.
//!
//! The [`Seeder`] drops and recreates each catalog table, then fills it from
//! its record array with one concurrent insert per record.

mod seeder;

pub use seeder::{Seeder, TableReport};
