//! Table reset and seeding.

use catalog::{CatalogRecord, Database};
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::data::CatalogData;

/// Outcome of resetting and seeding one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub table: &'static str,
    /// Whether the drop-and-recreate step succeeded.
    pub schema_created: bool,
    pub inserted: usize,
    pub failed: usize,
}

/// Drops, recreates, and seeds catalog tables.
#[derive(Clone)]
pub struct Seeder {
    db: Database,
}

impl Seeder {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Resets all five tables concurrently and seeds them from `data`.
    ///
    /// Reports come back in the order cars, exteriors, interiors, wheels, roofs.
    pub async fn reset_all(&self, data: CatalogData) -> Vec<TableReport> {
        let CatalogData {
            cars,
            exteriors,
            interiors,
            wheels,
            roofs,
        } = data;

        let (cars, exteriors, interiors, wheels, roofs) = tokio::join!(
            self.reset_table(cars),
            self.reset_table(exteriors),
            self.reset_table(interiors),
            self.reset_table(wheels),
            self.reset_table(roofs),
        );

        vec![cars, exteriors, interiors, wheels, roofs]
    }

    /// Drops and recreates the table for `R`, then inserts every record.
    ///
    /// A failed DDL step is logged and the inserts are still attempted. Each
    /// insert runs as its own task; a failed row is logged and skipped.
    pub async fn reset_table<R: CatalogRecord>(&self, records: Vec<R>) -> TableReport {
        let table = R::SCHEMA;

        let schema_created = match self.db.reset_table(&table).await {
            Ok(()) => {
                info!("🎉 {} table created successfully", table.title);
                true
            }
            Err(e) => {
                error!("⚠️ Error creating {} table: {e}", table.name);
                false
            }
        };

        let mut inserts = JoinSet::new();
        for record in records {
            let db = self.db.clone();
            inserts.spawn(async move {
                match db.insert_row(&table, record.values()).await {
                    Ok(()) => {
                        info!("✅ {}: {} added successfully", table.title, record.label());
                        true
                    }
                    Err(e) => {
                        error!("⚠️ Error inserting {}: {e}", table.singular);
                        false
                    }
                }
            });
        }

        let mut report = TableReport {
            table: table.name,
            schema_created,
            inserted: 0,
            failed: 0,
        };
        while let Some(joined) = inserts.join_next().await {
            match joined {
                Ok(true) => report.inserted += 1,
                Ok(false) => report.failed += 1,
                Err(e) => {
                    error!("⚠️ Insert task for {} failed: {e}", table.name);
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
