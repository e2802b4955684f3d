//! Drops, recreates, and seeds the catalog tables.
//!
//! Run with:
//! ```
//! cargo run -p catalog-seed --bin reset
//! ```

use catalog::Database;
use catalog_seed::{config::SeedConfig, data::CatalogData, db::Seeder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter so RUST_LOG can live there too
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring .env file: {e}"),
    }

    let config = SeedConfig::from_env()?;
    let data = CatalogData::load(config.data_dir.as_deref())?;

    tracing::info!(
        "Connecting to database at {}",
        config.database.redacted_url()
    );
    let db = Database::connect(&config.database).await?;

    Seeder::new(db).reset_all(data).await;

    tracing::info!("Catalog reset finished");
    Ok(())
}
