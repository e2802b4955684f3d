use sqlx::{
    PgPool, Postgres,
    postgres::{PgArguments, PgPoolOptions},
    query::Query,
};

use crate::config::DatabaseConfig;
use crate::errors::CatalogError;
use crate::schema::{self, SqlValue, TableSchema};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, CatalogError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        tracing::debug!(
            "Connection pool ready (max {} connections)",
            config.max_connections
        );
        Ok(Self::new(pool))
    }

    /// Drops `table` and creates it again, empty.
    pub async fn reset_table(&self, table: &TableSchema) -> Result<(), CatalogError> {
        let sql = table.reset_sql();
        // DROP + CREATE in one round trip needs the simple query protocol.
        sqlx::raw_sql(&sql).execute(&self.pool).await?;

        Ok(())
    }

    /// Inserts one row into `table`. `values` must follow the column order.
    pub async fn insert_row(
        &self,
        table: &TableSchema,
        values: Vec<SqlValue>,
    ) -> Result<(), CatalogError> {
        if values.len() != table.columns.len() {
            return Err(CatalogError::ColumnMismatch {
                table: table.name,
                expected: table.columns.len(),
                actual: values.len(),
            });
        }

        let sql = table.insert_sql();
        let query = values.into_iter().fold(sqlx::query(&sql), bind_value);
        query.execute(&self.pool).await?;

        Ok(())
    }

    /// Counts the rows of one of the catalog tables, looked up by name.
    pub async fn row_count(&self, table: &str) -> Result<i64, CatalogError> {
        let table = known_table(table)?;
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table.name))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn known_table(name: &str) -> Result<&'static TableSchema, CatalogError> {
    schema::find_table(name).ok_or_else(|| CatalogError::UnknownTable(name.to_string()))
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Boolean(v) => query.bind(v),
        SqlValue::NullableBoolean(v) => query.bind(v),
        SqlValue::Integer(v) => query.bind(v),
    }
}
