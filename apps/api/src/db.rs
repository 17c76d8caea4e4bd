use anyhow::Result;
use async_trait::async_trait;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::postmeta::PostmetaRow;

/// Creates and returns a MySQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<MySqlPool> {
    info!("Connecting to MySQL...");

    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("MySQL connection pool established");
    Ok(pool)
}

/// Source of a candidate's raw postmeta rows.
///
/// Carried in `AppState` as `Arc<dyn PostmetaSource>` so handlers can be
/// exercised without a database.
#[async_trait]
pub trait PostmetaSource: Send + Sync {
    async fn fetch_rows(&self, post_id: u64) -> Result<Vec<PostmetaRow>, AppError>;
}

pub struct MySqlPostmetaSource {
    pool: MySqlPool,
    query: String,
}

impl MySqlPostmetaSource {
    /// `table` must already be validated as a bare identifier (see `Config`).
    pub fn new(pool: MySqlPool, table: &str) -> Self {
        Self {
            pool,
            query: format!(
                "SELECT post_id, meta_key, meta_value FROM `{table}` WHERE post_id = ? ORDER BY meta_id"
            ),
        }
    }
}

#[async_trait]
impl PostmetaSource for MySqlPostmetaSource {
    async fn fetch_rows(&self, post_id: u64) -> Result<Vec<PostmetaRow>, AppError> {
        let rows = sqlx::query_as::<_, PostmetaRow>(&self.query)
            .bind(post_id)
            .fetch_all(&self.pool)
            .await?;
        debug!(post_id, rows = rows.len(), "Fetched postmeta rows");
        Ok(rows)
    }
}
