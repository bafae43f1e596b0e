use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

use crate::config::AppConfig;

/// Optional database collaborator checked by the diagnostics endpoint.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Names of up to `limit` collections (tables) in the database.
    async fn list_collections(&self, limit: i64) -> anyhow::Result<Vec<String>>;
}

/// What startup made of `DATABASE_URL`.
#[derive(Clone)]
pub enum DatabaseHandle {
    Absent,
    /// Configured, but the client could not be built.
    Failed(String),
    Ready(Arc<dyn DatabaseProbe>),
}

impl DatabaseHandle {
    pub fn from_config(config: &AppConfig) -> Self {
        let Some(url) = config.database_url.as_deref() else {
            return DatabaseHandle::Absent;
        };
        match PgProbe::connect_lazy(url) {
            Ok(probe) => {
                info!(database_name = ?config.database_name, "database probe configured");
                DatabaseHandle::Ready(Arc::new(probe))
            }
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(error = %reason, "database probe unavailable; continuing without it");
                DatabaseHandle::Failed(reason)
            }
        }
    }
}

#[derive(Clone)]
pub struct PgProbe {
    pool: PgPool,
}

impl PgProbe {
    /// Builds the pool without connecting; reachability is only tested on use.
    pub fn connect_lazy(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy(database_url)
            .context("build postgres pool")?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl DatabaseProbe for PgProbe {
    async fn list_collections(&self, limit: i64) -> anyhow::Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = 'public'
            ORDER BY table_name
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("list tables")?;
        Ok(names)
    }
}
