//! Pooled session acquisition.
//!
//! The pool is owned and synchronized by sea-orm/sqlx; this layer only
//! fixes its sizing at construction time and scopes transaction lifetimes.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use app_config::Settings;
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait,
};
use tracing::info;

use crate::error::DbInfraError;
use crate::migrate::{resolve_url, sanitize_db_url};

/// Pool sizing, fixed when the engine is constructed.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_ms: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 50,
            acquire_timeout_ms: 30_000,
        }
    }
}

/// Build the application connection pool for the resolved database URL.
/// Connection failures surface directly; retry policy belongs to the caller.
pub async fn build_pool(
    settings: &Settings,
    pool_cfg: &PoolSettings,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = resolve_url(settings);

    let mut opt = ConnectOptions::new(&url);
    opt.min_connections(pool_cfg.min_connections)
        .max_connections(pool_cfg.max_connections)
        .acquire_timeout(Duration::from_millis(pool_cfg.acquire_timeout_ms))
        .sqlx_logging(true);

    let db = Database::connect(opt).await.map_err(|e| {
        DbInfraError::connection(format!(
            "failed to connect to Postgres at {}: {e}",
            sanitize_db_url(&url)
        ))
    })?;

    info!(
        "pool=create engine=postgres min={} max={} acquire_timeout_ms={}",
        pool_cfg.min_connections, pool_cfg.max_connections, pool_cfg.acquire_timeout_ms
    );
    Ok(db)
}

/// Execute a closure within a scoped database session.
///
/// Begins a transaction on a pooled connection, runs the closure, commits on
/// `Ok` and rolls back on `Err`. If the future is cancelled mid-flight the
/// transaction rolls back on drop, so the connection is never leaked back to
/// the pool with work in progress. Values read inside the session remain
/// usable after commit.
pub async fn with_session<R, F>(db: &DatabaseConnection, f: F) -> Result<R, DbInfraError>
where
    F: for<'c> FnOnce(
        &'c DatabaseTransaction,
    )
        -> Pin<Box<dyn Future<Output = Result<R, DbInfraError>> + Send + 'c>>,
{
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve the original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::{with_session, PoolSettings};
    use crate::error::DbInfraError;

    #[test]
    fn test_default_pool_settings() {
        let cfg = PoolSettings::default();
        assert_eq!(cfg.min_connections, 1);
        assert_eq!(cfg.max_connections, 50);
        assert_eq!(cfg.acquire_timeout_ms, 30_000);
    }

    #[tokio::test]
    async fn test_with_session_returns_closure_value_on_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let value = with_session(&db, |_txn| Box::pin(async move { Ok(42) }))
            .await
            .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_with_session_propagates_closure_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = with_session::<(), _>(&db, |_txn| {
            Box::pin(async move { Err(DbInfraError::connection("boom")) })
        })
        .await
        .unwrap_err();
        assert!(matches!(err, DbInfraError::Connection { .. }));
    }
}
