use app_config::ConfigError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbInfraError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database connection failed: {detail}")]
    Connection { detail: String },
    /// Errors raised while a session is in use, surfaced unchanged.
    #[error(transparent)]
    Session(#[from] DbErr),
    /// Errors raised by the migration engine, surfaced unchanged.
    #[error(transparent)]
    Migration(DbErr),
    #[error("Failed to write migration script: {0}")]
    Io(#[from] std::io::Error),
}

impl DbInfraError {
    pub fn connection(detail: impl std::fmt::Display) -> Self {
        Self::Connection {
            detail: detail.to_string(),
        }
    }
}
