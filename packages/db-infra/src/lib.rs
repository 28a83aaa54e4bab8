//! Shared database session and migration infrastructure.
//! Used by the backend and the migration CLI.

pub mod error;
pub mod migrate;
pub mod session;

pub use error::DbInfraError;
pub use migrate::{resolve_url, run_migrations_offline, run_migrations_online, sanitize_db_url};
pub use session::{build_pool, with_session, PoolSettings};
