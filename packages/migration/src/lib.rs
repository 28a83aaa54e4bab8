pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};
use sea_orm_migration::sea_orm::Statement;

mod m20250712_000001_create_users; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250712_000001_create_users::Migration)]
    }
}

#[derive(Debug, Clone)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run one migration command against an already-connected database.
/// Used by both the CLI and the bootstrap layer.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let db_info_before = get_db_diagnostics(db).await?;

    tracing::info!("▶ cmd={command:?}  backend={}", db_info_before.backend);
    tracing::info!("▶ connected to DB: {}", db_info_before.name);
    tracing::info!(
        "▶ BEFORE: runner has {} migration(s) defined, {} applied",
        db_info_before.defined_migrations_count,
        db_info_before.applied_count
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if !matches!(command, MigrationCommand::Status) {
                let db_info_after = get_db_diagnostics(db).await?;
                tracing::info!(
                    "▶ AFTER: runner has {} migration(s) defined, {} applied",
                    db_info_after.defined_migrations_count,
                    db_info_after.applied_count
                );
            }
            tracing::info!("✅ {command:?} OK for {}", db_info_before.name);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {command:?} failed for {}: {e}", db_info_before.name);
            Err(e)
        }
    }
}

/// Render every defined migration as literal SQL inside one transaction
/// boundary. No database connection is used.
pub fn offline_script() -> String {
    let mut script = String::from("BEGIN;\n\n");
    for (name, statements) in offline_sections() {
        script.push_str("-- ");
        script.push_str(name);
        script.push('\n');
        for stmt in statements {
            script.push_str(&stmt);
            script.push_str(";\n");
        }
        script.push('\n');
    }
    script.push_str("COMMIT;\n");
    script
}

fn offline_sections() -> Vec<(&'static str, Vec<String>)> {
    vec![(
        "m20250712_000001_create_users",
        m20250712_000001_create_users::statements(),
    )]
}

#[derive(Debug)]
struct DbDiagnostics {
    backend: String,
    name: String,
    applied_count: usize,
    defined_migrations_count: usize,
}

async fn get_db_diagnostics(db: &DatabaseConnection) -> Result<DbDiagnostics, DbErr> {
    let backend = format!("{:?}", db.get_database_backend());

    let name = match db.get_database_backend() {
        sea_orm_migration::sea_orm::DatabaseBackend::Postgres => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("select current_database() as name"),
            );
            if let Some(row) = db.query_one(stmt).await? {
                row.try_get("", "name")?
            } else {
                "<unknown>".to_string()
            }
        }
        _ => "<unsupported>".to_string(),
    };

    let applied_count = count_applied_migrations(db).await.unwrap_or(0);
    let defined_migrations_count = Migrator::migrations().len();

    Ok(DbDiagnostics {
        backend,
        name,
        applied_count,
        defined_migrations_count,
    })
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::{offline_script, Migrator, MigratorTrait};

    #[test]
    fn test_migrations_are_registered() {
        let migrations = Migrator::migrations();
        assert_eq!(migrations.len(), 1);
        assert_eq!(migrations[0].name(), "m20250712_000001_create_users");
    }

    #[test]
    fn test_offline_script_is_one_transaction() {
        let script = offline_script();
        assert!(script.starts_with("BEGIN;\n"));
        assert!(script.ends_with("COMMIT;\n"));
    }

    #[test]
    fn test_offline_script_contains_users_schema() {
        let script = offline_script();
        assert!(script.contains("CREATE TABLE IF NOT EXISTS \"users\""));
        assert!(script.contains("\"hashed_password\""));
        assert!(script.contains("CREATE UNIQUE INDEX \"idx_users_email_unique\""));
        assert!(script.contains("-- m20250712_000001_create_users"));
    }
}
