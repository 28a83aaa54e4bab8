use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{
    ColumnDef, Index, IndexCreateStatement, PostgresQueryBuilder, Table, TableCreateStatement,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    HashedPassword,
    FullName,
    IsActive,
    IsSuperuser,
    CreatedAt,
    UpdatedAt,
}

fn users_table() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Users::Email).string().not_null())
        .col(ColumnDef::new(Users::HashedPassword).string().not_null())
        .col(ColumnDef::new(Users::FullName).string().null())
        .col(
            ColumnDef::new(Users::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Users::IsSuperuser)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Users::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Users::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn users_email_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_users_email_unique")
        .table(Users::Table)
        .col(Users::Email)
        .unique()
        .to_owned()
}

/// The same schema statements the live run executes, rendered as literal
/// Postgres SQL for script emission.
pub(crate) fn statements() -> Vec<String> {
    vec![
        users_table().to_string(PostgresQueryBuilder),
        users_email_index().to_string(PostgresQueryBuilder),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(users_table()).await?;
        manager.create_index(users_email_index()).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}
