//! Create `reservations` table.
//!
//! One row per room booking. `professor` holds the professor's name as
//! resolved from the registry at write time, not an id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservations::Id))
                    .col(integer(Reservations::ClassId).not_null())
                    .col(string_len(Reservations::Professor, 50).not_null())
                    .col(string_len(Reservations::Room, 50).not_null())
                    .col(date(Reservations::Date).not_null())
                    .col(time(Reservations::StartTime).not_null())
                    .col(time(Reservations::EndTime).not_null())
                    .check(Expr::col(Reservations::StartTime).lt(Expr::col(Reservations::EndTime)))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reservations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Reservations {
    Table,
    Id,
    ClassId,
    Professor,
    Room,
    Date,
    StartTime,
    EndTime,
}
