//! Index backing the per-room, per-date conflict lookup.
use sea_orm_migration::prelude::*;

use crate::m20240501_000001_create_reservations::Reservations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservations_room_date")
                    .table(Reservations::Table)
                    .col(Reservations::Room)
                    .col(Reservations::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reservations_room_date")
                    .table(Reservations::Table)
                    .to_owned(),
            )
            .await
    }
}
