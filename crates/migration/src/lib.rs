//! Migrator for the reservation schema.
//! Indexes are applied after the table they cover.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_reservations;
mod m20240501_000002_add_room_date_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_reservations::Migration),
            Box::new(m20240501_000002_add_room_date_index::Migration),
        ]
    }
}
