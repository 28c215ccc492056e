use models::reservation::{self, NewReservation};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::reservation::domain::Reservation;
use crate::reservation::errors::ReservationError;
use crate::reservation::overlap::Slot;
use crate::reservation::repository::ReservationRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmReservationRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn list(&self) -> Result<Vec<Reservation>, ReservationError> {
        Ok(reservation::list_all(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<Reservation>, ReservationError> {
        reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ReservationError::Repository(e.to_string()))
    }

    async fn insert(&self, new: NewReservation) -> Result<Reservation, ReservationError> {
        Ok(reservation::create(&self.db, new).await?)
    }

    async fn replace(&self, updated: Reservation) -> Result<Reservation, ReservationError> {
        Ok(reservation::replace(&self.db, updated).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ReservationError> {
        let res = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ReservationError::Repository(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }

    async fn find_conflict(&self, slot: &Slot, exclude_id: Option<i32>) -> Result<Option<Reservation>, ReservationError> {
        Ok(reservation::find_conflict(&self.db, &slot.room, slot.date, slot.start, slot.end, exclude_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[tokio::test]
    async fn seaorm_repository_crud_and_conflicts() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmReservationRepository::new(db);
        let room = format!("svc-{}", Uuid::new_v4());
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        let a = repo
            .insert(NewReservation {
                class_id: 4,
                professor: "Alan Turing".into(),
                room: room.clone(),
                date,
                start_time: t(9, 0),
                end_time: t(10, 0),
            })
            .await?;
        assert_eq!(repo.get(a.id).await?.map(|r| r.professor), Some("Alan Turing".to_string()));

        let clash = repo.find_conflict(&Slot::new(room.clone(), date, t(9, 30), t(11, 0)), None).await?;
        assert_eq!(clash.map(|r| r.id), Some(a.id));
        let own = repo.find_conflict(&Slot::new(room.clone(), date, t(9, 30), t(11, 0)), Some(a.id)).await?;
        assert!(own.is_none());

        let mut moved = a.clone();
        moved.start_time = t(10, 0);
        moved.end_time = t(11, 0);
        let moved = repo.replace(moved).await?;
        assert_eq!(moved.start_time, t(10, 0));

        assert!(repo.list().await?.iter().any(|r| r.id == a.id));
        assert!(repo.delete(a.id).await?);
        assert!(!repo.delete(a.id).await?);
        assert!(repo.get(a.id).await?.is_none());
        Ok(())
    }
}
