use async_trait::async_trait;
use models::reservation::NewReservation;

use super::domain::Reservation;
use super::errors::ReservationError;
use super::overlap::Slot;

/// Repository abstraction for reservation persistence.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations in store order (ascending id).
    async fn list(&self) -> Result<Vec<Reservation>, ReservationError>;
    async fn get(&self, id: i32) -> Result<Option<Reservation>, ReservationError>;
    async fn insert(&self, new: NewReservation) -> Result<Reservation, ReservationError>;
    /// Persist every field of an existing reservation.
    async fn replace(&self, updated: Reservation) -> Result<Reservation, ReservationError>;
    /// Returns false when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, ReservationError>;
    /// First reservation (store order) overlapping `slot`, never the one with `exclude_id`.
    async fn find_conflict(&self, slot: &Slot, exclude_id: Option<i32>) -> Result<Option<Reservation>, ReservationError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    use crate::reservation::overlap;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i32, Reservation>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct InMemoryReservationRepository {
        state: Mutex<State>,
    }

    #[async_trait]
    impl ReservationRepository for InMemoryReservationRepository {
        async fn list(&self) -> Result<Vec<Reservation>, ReservationError> {
            Ok(self.state.lock().await.rows.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<Reservation>, ReservationError> {
            Ok(self.state.lock().await.rows.get(&id).cloned())
        }

        async fn insert(&self, new: NewReservation) -> Result<Reservation, ReservationError> {
            new.validate()?;
            let mut state = self.state.lock().await;
            state.last_id += 1;
            let row = Reservation {
                id: state.last_id,
                class_id: new.class_id,
                professor: new.professor,
                room: new.room,
                date: new.date,
                start_time: new.start_time,
                end_time: new.end_time,
            };
            state.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn replace(&self, updated: Reservation) -> Result<Reservation, ReservationError> {
            models::reservation::validate_room(&updated.room)?;
            models::reservation::validate_professor(&updated.professor)?;
            models::reservation::validate_window(updated.start_time, updated.end_time)?;
            let mut state = self.state.lock().await;
            match state.rows.get_mut(&updated.id) {
                Some(row) => {
                    *row = updated.clone();
                    Ok(updated)
                }
                None => Err(ReservationError::NotFound),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ReservationError> {
            Ok(self.state.lock().await.rows.remove(&id).is_some())
        }

        async fn find_conflict(&self, slot: &Slot, exclude_id: Option<i32>) -> Result<Option<Reservation>, ReservationError> {
            let state = self.state.lock().await;
            Ok(overlap::find_conflict(state.rows.values(), slot, exclude_id).cloned())
        }
    }
}
