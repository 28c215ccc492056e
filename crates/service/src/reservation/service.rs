use std::sync::Arc;

use models::reservation::NewReservation;
use tracing::{debug, info, instrument};

use super::domain::{parse_clock, parse_date, Reservation, ReservationInput};
use super::errors::ReservationError;
use super::locks::SlotLocks;
use super::overlap::Slot;
use super::registry::{ClassRegistry, ProfessorRegistry};
use super::repository::ReservationRepository;

/// Reservation business service independent of web framework.
///
/// Owns the validation order, the registry checks and the conflict policy.
pub struct ReservationService<R: ReservationRepository + ?Sized = dyn ReservationRepository> {
    repo: Arc<R>,
    classes: Arc<dyn ClassRegistry>,
    professors: Arc<dyn ProfessorRegistry>,
    locks: SlotLocks,
}

/// Ids start at 1; zero is treated like an absent id.
fn required_id(value: Option<i32>, field: &'static str) -> Result<i32, ReservationError> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(ReservationError::MissingField(field)),
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ReservationError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ReservationError::MissingField(field)),
    }
}

impl<R: ReservationRepository + ?Sized> ReservationService<R> {
    pub fn new(repo: Arc<R>, classes: Arc<dyn ClassRegistry>, professors: Arc<dyn ProfessorRegistry>) -> Self {
        Self { repo, classes, professors, locks: SlotLocks::new() }
    }

    pub async fn list(&self) -> Result<Vec<Reservation>, ReservationError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Reservation, ReservationError> {
        self.repo.get(id).await?.ok_or(ReservationError::NotFound)
    }

    /// Validate and store a new reservation.
    ///
    /// Checks run in a fixed order and stop at the first failure: required
    /// fields, class registry, professor registry, date format, start then
    /// end time format, window ordering, room conflict.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::reservation::{ReservationService, domain::ReservationInput};
    /// use service::reservation::registry::mock::StaticRegistry;
    /// use service::reservation::repository::mock::InMemoryReservationRepository;
    ///
    /// let registry = Arc::new(StaticRegistry::default().with_class(1).with_professor(2, "Ada Lovelace"));
    /// let svc = ReservationService::new(Arc::new(InMemoryReservationRepository::default()), registry.clone(), registry);
    /// let input = ReservationInput {
    ///     class_id: Some(1),
    ///     professor_id: Some(2),
    ///     room: Some("A1".into()),
    ///     date: Some("2024-05-10".into()),
    ///     start_time: Some("10:00".into()),
    ///     end_time: Some("11:00".into()),
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.professor, "Ada Lovelace");
    /// ```
    #[instrument(skip(self, input), fields(room = ?input.room, date = ?input.date))]
    pub async fn create(&self, input: ReservationInput) -> Result<Reservation, ReservationError> {
        let class_id = required_id(input.class_id, "class_id")?;
        let professor_id = required_id(input.professor_id, "professor_id")?;
        let room = required_text(input.room, "room")?;
        let raw_date = required_text(input.date, "date")?;
        let raw_start = required_text(input.start_time, "start_time")?;
        let raw_end = required_text(input.end_time, "end_time")?;

        if !self.classes.class_exists(class_id).await {
            return Err(ReservationError::ClassNotFound);
        }
        let professor = self
            .professors
            .resolve_professor(professor_id)
            .await
            .ok_or(ReservationError::ProfessorNotFound)?;

        let date = parse_date(&raw_date).ok_or(ReservationError::InvalidDate)?;
        let start = parse_clock(&raw_start).ok_or(ReservationError::InvalidStartTime)?;
        let end = parse_clock(&raw_end).ok_or(ReservationError::InvalidEndTime)?;
        if start >= end {
            return Err(ReservationError::InvalidTimeOrder);
        }

        let slot = Slot::new(room, date, start, end);
        let created = {
            let _guard = self.locks.acquire(&slot.room, slot.date).await;
            self.ensure_free(&slot, None).await?;
            self.repo
                .insert(NewReservation {
                    class_id,
                    professor,
                    room: slot.room.clone(),
                    date,
                    start_time: start,
                    end_time: end,
                })
                .await?
        };
        self.locks.prune();

        info!(reservation_id = created.id, room = %created.room, date = %created.date, "reservation_created");
        Ok(created)
    }

    /// Apply a partial update.
    ///
    /// Present fields are checked with the create rules, local format checks
    /// before registry lookups. The professor name is re-resolved only when
    /// `professor_id` is supplied. Conflicts ignore the record itself.
    #[instrument(skip(self, input), fields(reservation_id = id))]
    pub async fn update(&self, id: i32, input: ReservationInput) -> Result<Reservation, ReservationError> {
        let mut current = self.get(id).await?;

        if let Some(room) = input.room {
            current.room = required_text(Some(room), "room")?;
        }
        if let Some(raw) = input.date {
            current.date = parse_date(&raw).ok_or(ReservationError::InvalidDate)?;
        }
        if let Some(raw) = input.start_time {
            current.start_time = parse_clock(&raw).ok_or(ReservationError::InvalidStartTime)?;
        }
        if let Some(raw) = input.end_time {
            current.end_time = parse_clock(&raw).ok_or(ReservationError::InvalidEndTime)?;
        }
        if let Some(class_id) = input.class_id {
            if !self.classes.class_exists(class_id).await {
                return Err(ReservationError::ClassNotFound);
            }
            current.class_id = class_id;
        }
        if let Some(professor_id) = input.professor_id {
            current.professor = self
                .professors
                .resolve_professor(professor_id)
                .await
                .ok_or(ReservationError::ProfessorNotFound)?;
        }
        if current.start_time >= current.end_time {
            return Err(ReservationError::InvalidTimeOrder);
        }

        let slot = Slot::new(current.room.clone(), current.date, current.start_time, current.end_time);
        let updated = {
            let _guard = self.locks.acquire(&slot.room, slot.date).await;
            self.ensure_free(&slot, Some(id)).await?;
            self.repo.replace(current).await?
        };
        self.locks.prune();

        info!(reservation_id = updated.id, room = %updated.room, date = %updated.date, "reservation_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ReservationError> {
        if !self.repo.delete(id).await? {
            return Err(ReservationError::NotFound);
        }
        info!(reservation_id = id, "reservation_deleted");
        Ok(())
    }

    async fn ensure_free(&self, slot: &Slot, exclude_id: Option<i32>) -> Result<(), ReservationError> {
        if let Some(existing) = self.repo.find_conflict(slot, exclude_id).await? {
            debug!(conflicting_id = existing.id, room = %slot.room, "slot already taken");
            return Err(ReservationError::Conflict { room: slot.room.clone(), conflicting_id: existing.id });
        }
        Ok(())
    }
}
