use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const ROOM_MAX_LEN: usize = 50;
pub const PROFESSOR_MAX_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: i32,
    /// Professor name snapshot taken from the registry at write time.
    pub professor: String,
    pub room: String,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields of a reservation that is about to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewReservation {
    pub class_id: i32,
    pub professor: String,
    pub room: String,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
}

impl NewReservation {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_room(&self.room)?;
        validate_professor(&self.professor)?;
        validate_window(self.start_time, self.end_time)
    }
}

pub fn validate_room(room: &str) -> Result<(), errors::ModelError> {
    if room.trim().is_empty() {
        return Err(errors::ModelError::Validation("room must not be empty".into()));
    }
    if room.chars().count() > ROOM_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("room must be at most {ROOM_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_professor(name: &str) -> Result<(), errors::ModelError> {
    if name.chars().count() > PROFESSOR_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("professor name must be at most {PROFESSOR_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_window(start: Time, end: Time) -> Result<(), errors::ModelError> {
    if start >= end {
        return Err(errors::ModelError::Validation("start_time must be before end_time".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, new: NewReservation) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let am = ActiveModel {
        id: NotSet,
        class_id: Set(new.class_id),
        professor: Set(new.professor),
        room: Set(new.room),
        date: Set(new.date),
        start_time: Set(new.start_time),
        end_time: Set(new.end_time),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite every mutable column of an existing row.
pub async fn replace(db: &DatabaseConnection, updated: Model) -> Result<Model, errors::ModelError> {
    validate_room(&updated.room)?;
    validate_professor(&updated.professor)?;
    validate_window(updated.start_time, updated.end_time)?;
    let mut am: ActiveModel = updated.clone().into();
    am.class_id = Set(updated.class_id);
    am.professor = Set(updated.professor);
    am.room = Set(updated.room);
    am.date = Set(updated.date);
    am.start_time = Set(updated.start_time);
    am.end_time = Set(updated.end_time);
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// First stored reservation (lowest id) for `room` on `date` whose
/// `[start_time, end_time)` intersects `[start, end)`.
pub async fn find_conflict(
    db: &DatabaseConnection,
    room: &str,
    date: Date,
    start: Time,
    end: Time,
    exclude_id: Option<i32>,
) -> Result<Option<Model>, errors::ModelError> {
    let mut query = Entity::find()
        .filter(Column::Room.eq(room))
        .filter(Column::Date.eq(date))
        .filter(Column::StartTime.lt(end))
        .filter(Column::EndTime.gt(start));
    if let Some(id) = exclude_id {
        query = query.filter(Column::Id.ne(id));
    }
    query
        .order_by_asc(Column::Id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
