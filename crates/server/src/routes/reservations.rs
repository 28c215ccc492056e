use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use service::reservation::domain::{Reservation, ReservationInput};
use tracing::info;

use crate::{errors::JsonApiError, routes::AppState};

#[derive(Debug, Serialize)]
pub struct CreatedOutput {
    pub message: &'static str,
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct MessageOutput {
    pub message: &'static str,
}

#[utoipa::path(
    post, path = "/reservas", tag = "reservations",
    request_body = crate::openapi::ReservationInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Missing or invalid field, unknown class/professor", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Room already reserved in that window", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ReservationInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedOutput>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.reservations.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedOutput { message: "reservation created", id: created.id })))
}

#[utoipa::path(
    get, path = "/reservas", tag = "reservations",
    responses((status = 200, description = "All reservations", body = [crate::openapi::ReservationDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Reservation>>, JsonApiError> {
    let all = state.reservations.list().await?;
    info!(count = all.len(), "list reservations");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/reservas/{id}", tag = "reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ReservationDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Reservation>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.reservations.get(id).await?))
}

#[utoipa::path(
    put, path = "/reservas/{id}", tag = "reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = crate::openapi::ReservationInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid field or unknown class/professor", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Room already reserved by another reservation", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ReservationInput>, JsonRejection>,
) -> Result<Json<MessageOutput>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    state.reservations.update(id, input).await?;
    Ok(Json(MessageOutput { message: "reservation updated" }))
}

#[utoipa::path(
    delete, path = "/reservas/{id}", tag = "reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageOutput>, JsonApiError> {
    let Path(id) = id?;
    state.reservations.delete(id).await?;
    Ok(Json(MessageOutput { message: "reservation deleted" }))
}
