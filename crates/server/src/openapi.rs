use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ReservationInputDoc {
    pub class_id: Option<i32>,
    pub professor_id: Option<i32>,
    pub room: Option<String>,
    /// YYYY-MM-DD
    pub date: Option<String>,
    /// HH:MM
    pub start_time: Option<String>,
    /// HH:MM
    pub end_time: Option<String>,
}

#[derive(ToSchema)]
pub struct ReservationDoc {
    pub id: i32,
    pub class_id: i32,
    pub professor: String,
    pub room: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM:SS
    pub start_time: String,
    /// HH:MM:SS
    pub end_time: String,
}

#[derive(ToSchema)]
pub struct CreatedDoc { pub message: String, pub id: i32 }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub code: Option<u16>, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::reservations::create,
        crate::routes::reservations::list,
        crate::routes::reservations::get,
        crate::routes::reservations::update,
        crate::routes::reservations::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ReservationInputDoc,
            ReservationDoc,
            CreatedDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "reservations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_reservation_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/reservas"));
        assert!(paths.iter().any(|p| p.as_str() == "/reservas/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
