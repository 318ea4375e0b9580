use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::reservations::{CreateReservationRequest, ReservationList},
    error::AppResult,
    models::Reservation,
    response::ApiResponse,
    services::reservation_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations).post(create_reservation))
        .route("/{id}", get(get_reservation).delete(delete_reservation))
}

#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<Reservation>),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Reservation>>)> {
    let response = reservation_service::create_reservation(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/reservations",
    responses(
        (status = 200, description = "All reservations, newest first", body = ApiResponse<ReservationList>),
    ),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ReservationList>>> {
    let response = reservation_service::list_reservations(&state).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "One reservation", body = ApiResponse<Reservation>),
        (status = 404, description = "Reservation not found"),
    ),
    tag = "Reservations"
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let response = reservation_service::get_reservation(&state, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted", body = ApiResponse<Reservation>),
        (status = 404, description = "Reservation not found"),
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let response = reservation_service::delete_reservation(&state, id).await?;
    Ok(Json(response))
}
