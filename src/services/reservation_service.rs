use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::reservations::{CreateReservationRequest, ReservationList},
    entity::reservations::{
        ActiveModel as ReservationActive, Column as ReservationCol, Entity as Reservations,
        Model as ReservationModel,
    },
    error::{AppError, AppResult},
    models::Reservation,
    response::ApiResponse,
    services::{parse_date, parse_time, required},
    state::AppState,
};

pub async fn create_reservation(
    state: &AppState,
    payload: CreateReservationRequest,
) -> AppResult<ApiResponse<Reservation>> {
    let first_name = required(&payload.first_name)?.to_string();
    let last_name = required(&payload.last_name)?.to_string();
    let date = parse_date(required(&payload.date)?)?;
    let time = parse_time(required(&payload.time)?)?;
    let phone = required(&payload.phone)?.to_string();
    let message = payload.message.filter(|m| !m.trim().is_empty());

    let created = ReservationActive {
        id: NotSet,
        first_name: Set(first_name),
        last_name: Set(last_name),
        date: Set(date),
        time: Set(time),
        phone: Set(phone),
        message: Set(message),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(reservation_id = created.id, "reservation created");

    Ok(ApiResponse::success_with_message(
        "Reservation created successfully",
        reservation_from_entity(created),
    ))
}

pub async fn list_reservations(state: &AppState) -> AppResult<ApiResponse<ReservationList>> {
    let items = Reservations::find()
        .order_by_desc(ReservationCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(reservation_from_entity)
        .collect();

    Ok(ApiResponse::success(ReservationList { items }))
}

pub async fn get_reservation(state: &AppState, id: i32) -> AppResult<ApiResponse<Reservation>> {
    let reservation = Reservations::find_by_id(id).one(&state.orm).await?;
    let reservation = match reservation {
        Some(r) => r,
        None => return Err(AppError::NotFound("Reservation not found".into())),
    };

    Ok(ApiResponse::success(reservation_from_entity(reservation)))
}

pub async fn delete_reservation(state: &AppState, id: i32) -> AppResult<ApiResponse<Reservation>> {
    let reservation = Reservations::find_by_id(id).one(&state.orm).await?;
    let reservation = match reservation {
        Some(r) => r,
        None => return Err(AppError::NotFound("Reservation not found".into())),
    };

    Reservations::delete_by_id(id).exec(&state.orm).await?;

    tracing::info!(reservation_id = id, "reservation deleted");

    Ok(ApiResponse::success_with_message(
        "Reservation deleted successfully",
        reservation_from_entity(reservation),
    ))
}

fn reservation_from_entity(model: ReservationModel) -> Reservation {
    Reservation {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        date: model.date,
        time: model.time,
        phone: model.phone,
        message: model.message,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
