use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::orders::{CreateOrderRequest, OrderList},
    entity::orders::{
        ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel,
    },
    error::{AppError, AppResult},
    models::Order,
    response::ApiResponse,
    services::required,
    state::AppState,
};

pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let first_name = required(&payload.first_name)?.to_string();
    let last_name = required(&payload.last_name)?.to_string();
    let country = required(&payload.country)?.to_string();
    let street_address = required(&payload.street_address)?.to_string();
    let city = required(&payload.city)?.to_string();
    let postcode = required(&payload.postcode)?.to_string();
    let phone = required(&payload.phone)?.to_string();
    let email = required(&payload.email)?.to_string();

    // A zero total fails the required check, the same way an absent one does.
    let total_amount = match payload.total_amount {
        Some(total) if !total.is_zero() => total,
        _ => return Err(AppError::BadRequest("Missing required fields".into())),
    };

    let apartment = payload.apartment.filter(|a| !a.trim().is_empty());
    let payment_method = payload
        .payment_method
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| "card".to_string());

    let created = OrderActive {
        id: NotSet,
        first_name: Set(first_name),
        last_name: Set(last_name),
        country: Set(country),
        street_address: Set(street_address),
        apartment: Set(apartment),
        city: Set(city),
        postcode: Set(postcode),
        phone: Set(phone),
        email: Set(email),
        total_amount: Set(total_amount),
        payment_method: Set(payment_method),
        status: Set("pending".to_string()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(order_id = created.id, "order created");

    Ok(ApiResponse::success_with_message(
        "Order created successfully",
        order_from_entity(created),
    ))
}

pub async fn list_orders(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let items = Orders::find()
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    Ok(ApiResponse::success(OrderList { items }))
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<ApiResponse<Order>> {
    let order = Orders::find_by_id(id).one(&state.orm).await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order not found".into())),
    };

    Ok(ApiResponse::success(order_from_entity(order)))
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        country: model.country,
        street_address: model.street_address,
        apartment: model.apartment,
        city: model.city,
        postcode: model.postcode,
        phone: model.phone,
        email: model.email,
        total_amount: model.total_amount,
        payment_method: model.payment_method,
        status: model.status,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
