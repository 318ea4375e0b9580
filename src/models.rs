use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub phone: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub street_address: String,
    pub apartment: Option<String>,
    pub city: String,
    pub postcode: String,
    pub phone: String,
    pub email: String,
    pub total_amount: Decimal,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
