use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Reservation;

/// All fields are optional so that an absent or blank required field reaches
/// the service's own validation (a 400 envelope) instead of an extractor
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// Serializes as a bare JSON array; the wrapper only exists to give the
/// schema a name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ReservationList {
    #[schema(value_type = Vec<Reservation>)]
    pub items: Vec<Reservation>,
}
