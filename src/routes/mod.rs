use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod orders;
pub mod reservations;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/reservations", reservations::router())
        .nest("/orders", orders::router())
}
