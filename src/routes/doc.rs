use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        orders::{CreateOrderRequest, OrderList},
        reservations::{CreateReservationRequest, ReservationList},
    },
    models::{Order, Reservation},
    response::ApiResponse,
    routes::{health, orders, reservations},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::delete_reservation,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
    ),
    components(
        schemas(
            Reservation,
            Order,
            CreateReservationRequest,
            CreateOrderRequest,
            ReservationList,
            OrderList,
            health::HealthData,
            ApiResponse<Reservation>,
            ApiResponse<ReservationList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Reservations", description = "Reservation endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
