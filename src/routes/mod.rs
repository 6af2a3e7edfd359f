pub mod orders;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn order_routes() -> Router<SharedState> {
    Router::new().route(
        "/api/v1/orders",
        post(orders::submit)
            .options(orders::preflight)
            .fallback(orders::method_not_allowed),
    )
}
