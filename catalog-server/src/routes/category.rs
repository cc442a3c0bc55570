//! Category routes

use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/categories",
            get(handler::category::list).post(handler::category::create),
        )
        .route(
            "/api/categories/{id}",
            get(handler::category::get)
                .put(handler::category::update)
                .delete(handler::category::remove),
        )
}
