//! Product routes

use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/products",
            get(handler::product::list).post(handler::product::create),
        )
        .route(
            "/api/products/{id}",
            get(handler::product::get)
                .put(handler::product::update)
                .delete(handler::product::remove),
        )
}
