//! Supplier routes

use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/suppliers",
            get(handler::supplier::list).post(handler::supplier::create),
        )
        .route(
            "/api/suppliers/{id}",
            get(handler::supplier::get)
                .put(handler::supplier::update)
                .delete(handler::supplier::remove),
        )
}
