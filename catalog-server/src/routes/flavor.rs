//! Flavor routes

use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/flavors",
            get(handler::flavor::list).post(handler::flavor::create),
        )
        .route(
            "/api/flavors/{id}",
            get(handler::flavor::get)
                .put(handler::flavor::update)
                .delete(handler::flavor::remove),
        )
}
