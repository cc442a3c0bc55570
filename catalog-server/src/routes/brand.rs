//! Brand routes

use axum::Router;
use axum::routing::get;

use crate::core::ServerState;
use crate::handler;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/brands",
            get(handler::brand::list).post(handler::brand::create),
        )
        .route(
            "/api/brands/{id}",
            get(handler::brand::get)
                .put(handler::brand::update)
                .delete(handler::brand::remove),
        )
}
